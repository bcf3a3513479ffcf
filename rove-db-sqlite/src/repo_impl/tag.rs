use super::*;

impl From<models::Tag> for Tag {
    fn from(from: models::Tag) -> Self {
        let models::Tag {
            id,
            name,
            description,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
        }
    }
}

impl_repo! {
    TagRepo {
        write {
            fn create_tag(&self, tag: &NewTag) -> Result<TagId>;
            fn create_post_tag(&self, post_tag: &PostTag) -> Result<()>;
        }
        read {
            fn get_tag(&self, id: TagId) -> Result<Tag>;
            fn all_tags(&self, page: &PageRequest) -> Result<Page<Tag>>;
            fn tags_of_post(&self, post_id: PostId) -> Result<Vec<Tag>>;
        }
    }
}

fn create_tag(conn: &mut SqliteConnection, tag: &NewTag) -> Result<TagId> {
    let new_tag = models::NewTag {
        name: &tag.name,
        description: tag.description.as_deref(),
    };
    diesel::insert_into(schema::tag::table)
        .values(&new_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn create_post_tag(conn: &mut SqliteConnection, post_tag: &PostTag) -> Result<()> {
    let post_tag = models::PostTag {
        post_id: post_tag.post_id.to_inner(),
        tag_id: post_tag.tag_id.to_inner(),
    };
    diesel::insert_into(schema::post_tag::table)
        .values(&post_tag)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_tag(conn: &mut SqliteConnection, id: TagId) -> Result<Tag> {
    use schema::tag::dsl;
    Ok(dsl::tag
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_tags(conn: &mut SqliteConnection, page: &PageRequest) -> Result<Page<Tag>> {
    use schema::tag::dsl;
    let total = dsl::tag
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::tag
        .order_by(dsl::id.asc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn tags_of_post(conn: &mut SqliteConnection, post_id: PostId) -> Result<Vec<Tag>> {
    use schema::{post_tag::dsl as pt_dsl, tag::dsl};
    Ok(dsl::tag
        .inner_join(pt_dsl::post_tag)
        .filter(pt_dsl::post_id.eq(post_id.to_inner()))
        .select(schema::tag::all_columns)
        .order_by(dsl::name.asc())
        .load::<models::Tag>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
