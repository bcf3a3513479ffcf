use super::*;

impl From<models::Post> for Post {
    fn from(from: models::Post) -> Self {
        let models::Post {
            id,
            account_id,
            location,
            title,
            content,
            image,
        } = from;
        Self {
            id: id.into(),
            account_id: account_id.into(),
            location,
            title,
            content,
            image,
        }
    }
}

impl_repo! {
    PostRepo {
        write {
            fn create_post(&self, post: &NewPost) -> Result<PostId>;
            fn update_post(&self, post: &Post) -> Result<()>;
            fn delete_post(&self, id: PostId) -> Result<()>;
        }
        read {
            fn get_post(&self, id: PostId) -> Result<Post>;
            fn recent_posts(&self, page: &PageRequest) -> Result<Page<Post>>;
            fn posts_of_account(&self, account_id: AccountId, page: &PageRequest) -> Result<Page<Post>>;
            fn posts_with_tag(&self, tag_id: TagId, page: &PageRequest) -> Result<Page<Post>>;
            fn posts_in_folder(&self, folder_id: FolderId, page: &PageRequest) -> Result<Page<Post>>;
            fn image_names_of_account(&self, account_id: AccountId) -> Result<Vec<String>>;
        }
    }
}

fn create_post(conn: &mut SqliteConnection, post: &NewPost) -> Result<PostId> {
    let new_post = models::NewPost {
        account_id: post.account_id.to_inner(),
        location: &post.location,
        title: &post.title,
        content: &post.content,
        image: &post.image,
    };
    diesel::insert_into(schema::post::table)
        .values(&new_post)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn update_post(conn: &mut SqliteConnection, post: &Post) -> Result<()> {
    use schema::post::dsl;
    let count = diesel::update(dsl::post.filter(dsl::id.eq(post.id.to_inner())))
        .set((
            dsl::location.eq(&post.location),
            dsl::title.eq(&post.title),
            dsl::content.eq(&post.content),
            dsl::image.eq(&post.image),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_post(conn: &mut SqliteConnection, id: PostId) -> Result<()> {
    use schema::post::dsl;
    let count = diesel::delete(dsl::post.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn get_post(conn: &mut SqliteConnection, id: PostId) -> Result<Post> {
    use schema::post::dsl;
    Ok(dsl::post
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Post>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn recent_posts(conn: &mut SqliteConnection, page: &PageRequest) -> Result<Page<Post>> {
    use schema::post::dsl;
    let total = dsl::post
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::post
        .order_by(dsl::id.desc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn posts_of_account(
    conn: &mut SqliteConnection,
    account_id: AccountId,
    page: &PageRequest,
) -> Result<Page<Post>> {
    use schema::post::dsl;
    let account_id = account_id.to_inner();
    let total = dsl::post
        .filter(dsl::account_id.eq(account_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::post
        .filter(dsl::account_id.eq(account_id))
        .order_by(dsl::id.desc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn posts_with_tag(
    conn: &mut SqliteConnection,
    tag_id: TagId,
    page: &PageRequest,
) -> Result<Page<Post>> {
    use schema::{post::dsl, post_tag::dsl as pt_dsl};
    let tag_id = tag_id.to_inner();
    let total = pt_dsl::post_tag
        .filter(pt_dsl::tag_id.eq(tag_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::post
        .inner_join(pt_dsl::post_tag)
        .filter(pt_dsl::tag_id.eq(tag_id))
        .select(schema::post::all_columns)
        .order_by(dsl::id.desc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn posts_in_folder(
    conn: &mut SqliteConnection,
    folder_id: FolderId,
    page: &PageRequest,
) -> Result<Page<Post>> {
    use schema::{post::dsl, saved_destination::dsl as sd_dsl};
    let folder_id = folder_id.to_inner();
    let total = sd_dsl::saved_destination
        .filter(sd_dsl::folder_id.eq(folder_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::post
        .inner_join(sd_dsl::saved_destination)
        .filter(sd_dsl::folder_id.eq(folder_id))
        .select(schema::post::all_columns)
        .order_by(dsl::id.desc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Post>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn image_names_of_account(conn: &mut SqliteConnection, account_id: AccountId) -> Result<Vec<String>> {
    use schema::post::dsl;
    dsl::post
        .filter(dsl::account_id.eq(account_id.to_inner()))
        .select(dsl::image)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}
