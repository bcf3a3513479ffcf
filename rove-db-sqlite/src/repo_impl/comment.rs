use super::*;

impl From<models::Comment> for Comment {
    fn from(from: models::Comment) -> Self {
        let models::Comment {
            id,
            account_id,
            post_id,
            content,
        } = from;
        Self {
            id: id.into(),
            account_id: account_id.into(),
            post_id: post_id.into(),
            content,
        }
    }
}

impl_repo! {
    CommentRepo {
        write {
            fn create_comment(&self, comment: &NewComment) -> Result<CommentId>;
            fn update_comment(&self, comment: &Comment) -> Result<()>;
            fn delete_comment(&self, id: CommentId) -> Result<()>;
        }
        read {
            fn get_comment(&self, id: CommentId) -> Result<Comment>;
            fn comments_of_post(&self, post_id: PostId, page: &PageRequest) -> Result<Page<Comment>>;
            fn comments_of_account(&self, account_id: AccountId, page: &PageRequest) -> Result<Page<Comment>>;
        }
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &NewComment) -> Result<CommentId> {
    let new_comment = models::NewComment {
        account_id: comment.account_id.to_inner(),
        post_id: comment.post_id.to_inner(),
        content: &comment.content,
    };
    diesel::insert_into(schema::comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::update(dsl::comment.filter(dsl::id.eq(comment.id.to_inner())))
        .set(dsl::content.eq(&comment.content))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_comment(conn: &mut SqliteConnection, id: CommentId) -> Result<()> {
    use schema::comment::dsl;
    let count = diesel::delete(dsl::comment.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn get_comment(conn: &mut SqliteConnection, id: CommentId) -> Result<Comment> {
    use schema::comment::dsl;
    Ok(dsl::comment
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Comment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn comments_of_post(
    conn: &mut SqliteConnection,
    post_id: PostId,
    page: &PageRequest,
) -> Result<Page<Comment>> {
    use schema::comment::dsl;
    let post_id = post_id.to_inner();
    let total = dsl::comment
        .filter(dsl::post_id.eq(post_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::comment
        .filter(dsl::post_id.eq(post_id))
        .order_by(dsl::id.asc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}

fn comments_of_account(
    conn: &mut SqliteConnection,
    account_id: AccountId,
    page: &PageRequest,
) -> Result<Page<Comment>> {
    use schema::comment::dsl;
    let account_id = account_id.to_inner();
    let total = dsl::comment
        .filter(dsl::account_id.eq(account_id))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    let rows = dsl::comment
        .filter(dsl::account_id.eq(account_id))
        .order_by(dsl::id.asc())
        .offset(offset(page))
        .limit(limit(page))
        .load::<models::Comment>(conn)
        .map_err(from_diesel_err)?;
    Ok(to_page(page, total, rows))
}
