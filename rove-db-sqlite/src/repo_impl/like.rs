use super::*;

impl_repo! {
    LikeRepo {
        write {
            fn create_post_like(&self, like: &PostLike) -> Result<()>;
            fn create_comment_like(&self, like: &CommentLike) -> Result<()>;
        }
        read {
            fn count_post_likes(&self, post_id: PostId) -> Result<u64>;
            fn count_comment_likes(&self, comment_id: CommentId) -> Result<u64>;
        }
    }
}

fn create_post_like(conn: &mut SqliteConnection, like: &PostLike) -> Result<()> {
    let like = models::PostLike {
        account_id: like.account_id.to_inner(),
        post_id: like.post_id.to_inner(),
    };
    diesel::insert_into(schema::post_like::table)
        .values(&like)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn create_comment_like(conn: &mut SqliteConnection, like: &CommentLike) -> Result<()> {
    let like = models::CommentLike {
        account_id: like.account_id.to_inner(),
        comment_id: like.comment_id.to_inner(),
    };
    diesel::insert_into(schema::comment_like::table)
        .values(&like)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_post_likes(conn: &mut SqliteConnection, post_id: PostId) -> Result<u64> {
    use schema::post_like::dsl;
    dsl::post_like
        .filter(dsl::post_id.eq(post_id.to_inner()))
        .count()
        .get_result::<i64>(conn)
        .map(to_count)
        .map_err(from_diesel_err)
}

fn count_comment_likes(conn: &mut SqliteConnection, comment_id: CommentId) -> Result<u64> {
    use schema::comment_like::dsl;
    dsl::comment_like
        .filter(dsl::comment_id.eq(comment_id.to_inner()))
        .count()
        .get_result::<i64>(conn)
        .map(to_count)
        .map_err(from_diesel_err)
}
