use super::*;

pub fn create_comment(
    connections: &sqlite::Connections,
    account_id: AccountId,
    post_id: PostId,
    content: String,
) -> Result<CommentId> {
    run_in_transaction(connections, |conn| {
        usecases::create_comment(conn, account_id, post_id, content).inspect_err(|err| {
            warn!("Failed to comment on post {post_id}: {err}");
        })
    })
}

pub fn update_comment(
    connections: &sqlite::Connections,
    account_id: AccountId,
    comment_id: CommentId,
    content: String,
) -> Result<Comment> {
    run_in_transaction(connections, |conn| {
        usecases::update_comment(conn, account_id, comment_id, content)
    })
}

pub fn delete_comment(
    connections: &sqlite::Connections,
    account_id: AccountId,
    comment_id: CommentId,
) -> Result<Comment> {
    run_in_transaction(connections, |conn| {
        usecases::delete_comment(conn, account_id, comment_id)
    })
}
