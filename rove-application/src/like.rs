use super::*;

pub fn like_post(
    connections: &sqlite::Connections,
    account_id: AccountId,
    post_id: PostId,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::like_post(conn, account_id, post_id)
    })
}

pub fn like_comment(
    connections: &sqlite::Connections,
    account_id: AccountId,
    comment_id: CommentId,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::like_comment(conn, account_id, comment_id)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn like_a_post_only_once() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let bob = fixture.register("bob");
        let post_id = fixture.create_post(ana, "Lisbon");

        flows::like_post(&fixture.db_connections, bob, post_id).unwrap();
        let err = flows::like_post(&fixture.db_connections, bob, post_id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::PostAlreadyLiked)
        ));
        flows::like_post(&fixture.db_connections, ana, post_id).unwrap();

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(db.count_post_likes(post_id).unwrap(), 2);
    }

    #[test]
    fn like_a_comment_only_once() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        let comment_id =
            flows::create_comment(&fixture.db_connections, ana, post_id, "Sunny".into()).unwrap();

        flows::like_comment(&fixture.db_connections, ana, comment_id).unwrap();
        assert!(flows::like_comment(&fixture.db_connections, ana, comment_id).is_err());

        let db = fixture.db_connections.shared().unwrap();
        assert_eq!(db.count_comment_likes(comment_id).unwrap(), 1);
    }
}
