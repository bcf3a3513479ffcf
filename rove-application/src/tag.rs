use super::*;

pub fn create_tag(connections: &sqlite::Connections, new_tag: NewTag) -> Result<TagId> {
    run_in_transaction(connections, |conn| usecases::create_tag(conn, new_tag))
}

pub fn attach_tag_to_post(
    connections: &sqlite::Connections,
    account_id: AccountId,
    post_id: PostId,
    tag_id: TagId,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::attach_tag_to_post(conn, account_id, post_id, tag_id)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn beach() -> NewTag {
        NewTag {
            name: "Beach".into(),
            description: Some("Sand and sea".into()),
        }
    }

    #[test]
    fn tag_names_are_unique() {
        let fixture = BackendFixture::new();
        flows::create_tag(&fixture.db_connections, beach()).unwrap();
        let err = flows::create_tag(&fixture.db_connections, beach()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::TagNameTaken)
        ));
        let db = fixture.db_connections.shared().unwrap();
        let tags = db.all_tags(&PageRequest::new(None, 10)).unwrap();
        assert_eq!(tags.total, 1);
    }

    #[test]
    fn attach_tag_once() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let post_id = fixture.create_post(ana, "Lisbon");
        let tag_id = flows::create_tag(&fixture.db_connections, beach()).unwrap();

        flows::attach_tag_to_post(&fixture.db_connections, ana, post_id, tag_id).unwrap();
        let err =
            flows::attach_tag_to_post(&fixture.db_connections, ana, post_id, tag_id).unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::TagAlreadyAttached)
        ));
    }
}
