use super::*;

pub fn create_folder(
    connections: &sqlite::Connections,
    account_id: AccountId,
    name: String,
) -> Result<FolderId> {
    run_in_transaction(connections, |conn| {
        usecases::create_folder(conn, account_id, name)
    })
}

pub fn rename_folder(
    connections: &sqlite::Connections,
    account_id: AccountId,
    folder_id: FolderId,
    name: String,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::rename_folder(conn, account_id, folder_id, name)
    })
}

pub fn delete_folder(
    connections: &sqlite::Connections,
    account_id: AccountId,
    folder_id: FolderId,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::delete_folder(conn, account_id, folder_id)
    })
}

pub fn save_destination(
    connections: &sqlite::Connections,
    account_id: AccountId,
    folder_id: FolderId,
    post_id: PostId,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::save_destination(conn, account_id, folder_id, post_id)
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn save_a_post_into_a_folder_once() {
        let fixture = BackendFixture::new();
        let ana = fixture.register("ana");
        let bob = fixture.register("bob");
        let post_id = fixture.create_post(bob, "Lisbon");
        let folder_id = flows::create_folder(&fixture.db_connections, ana, "Summer".into()).unwrap();

        flows::save_destination(&fixture.db_connections, ana, folder_id, post_id).unwrap();
        let err = flows::save_destination(&fixture.db_connections, ana, folder_id, post_id)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(usecases::Error::DestinationAlreadySaved)
        ));
        // Only the owner of the folder may save into it
        let err = flows::save_destination(&fixture.db_connections, bob, folder_id, post_id)
            .unwrap_err();
        assert!(matches!(err, AppError::Business(usecases::Error::Forbidden)));
    }
}
