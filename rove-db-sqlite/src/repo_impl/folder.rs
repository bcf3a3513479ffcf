use super::*;

impl From<models::DestinationFolder> for DestinationFolder {
    fn from(from: models::DestinationFolder) -> Self {
        let models::DestinationFolder {
            id,
            account_id,
            name,
        } = from;
        Self {
            id: id.into(),
            account_id: account_id.into(),
            name,
        }
    }
}

impl_repo! {
    FolderRepo {
        write {
            fn create_folder(&self, folder: &NewDestinationFolder) -> Result<FolderId>;
            fn update_folder(&self, folder: &DestinationFolder) -> Result<()>;
            fn delete_folder(&self, id: FolderId) -> Result<()>;
            fn create_saved_destination(&self, saved: &SavedDestination) -> Result<()>;
        }
        read {
            fn get_folder(&self, id: FolderId) -> Result<DestinationFolder>;
            fn folders_of_account(&self, account_id: AccountId) -> Result<Vec<DestinationFolder>>;
        }
    }
}

fn create_folder(conn: &mut SqliteConnection, folder: &NewDestinationFolder) -> Result<FolderId> {
    let new_folder = models::NewDestinationFolder {
        account_id: folder.account_id.to_inner(),
        name: &folder.name,
    };
    diesel::insert_into(schema::destination_folder::table)
        .values(&new_folder)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn update_folder(conn: &mut SqliteConnection, folder: &DestinationFolder) -> Result<()> {
    use schema::destination_folder::dsl;
    let count = diesel::update(dsl::destination_folder.filter(dsl::id.eq(folder.id.to_inner())))
        .set(dsl::name.eq(&folder.name))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_folder(conn: &mut SqliteConnection, id: FolderId) -> Result<()> {
    use schema::destination_folder::dsl;
    let count = diesel::delete(dsl::destination_folder.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn create_saved_destination(conn: &mut SqliteConnection, saved: &SavedDestination) -> Result<()> {
    let saved = models::SavedDestination {
        folder_id: saved.folder_id.to_inner(),
        post_id: saved.post_id.to_inner(),
    };
    diesel::insert_into(schema::saved_destination::table)
        .values(&saved)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_folder(conn: &mut SqliteConnection, id: FolderId) -> Result<DestinationFolder> {
    use schema::destination_folder::dsl;
    Ok(dsl::destination_folder
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::DestinationFolder>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn folders_of_account(
    conn: &mut SqliteConnection,
    account_id: AccountId,
) -> Result<Vec<DestinationFolder>> {
    use schema::destination_folder::dsl;
    Ok(dsl::destination_folder
        .filter(dsl::account_id.eq(account_id.to_inner()))
        .order_by(dsl::id.asc())
        .load::<models::DestinationFolder>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
