use super::*;

pub fn register_account(
    connections: &sqlite::Connections,
    registration: usecases::Registration,
) -> Result<AccountId> {
    let user_name = registration.user_name.clone();
    let account_id = run_in_transaction(connections, |conn| {
        usecases::register_account(conn, registration).inspect_err(|err| {
            warn!("Failed to register account {user_name}: {err}");
        })
    })?;
    info!("Registered new account {user_name} ({account_id})");
    Ok(account_id)
}

pub fn update_profile(
    connections: &sqlite::Connections,
    account_id: AccountId,
    update: usecases::ProfileUpdate,
) -> Result<()> {
    run_in_transaction(connections, |conn| {
        usecases::update_profile(conn, account_id, update).inspect_err(|err| {
            warn!("Failed to update profile of account {account_id}: {err}");
        })
    })
}

/// Deletes the account with all of its content including the
/// picture files of its posts.
pub fn delete_account(
    connections: &sqlite::Connections,
    images: &dyn ImageStorage,
    account_id: AccountId,
) -> Result<()> {
    let image_names = run_in_transaction(connections, |conn| {
        usecases::delete_account(conn, account_id).inspect_err(|err| {
            warn!("Failed to delete account {account_id}: {err}");
        })
    })?;
    for name in &image_names {
        remove_image_file(images, name);
    }
    info!("Deleted account {account_id}");
    Ok(())
}
