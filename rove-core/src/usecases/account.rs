use super::{map_duplicate, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user_name  : String,
    pub location   : String,
    pub first_name : String,
    pub last_name  : String,
}

pub fn update_profile<R>(repo: &R, account_id: AccountId, update: ProfileUpdate) -> Result<()>
where
    R: AccountRepo,
{
    let ProfileUpdate {
        user_name,
        location,
        first_name,
        last_name,
    } = update;
    let account = Account {
        user_name,
        location,
        first_name,
        last_name,
        ..repo.get_account(account_id)?
    };
    repo.update_account(&account)
        .map_err(|err| map_duplicate(err, Error::UserNameTaken))
}

/// Deletes the account including everything it owns.
///
/// Returns the image names of all deleted posts.
pub fn delete_account<R>(repo: &R, account_id: AccountId) -> Result<Vec<String>>
where
    R: AccountRepo + PostRepo,
{
    let images = repo.image_names_of_account(account_id)?;
    repo.delete_account(account_id)?;
    log::debug!("Deleted account {account_id} with {} post(s)", images.len());
    Ok(images)
}
