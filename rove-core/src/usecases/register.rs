use super::{map_duplicate, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct Registration {
    pub user_name  : String,
    pub location   : String,
    pub first_name : String,
    pub last_name  : String,
    pub password   : String,
}

/// Creates a new account, only the hash of the password is stored.
///
/// A user name that is already taken is rejected without
/// persisting anything.
pub fn register_account<R: AccountRepo>(repo: &R, reg: Registration) -> Result<AccountId> {
    let Registration {
        user_name,
        location,
        first_name,
        last_name,
        password,
    } = reg;
    let password = password.parse::<Password>()?;
    let new_account = NewAccount {
        user_name,
        location,
        first_name,
        last_name,
        password,
    };
    log::debug!("Registering new account: {}", new_account.user_name);
    repo.create_account(&new_account)
        .map_err(|err| map_duplicate(err, Error::UserNameTaken))
}
