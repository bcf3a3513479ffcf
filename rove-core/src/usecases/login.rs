use super::prelude::*;

pub struct Credentials<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
}

/// An unknown user name and a wrong password are indistinguishable
/// for the caller.
pub fn login_with_user_name<R>(repo: &R, login: &Credentials) -> Result<Account>
where
    R: AccountRepo,
{
    match repo.try_get_account_by_user_name(login.user_name)? {
        Some(account) if account.password.verify(login.password) => Ok(account),
        _ => Err(Error::Credentials),
    }
}
