use crate::{id::AccountId, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id         : AccountId,
    pub user_name  : String,
    pub location   : String,
    pub first_name : String,
    pub last_name  : String,
    pub password   : Password,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub user_name  : String,
    pub location   : String,
    pub first_name : String,
    pub last_name  : String,
    pub password   : Password,
}
