use crate::id::{AccountId, ToDoId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDo {
    pub id          : ToDoId,
    pub account_id  : AccountId,
    pub name        : String,
    pub description : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToDo {
    pub account_id  : AccountId,
    pub name        : String,
    pub description : String,
}
