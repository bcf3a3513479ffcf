use crate::repositories;

mod account;
mod comment;
mod error;
mod folder;
mod like;
mod lodging;
mod login;
mod post;
mod register;
mod tag;
mod todo;

#[cfg(test)]
pub mod tests;

pub use self::{
    account::*, comment::*, error::Error, folder::*, like::*, lodging::*, login::*, post::*,
    register::*, tag::*, todo::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        pagination::{Page, PageRequest},
        repositories::{self as repo, *},
    };
}

/// Replaces the storage layer's duplicate signal by a business conflict.
fn map_duplicate(err: repositories::Error, conflict: Error) -> Error {
    match err {
        repositories::Error::AlreadyExists => conflict,
        err => err.into(),
    }
}
