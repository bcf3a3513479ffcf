#[macro_use]
extern crate log;

mod account;
mod comment;
mod folder;
mod like;
mod lodging;
mod post;
mod tag;
mod todo;

pub mod prelude {
    pub use super::{
        account::*, comment::*, folder::*, like::*, lodging::*, post::*, tag::*, todo::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rove_core::{entities::*, gateways::image::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rove_db_sqlite::{Connections, DbConnection};
}

/// Runs a single use case inside of a new transaction.
fn run_in_transaction<T, F>(connections: &sqlite::Connections, f: F) -> Result<T>
where
    F: FnOnce(&sqlite::DbConnection) -> std::result::Result<T, usecases::Error>,
{
    Ok(connections.exclusive()?.transaction(f)?)
}

/// Files that could not be removed are only reported.
fn remove_image_file(images: &dyn ImageStorage, name: &str) {
    if let Err(err) = images.remove_image(name) {
        warn!("Failed to remove image file {name}: {err}");
    }
}
