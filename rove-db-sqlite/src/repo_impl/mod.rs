use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use rove_core::{
    entities::*,
    pagination::{Page, PageRequest},
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

pub(crate) fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        // The referenced object does not exist (anymore)
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            repo::Error::NotFound
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_access() -> repo::Error {
    repo::Error::Other(anyhow!("Cannot modify the database with read-only access"))
}

define_sql_function!(fn last_insert_rowid() -> diesel::sql_types::BigInt);

fn last_insert_id(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result(conn)
        .map_err(from_diesel_err)
}

/// Updates and deletes that don't touch a single row indicate a missing object.
fn expect_affected(count: usize) -> Result<()> {
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(count, 1);
    Ok(())
}

fn to_count(count: i64) -> u64 {
    debug_assert!(count >= 0);
    count.max(0) as u64
}

fn to_page<M, T>(request: &PageRequest, total: i64, rows: Vec<M>) -> Page<T>
where
    T: From<M>,
{
    let items = rows.into_iter().map(T::from).collect();
    Page::new(*request, items, to_count(total))
}

fn offset(request: &PageRequest) -> i64 {
    i64::try_from(request.offset()).unwrap_or(i64::MAX)
}

fn limit(request: &PageRequest) -> i64 {
    i64::try_from(request.limit()).unwrap_or(i64::MAX)
}

/// Implements a repository for all connection types by forwarding
/// every method to the free function with the same name.
///
/// Methods in the `write` section fail when invoked through a
/// read-only connection.
macro_rules! impl_repo {
    (
        $repo:ident {
            write {
                $( fn $w:ident(&self $(, $warg:ident : $wty:ty)*) -> $wret:ty; )*
            }
            read {
                $( fn $r:ident(&self $(, $rarg:ident : $rty:ty)*) -> $rret:ty; )*
            }
        }
    ) => {
        impl $repo for DbReadOnly<'_> {
            $(
                fn $w(&self $(, _: $wty)*) -> $wret {
                    Err(read_only_access())
                }
            )*
            $(
                fn $r(&self $(, $rarg: $rty)*) -> $rret {
                    $r(&mut self.conn.borrow_mut() $(, $rarg)*)
                }
            )*
        }

        impl $repo for DbReadWrite<'_> {
            $(
                fn $w(&self $(, $warg: $wty)*) -> $wret {
                    $w(&mut self.conn.borrow_mut() $(, $warg)*)
                }
            )*
            $(
                fn $r(&self $(, $rarg: $rty)*) -> $rret {
                    $r(&mut self.conn.borrow_mut() $(, $rarg)*)
                }
            )*
        }

        impl $repo for DbConnection<'_> {
            $(
                fn $w(&self $(, $warg: $wty)*) -> $wret {
                    $w(&mut self.conn.borrow_mut() $(, $warg)*)
                }
            )*
            $(
                fn $r(&self $(, $rarg: $rty)*) -> $rret {
                    $r(&mut self.conn.borrow_mut() $(, $rarg)*)
                }
            )*
        }
    };
}

mod account;
mod comment;
mod folder;
mod like;
mod lodging;
mod post;
mod tag;
mod todo;
