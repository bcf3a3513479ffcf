pub mod gateways;
pub mod pagination;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use rove_entities::{
        account::*, comment::*, folder::*, id::*, like::*, lodging::*, password::*, post::*,
        tag::*, todo::*,
    };
}
