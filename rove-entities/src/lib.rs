#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # rove-entities
//!
//! Reusable, agnostic domain entities for Rove.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod account;
pub mod comment;
pub mod folder;
pub mod id;
pub mod like;
pub mod lodging;
pub mod password;
pub mod post;
pub mod tag;
pub mod todo;
