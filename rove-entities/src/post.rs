use crate::id::{AccountId, PostId};

/// A travel report with a single picture.
///
/// `image` is the generated file name of the stored picture,
/// not a path or URL.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id         : PostId,
    pub account_id : AccountId,
    pub location   : String,
    pub title      : String,
    pub content    : String,
    pub image      : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub account_id : AccountId,
    pub location   : String,
    pub title      : String,
    pub content    : String,
    pub image      : String,
}
