use crate::id::{AccountId, CommentId, PostId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : CommentId,
    pub account_id : AccountId,
    pub post_id    : PostId,
    pub content    : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub account_id : AccountId,
    pub post_id    : PostId,
    pub content    : String,
}
