use crate::id::{AccountId, CommentId, PostId};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostLike {
    pub account_id : AccountId,
    pub post_id    : PostId,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentLike {
    pub account_id : AccountId,
    pub comment_id : CommentId,
}
