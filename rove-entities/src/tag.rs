use crate::id::{PostId, TagId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id          : TagId,
    pub name        : String,
    pub description : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name        : String,
    pub description : Option<String>,
}

/// Associates a tag with a post.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostTag {
    pub post_id : PostId,
    pub tag_id  : TagId,
}
