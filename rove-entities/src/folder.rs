use crate::id::{AccountId, FolderId, PostId};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationFolder {
    pub id         : FolderId,
    pub account_id : AccountId,
    pub name       : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDestinationFolder {
    pub account_id : AccountId,
    pub name       : String,
}

/// A post saved into a destination folder.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SavedDestination {
    pub folder_id : FolderId,
    pub post_id   : PostId,
}
