// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::{
    entities::*,
    pagination::{Page, PageRequest},
};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AccountRepo {
    /// Fails with [`Error::AlreadyExists`] if the user name is taken.
    fn create_account(&self, account: &NewAccount) -> Result<AccountId>;
    /// Fails with [`Error::AlreadyExists`] if the user name is taken.
    fn update_account(&self, account: &Account) -> Result<()>;
    /// Deletes the account and everything it owns.
    fn delete_account(&self, id: AccountId) -> Result<()>;

    fn get_account(&self, id: AccountId) -> Result<Account>;
    fn try_get_account_by_user_name(&self, user_name: &str) -> Result<Option<Account>>;
}

pub trait PostRepo {
    fn create_post(&self, post: &NewPost) -> Result<PostId>;
    fn update_post(&self, post: &Post) -> Result<()>;
    fn delete_post(&self, id: PostId) -> Result<()>;

    fn get_post(&self, id: PostId) -> Result<Post>;

    // All listings are ordered newest first
    fn recent_posts(&self, page: &PageRequest) -> Result<Page<Post>>;
    fn posts_of_account(&self, account_id: AccountId, page: &PageRequest) -> Result<Page<Post>>;
    fn posts_with_tag(&self, tag_id: TagId, page: &PageRequest) -> Result<Page<Post>>;
    fn posts_in_folder(&self, folder_id: FolderId, page: &PageRequest) -> Result<Page<Post>>;

    fn image_names_of_account(&self, account_id: AccountId) -> Result<Vec<String>>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &NewComment) -> Result<CommentId>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: CommentId) -> Result<()>;

    fn get_comment(&self, id: CommentId) -> Result<Comment>;

    // Oldest first
    fn comments_of_post(&self, post_id: PostId, page: &PageRequest) -> Result<Page<Comment>>;
    fn comments_of_account(
        &self,
        account_id: AccountId,
        page: &PageRequest,
    ) -> Result<Page<Comment>>;
}

pub trait LikeRepo {
    /// Fails with [`Error::AlreadyExists`] if the account already liked the post.
    fn create_post_like(&self, like: &PostLike) -> Result<()>;
    /// Fails with [`Error::AlreadyExists`] if the account already liked the comment.
    fn create_comment_like(&self, like: &CommentLike) -> Result<()>;

    fn count_post_likes(&self, post_id: PostId) -> Result<u64>;
    fn count_comment_likes(&self, comment_id: CommentId) -> Result<u64>;
}

pub trait TagRepo {
    /// Fails with [`Error::AlreadyExists`] if the name is taken.
    fn create_tag(&self, tag: &NewTag) -> Result<TagId>;
    fn get_tag(&self, id: TagId) -> Result<Tag>;
    fn all_tags(&self, page: &PageRequest) -> Result<Page<Tag>>;

    /// Fails with [`Error::AlreadyExists`] if the tag is already attached.
    fn create_post_tag(&self, post_tag: &PostTag) -> Result<()>;
    fn tags_of_post(&self, post_id: PostId) -> Result<Vec<Tag>>;
}

pub trait LodgingRepo {
    fn create_lodging(&self, lodging: &NewLodging) -> Result<LodgingId>;
    fn get_lodging(&self, id: LodgingId) -> Result<Lodging>;
    // Ordered by name
    fn all_lodgings(&self, page: &PageRequest) -> Result<Page<Lodging>>;

    /// Fails with [`Error::AlreadyExists`] if the post already has a visit.
    fn create_lodging_visit(&self, visit: &NewLodgingVisit) -> Result<LodgingVisitId>;
    fn try_get_visit_of_post(&self, post_id: PostId) -> Result<Option<LodgingVisit>>;
    // Newest first
    fn visits_of_lodging(
        &self,
        lodging_id: LodgingId,
        page: &PageRequest,
    ) -> Result<Page<LodgingVisit>>;
}

pub trait FolderRepo {
    fn create_folder(&self, folder: &NewDestinationFolder) -> Result<FolderId>;
    fn update_folder(&self, folder: &DestinationFolder) -> Result<()>;
    fn delete_folder(&self, id: FolderId) -> Result<()>;

    fn get_folder(&self, id: FolderId) -> Result<DestinationFolder>;
    fn folders_of_account(&self, account_id: AccountId) -> Result<Vec<DestinationFolder>>;

    /// Fails with [`Error::AlreadyExists`] if the folder already contains the post.
    fn create_saved_destination(&self, saved: &SavedDestination) -> Result<()>;
}

pub trait ToDoRepo {
    fn create_todo(&self, todo: &NewToDo) -> Result<ToDoId>;
    fn update_todo(&self, todo: &ToDo) -> Result<()>;
    fn delete_todo(&self, id: ToDoId) -> Result<()>;

    fn get_todo(&self, id: ToDoId) -> Result<ToDo>;
    fn todos_of_account(&self, account_id: AccountId, page: &PageRequest) -> Result<Page<ToDo>>;
}
