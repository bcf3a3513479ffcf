use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid credentials")]
    Credentials,
    #[error("Invalid password")]
    Password,
    #[error("The user name is already taken")]
    UserNameTaken,
    #[error("There is already a tag with that name")]
    TagNameTaken,
    #[error("The post has already been liked")]
    PostAlreadyLiked,
    #[error("The comment has already been liked")]
    CommentAlreadyLiked,
    #[error("The tag has already been added to the post")]
    TagAlreadyAttached,
    #[error("The folder already contains the post")]
    DestinationAlreadySaved,
    #[error("The post already has a lodging visit")]
    LodgingVisitExists,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<rove_entities::password::ParseError> for Error {
    fn from(_: rove_entities::password::ParseError) -> Self {
        Self::Password
    }
}
