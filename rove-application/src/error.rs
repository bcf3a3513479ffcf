use rove_core::{repositories::Error as RepoError, usecases::Error as BusinessError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BusinessError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BusinessError::Repo(err))
    }
}

impl AppError {
    pub fn business(&self) -> Option<&BusinessError> {
        match self {
            Self::Business(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Business(BusinessError::Repo(RepoError::NotFound))
        )
    }
}
