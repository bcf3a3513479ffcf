use std::io;

use rocket::{
    http::Status,
    response::{self, Redirect, Responder},
    Request,
};
use thiserror::Error;

use rove_application::error::AppError;
use rove_core::{repositories::Error as RepoError, usecases::Error as BusinessError};

/// Failures that are not handled by the route itself.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<BusinessError> for Error {
    fn from(err: BusinessError) -> Self {
        Self::App(err.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        match self {
            Self::App(err) if err.is_not_found() => Err(Status::NotFound),
            // Foreign records are silently left alone
            Self::App(AppError::Business(BusinessError::Forbidden)) => {
                debug!("Rejected {} {}: not the owner", req.method(), req.uri());
                Redirect::to("/").respond_to(req)
            }
            err => {
                error!("Failed to handle {} {}: {err}", req.method(), req.uri());
                Err(Status::InternalServerError)
            }
        }
    }
}
