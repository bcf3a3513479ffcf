use rocket::{
    http::{uri::Uri, Status},
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    response::Redirect,
    State,
};

use rove_core::{
    entities::{Account, AccountId},
    gateways::image::ImageStorage,
    repositories::{AccountRepo, Error as RepoError},
};

use super::sqlite::Connections;

pub const COOKIE_ACCOUNT_KEY: &str = "rove-account-id";

/// The logged in account of the current request.
///
/// Requests without a valid session cookie fail with
/// `401 Unauthorized`. Public pages use `Option<Identity>`.
#[derive(Debug, Clone)]
pub struct Identity(Account);

impl Identity {
    pub fn id(&self) -> AccountId {
        self.0.id
    }

    pub fn account(&self) -> &Account {
        &self.0
    }

    /// Routes that contain an account id are only meant for that account.
    pub fn is(&self, account_id: i64) -> bool {
        self.0.id.to_inner() == account_id
    }
}

fn account_id_from_cookie(request: &Request) -> Option<AccountId> {
    request
        .cookies()
        .get_private(COOKIE_ACCOUNT_KEY)
        .and_then(|cookie| cookie.value().parse().ok())
}

fn load_account(connections: &Connections, id: AccountId) -> Result<Option<Account>, Status> {
    let db = connections.shared().map_err(|err| {
        error!("Failed to load account {id}: {err}");
        Status::InternalServerError
    })?;
    match db.get_account(id) {
        Ok(account) => Ok(Some(account)),
        // The account has been deleted in the meantime
        Err(RepoError::NotFound) => Ok(None),
        Err(err) => {
            error!("Failed to load account {id}: {err}");
            Err(Status::InternalServerError)
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Identity {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(account_id) = account_id_from_cookie(request) else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        let connections = try_outcome!(request.guard::<Connections>().await);
        match load_account(&connections, account_id) {
            Ok(Some(account)) => Outcome::Success(Identity(account)),
            Ok(None) => Outcome::Error((Status::Unauthorized, ())),
            Err(status) => Outcome::Error((status, ())),
        }
    }
}

/// Where the picture files of posts are kept.
pub struct Images(Box<dyn ImageStorage + Send + Sync>);

impl Images {
    pub fn new(storage: Box<dyn ImageStorage + Send + Sync>) -> Self {
        Self(storage)
    }

    pub fn storage(&self) -> &dyn ImageStorage {
        &*self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for &'r Images {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let images = try_outcome!(request.guard::<&State<Images>>().await);
        Outcome::Success(images.inner())
    }
}

/// The local page that linked to the current request.
#[derive(Debug, Clone)]
pub struct Referer(Option<String>);

impl Referer {
    pub fn redirect_or(self, fallback: &str) -> Redirect {
        match self.0 {
            Some(path) => Redirect::to(path),
            None => Redirect::to(fallback.to_string()),
        }
    }
}

/// Only the path and query of the referring URI are retained.
fn local_part(referer: &str) -> Option<String> {
    let (path, query) = match Uri::parse_any(referer).ok()? {
        Uri::Origin(origin) => (
            origin.path().to_string(),
            origin.query().map(|q| q.to_string()),
        ),
        Uri::Absolute(absolute) => (
            absolute.path().to_string(),
            absolute.query().map(|q| q.to_string()),
        ),
        _ => return None,
    };
    if !is_local_path(&path) {
        return None;
    }
    Some(match query {
        Some(query) => format!("{path}?{query}"),
        None => path,
    })
}

/// Prevents redirects to other hosts.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Referer {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let referer = request.headers().get_one("Referer").and_then(local_part);
        Outcome::Success(Referer(referer))
    }
}
