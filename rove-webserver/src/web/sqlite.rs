use std::ops::Deref;

use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

/// The managed connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(rove_db_sqlite::Connections);

impl From<rove_db_sqlite::Connections> for Connections {
    fn from(pool: rove_db_sqlite::Connections) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = rove_db_sqlite::Connections;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<Connections>() {
            Some(connections) => Outcome::Success(connections.clone()),
            None => {
                error!("No database connections available");
                Outcome::Error((Status::InternalServerError, ()))
            }
        }
    }
}
