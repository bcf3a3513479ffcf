#![recursion_limit = "256"]

#[macro_use]
extern crate log;

use rove_core::gateways::image::ImageStorage;
use rove_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    images: Box<dyn ImageStorage + Send + Sync>,
    cfg: Cfg,
) {
    web::run(connections.into(), images, cfg).await;
}
