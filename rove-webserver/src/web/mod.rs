use std::path::PathBuf;

use rocket::{config::Config as RocketCfg, fs::FileServer, Build, Rocket, Route};

use rove_core::gateways::image::ImageStorage;

mod error;
mod frontend;
mod guards;
mod sqlite;


/// Post pictures are served from here.
const IMAGES_MOUNT_POINT: &str = "/post_pics";

#[derive(Debug, Clone)]
pub struct Cfg {
    /// The directory that contains the stored post pictures.
    pub image_dir: PathBuf,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    images: Box<dyn ImageStorage + Send + Sync>,
) -> Rocket<Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    info!(
        "Serving post pictures from {} at {IMAGES_MOUNT_POINT}",
        cfg.image_dir.display()
    );
    let image_files = FileServer::from(&cfg.image_dir);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(guards::Images::new(images))
        .manage(cfg)
        .register("/", frontend::catchers())
        .mount(IMAGES_MOUNT_POINT, image_files);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    images: Box<dyn ImageStorage + Send + Sync>,
    cfg: Cfg,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db, images);
    if let Err(err) = instance.launch().await {
        log::error!("Unable to run web server: {err}");
    }
}
