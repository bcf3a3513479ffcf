use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use rove_gateways::images::FsImageStorage;

#[derive(Debug, Parser)]
#[command(name = "rove", about = "Travel journal web application", version)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    /// File system directory for the post pictures
    #[arg(long, value_name = "DIR")]
    image_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(dir) = args.image_dir {
        cfg.images.dir = dir;
    }

    log::info!(
        "Connecting to SQLite database {} (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections =
        rove_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    rove_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let images = FsImageStorage::try_new(&cfg.images.dir)?;
    let web_cfg = rove_webserver::Cfg {
        image_dir: images.path().to_path_buf(),
    };
    rocket::execute(rove_webserver::run(
        connections,
        Box::new(images),
        web_cfg,
    ));
    Ok(())
}
