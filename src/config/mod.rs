use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "rove.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_IMAGE_DIR: &str = "ROVE_IMAGE_DIR";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub images: Images,
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct Images {
    /// File system directory for the uploaded post pictures.
    pub dir: PathBuf,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => {
                log::info!("Load configuration from {}", file_path.display());
                toml::from_str(&cfg_string)?
            }
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(dir) = env::var(ENV_NAME_IMAGE_DIR) {
            cfg.images.dir = dir.into();
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, images } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool needs at least one connection"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Images { dir } = images.unwrap_or_default();
        if dir.as_os_str().is_empty() {
            return Err(anyhow!("No image directory defined"));
        }
        let images = Images { dir };

        Ok(Self { db, images })
    }
}
