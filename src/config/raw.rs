use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("rove.default.toml");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub images: Option<Images>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Images {
    pub dir: PathBuf,
}

impl Default for Images {
    fn default() -> Self {
        Config::default().images.expect("Images configuration")
    }
}
