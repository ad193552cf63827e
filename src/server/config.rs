use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ARTWORK_DIR: &str = "./public/images";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Directory served under `/images`
    pub artwork_dir: PathBuf,

    /// Single origin allowed by CORS, if any
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            artwork_dir: std::env::var("ARTWORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARTWORK_DIR)),
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}
