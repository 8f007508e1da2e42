//! Error types for configuration loading

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("lesson \"{0}\" has no cards")]
    EmptyLesson(String),

    #[error("invalid window size \"{0}\", expected WIDTHxHEIGHT")]
    InvalidSize(String),
}
