//! @ai:module:intent Define error types for SDT and ROC analysis
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all sdt-roc operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("No conditions present")]
    EmptyInput,

    #[error("At least two ROC points are needed to integrate a curve, found {found}")]
    InsufficientPoints { found: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read experiment file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid experiment definition: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize experiment definition: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
