pub mod app_config;
pub mod config;
pub mod manifest;
pub mod naming;
pub mod pricing;
pub mod products;
pub mod record;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use manifest::{load_manifest, FolderGroup, Manifest, ManifestEntry, PriceOverrides};
pub use naming::{dedup_key, display_name};
pub use pricing::PriceTable;
pub use products::{Category, Product};
pub use record::CatalogRecord;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read manifest file {path}: {source}")]
    ManifestIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest file: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("manifest validation error: {0}")]
    Validation(String),
}
