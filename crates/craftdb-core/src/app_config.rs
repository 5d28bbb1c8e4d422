use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Products JSON file rewritten by every mutating pass.
    pub catalog_path: PathBuf,
    /// YAML manifest listing the product folders to import.
    pub manifest_path: PathBuf,
    /// Root of the `<category>/<product>/<image>` asset tree.
    pub asset_root: PathBuf,
    /// Path segment that marks the start of the public part of a filesystem path.
    pub data_root_marker: String,
    /// Public URL prefix the storefront serves assets from, e.g. `"/images"`.
    pub public_mount: String,
    pub allow_webp: bool,
    /// Seed for generated ratings, reviews and dates. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
    /// Year generated listing dates fall in.
    pub date_year: i32,
}
