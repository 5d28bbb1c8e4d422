use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got '{other}'"))),
        }
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i32>().map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("CRAFTDB_LOG_LEVEL", "info");

    let catalog_path = PathBuf::from(or_default("CRAFTDB_CATALOG_PATH", "./data/products.json"));
    let manifest_path = PathBuf::from(or_default("CRAFTDB_MANIFEST_PATH", "./config/folders.yaml"));
    let asset_root = PathBuf::from(or_default("CRAFTDB_ASSET_ROOT", "./public/images"));

    let data_root_marker = or_default("CRAFTDB_DATA_ROOT_MARKER", "images");
    if data_root_marker.is_empty() || data_root_marker.contains(['/', '\\']) {
        return Err(invalid(
            "CRAFTDB_DATA_ROOT_MARKER",
            "must be a single non-empty path segment".to_string(),
        ));
    }

    let public_mount = or_default("CRAFTDB_PUBLIC_MOUNT", "/images");
    if !public_mount.starts_with('/') || public_mount.trim_matches('/').is_empty() {
        return Err(invalid(
            "CRAFTDB_PUBLIC_MOUNT",
            "must start with '/' and name at least one segment".to_string(),
        ));
    }

    let allow_webp = parse_bool("CRAFTDB_ALLOW_WEBP", "false")?;

    let random_seed = match lookup("CRAFTDB_RANDOM_SEED") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("CRAFTDB_RANDOM_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let date_year = parse_i32("CRAFTDB_DATE_YEAR", "2024")?;
    if !(1970..=9999).contains(&date_year) {
        return Err(invalid(
            "CRAFTDB_DATE_YEAR",
            format!("{date_year} is outside 1970..=9999"),
        ));
    }

    Ok(AppConfig {
        log_level,
        catalog_path,
        manifest_path,
        asset_root,
        data_root_marker,
        public_mount,
        allow_webp,
        random_seed,
        date_year,
    })
}
