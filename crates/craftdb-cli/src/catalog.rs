//! Catalog command handlers for the CLI.
//!
//! Each handler loads the catalog, runs one pass and prints its summary.
//! Per-folder problems are logged inside the pass; only load and save
//! failures come back as errors.

use std::path::PathBuf;

use craftdb_core::AppConfig;
use craftdb_enrich::{
    backfill_images, enrich_catalog, fix_image_paths, reclassify_subcategories, run_pass,
    verify_images, Catalog, FieldRandomizer, ImageScanner, PassContext, PathNormalizer,
};

/// Effective settings for one run: environment config with CLI overrides applied.
#[derive(Debug, Clone)]
pub(crate) struct RunSettings {
    pub(crate) catalog_path: PathBuf,
    pub(crate) manifest_path: PathBuf,
    pub(crate) asset_root: PathBuf,
    pub(crate) data_root_marker: String,
    pub(crate) public_mount: String,
    pub(crate) allow_webp: bool,
    pub(crate) random_seed: Option<u64>,
    pub(crate) date_year: i32,
}

impl RunSettings {
    pub(crate) fn from_config(config: AppConfig) -> Self {
        Self {
            catalog_path: config.catalog_path,
            manifest_path: config.manifest_path,
            asset_root: config.asset_root,
            data_root_marker: config.data_root_marker,
            public_mount: config.public_mount,
            allow_webp: config.allow_webp,
            random_seed: config.random_seed,
            date_year: config.date_year,
        }
    }

    pub(crate) fn with_catalog(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.catalog_path = path;
        }
        self
    }

    pub(crate) fn with_manifest(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.manifest_path = path;
        }
        self
    }

    pub(crate) fn with_asset_root(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.asset_root = path;
        }
        self
    }

    pub(crate) fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.random_seed = seed;
        }
        self
    }

    pub(crate) fn normalizer(&self) -> PathNormalizer {
        PathNormalizer::new(&self.data_root_marker, &self.public_mount)
    }

    pub(crate) fn pass_context(&self) -> PassContext {
        PassContext::new(
            self.asset_root.clone(),
            ImageScanner::new(self.allow_webp),
            self.normalizer(),
        )
    }
}

fn dry_run_note(dry_run: bool) -> &'static str {
    if dry_run {
        " (dry run, catalog not written)"
    } else {
        ""
    }
}

/// Add records for every manifest folder not yet in the catalog.
///
/// # Errors
///
/// Returns an error if the manifest is invalid, the listing year is not a
/// valid calendar year, or the catalog cannot be loaded or saved.
pub(crate) fn run_enrich(settings: &RunSettings, dry_run: bool) -> anyhow::Result<()> {
    let manifest = craftdb_core::load_manifest(&settings.manifest_path)?;
    tracing::info!(
        manifest = %settings.manifest_path.display(),
        groups = manifest.groups.len(),
        folders = manifest.folder_count(),
        "loaded manifest"
    );

    let mut randomizer = FieldRandomizer::new(settings.random_seed, settings.date_year)?;
    let ctx = settings.pass_context();
    let summary = run_pass(&settings.catalog_path, dry_run, |catalog| {
        enrich_catalog(catalog, &manifest, &ctx, &mut randomizer)
    })?;

    println!("{summary}{}", dry_run_note(dry_run));
    Ok(())
}

/// Fill missing image lists from the folders the primary images live in.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved.
pub(crate) fn run_backfill(settings: &RunSettings, dry_run: bool) -> anyhow::Result<()> {
    let ctx = settings.pass_context();
    let summary = run_pass(&settings.catalog_path, dry_run, |catalog| {
        backfill_images(catalog, &ctx)
    })?;
    println!("{summary}{}", dry_run_note(dry_run));
    Ok(())
}

/// Rewrite every stored image path into public form.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved.
pub(crate) fn run_fix_paths(settings: &RunSettings, dry_run: bool) -> anyhow::Result<()> {
    let normalizer = settings.normalizer();
    let summary = run_pass(&settings.catalog_path, dry_run, |catalog| {
        fix_image_paths(catalog, &normalizer)
    })?;
    println!("{summary}{}", dry_run_note(dry_run));
    Ok(())
}

/// Re-derive subcategories for records whose names match a keyword group.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved.
pub(crate) fn run_reclassify(settings: &RunSettings, dry_run: bool) -> anyhow::Result<()> {
    let summary = run_pass(&settings.catalog_path, dry_run, reclassify_subcategories)?;
    println!("{summary}{}", dry_run_note(dry_run));
    Ok(())
}

/// Check that every image path in the catalog resolves to a file.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or any file is missing.
pub(crate) fn run_verify(settings: &RunSettings) -> anyhow::Result<()> {
    let catalog = Catalog::load(&settings.catalog_path)?;
    let summary = verify_images(&catalog, &settings.pass_context());

    for missing in &summary.missing {
        let id = missing
            .product_id
            .map_or_else(|| "?".to_string(), |id| id.to_string());
        println!("missing: product {id} -> {}", missing.path);
    }
    println!("{summary}");

    if !summary.is_clean() {
        anyhow::bail!("{} image files are missing", summary.missing.len());
    }
    Ok(())
}
