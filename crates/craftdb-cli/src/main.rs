use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod catalog;

#[derive(Debug, Parser)]
#[command(name = "craftdb")]
#[command(about = "Handicraft catalog enrichment tools")]
struct Cli {
    /// Products JSON file (overrides `CRAFTDB_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Folder manifest YAML (overrides `CRAFTDB_MANIFEST_PATH`)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
    /// Root of the product image tree (overrides `CRAFTDB_ASSET_ROOT`)
    #[arg(long, global = true)]
    asset_root: Option<PathBuf>,
    /// Seed for generated ratings, reviews and dates (overrides `CRAFTDB_RANDOM_SEED`)
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add catalog records for manifest folders not yet listed (default)
    Enrich {
        /// Report what would be added without writing the catalog
        #[arg(long)]
        dry_run: bool,
    },
    /// Fill the image list of records that have none
    BackfillImages {
        #[arg(long)]
        dry_run: bool,
    },
    /// Rewrite stored image paths into public form
    FixPaths {
        #[arg(long)]
        dry_run: bool,
    },
    /// Re-derive subcategories from product names
    Reclassify {
        #[arg(long)]
        dry_run: bool,
    },
    /// Check that every referenced image file exists
    VerifyImages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = craftdb_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = catalog::RunSettings::from_config(config)
        .with_catalog(cli.catalog)
        .with_manifest(cli.manifest)
        .with_asset_root(cli.asset_root)
        .with_seed(cli.seed);
    tracing::debug!(
        catalog = %settings.catalog_path.display(),
        asset_root = %settings.asset_root.display(),
        "starting run"
    );

    match cli.command {
        Some(Commands::Enrich { dry_run }) => catalog::run_enrich(&settings, dry_run)?,
        None => catalog::run_enrich(&settings, false)?,
        Some(Commands::BackfillImages { dry_run }) => catalog::run_backfill(&settings, dry_run)?,
        Some(Commands::FixPaths { dry_run }) => catalog::run_fix_paths(&settings, dry_run)?,
        Some(Commands::Reclassify { dry_run }) => catalog::run_reclassify(&settings, dry_run)?,
        Some(Commands::VerifyImages) => catalog::run_verify(&settings)?,
    }

    Ok(())
}
