use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lab_kdtree::{CieLab, KdTree, Srgb};
use labmatch::cache;
use labmatch::catalog;

#[derive(Parser)]
#[command(name = "labmatch")]
#[command(about = "Nearest-color lookup over a hex catalog in CIELAB space")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the index from a catalog and save it to a cache file
    Build {
        /// Catalog file with one #RRGGBB color per line
        #[arg(short, long)]
        catalog: PathBuf,

        /// Output path for the index cache
        #[arg(short = 'o', long)]
        cache: PathBuf,
    },
    /// Find the catalog color nearest to a query color
    Query {
        /// Query color as hex (e.g. "#7F5FE3")
        color: String,

        /// Catalog file with one #RRGGBB color per line
        #[arg(short, long)]
        catalog: PathBuf,

        /// Index cache path; loaded if present, written after a fresh build
        #[arg(long)]
        cache: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labmatch=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build { catalog, cache } => run_build_command(&catalog, &cache),
        Commands::Query {
            color,
            catalog,
            cache,
        } => run_query_command(&color, &catalog, cache.as_deref()),
    }
}

/// Build an index from the catalog and persist it.
fn run_build_command(catalog_path: &Path, cache_path: &Path) -> anyhow::Result<()> {
    let points = catalog::load_catalog(catalog_path)?;
    let count = points.len();
    let tree = KdTree::build(points)?;
    cache::save_index(cache_path, &tree)?;
    println!(
        "Indexed {} colors from {} into {}",
        count,
        catalog_path.display(),
        cache_path.display()
    );
    Ok(())
}

/// Resolve a query color against the catalog and report the winner.
fn run_query_command(
    color: &str,
    catalog_path: &Path,
    cache_path: Option<&Path>,
) -> anyhow::Result<()> {
    let srgb: Srgb = color.parse()?;
    let query = CieLab::from(srgb);

    let tree = load_or_build_index(catalog_path, cache_path)?;
    let nearest = tree.nearest(query)?;

    println!("Input:   {}", color.trim());
    println!("Nearest: {}", nearest.label);
    println!("Distance: {:.4}", nearest.lab.distance(query));
    Ok(())
}

/// Load the index from the cache when one exists; otherwise build it from
/// the catalog and, if a cache path was given, save it for next time.
fn load_or_build_index(
    catalog_path: &Path,
    cache_path: Option<&Path>,
) -> anyhow::Result<KdTree> {
    if let Some(path) = cache_path {
        if path.exists() {
            tracing::info!(cache = %path.display(), "Loading index from cache");
            return Ok(cache::load_index(path)?);
        }
    }

    let points = catalog::load_catalog(catalog_path)?;
    tracing::info!(
        catalog = %catalog_path.display(),
        colors = points.len(),
        "Building index from catalog"
    );
    let tree = KdTree::build(points)?;

    if let Some(path) = cache_path {
        cache::save_index(path, &tree)?;
        tracing::info!(cache = %path.display(), "Saved index cache");
    }
    Ok(tree)
}
