//! Price Lookup - closest store cession price search
//!
//! Loads the price catalog once and serves the search page and API.

use clap::Parser;
use price_lookup::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Closest-price lookup server
#[derive(Parser, Debug)]
#[command(name = "price_lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON price catalog
    #[arg(short, long, default_value = "prices.json")]
    catalog: PathBuf,

    /// Address to bind the web server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for the web server
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Directory served under /static (default: disabled)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

/// Load the catalog, logging the outcome
///
/// A failed load is not fatal: the server still starts and reports the
/// failure on every search.
fn load_catalog(path: &Path) -> Option<Arc<Catalog>> {
    match Catalog::load(path) {
        Ok(catalog) => {
            if catalog.is_empty() {
                log::warn!("Catalog {} contains no records", path.display());
            } else {
                log::info!("Loaded {} catalog records", catalog.len());
            }
            Some(Arc::new(catalog))
        }
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            None
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting price_lookup...");
    log::info!("Catalog path: {}", args.catalog.display());

    let catalog = load_catalog(&args.catalog);

    if let Err(e) = price_lookup::web::serve(catalog, args.static_dir, &args.host, args.port).await
    {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
