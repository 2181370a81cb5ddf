use clap::Parser;
use sanitizer::steamspy::{augment, parse_details, AppDetails, DetailsSource};
use sanitizer::{unwrap_safe_html, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Render the SteamSpy details block for a Steam store page
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Store page path, e.g. /app/667660/Photon_Rush/
    store_path: String,
    /// Directory holding saved appdetails answers as <appid>.json
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
    /// Print the block as {"__html": ...} instead of raw markup
    #[arg(long)]
    json: bool,
}

/// Reads `appdetails` answers saved as `<appid>.json` files.
struct DirectorySource {
    dir: PathBuf,
}

impl DetailsSource for DirectorySource {
    fn app_details(&self, app_id: &str) -> Result<AppDetails> {
        let path = self.dir.join(format!("{app_id}.json"));
        debug!(path = %path.display(), "reading app details");
        parse_details(&std::fs::read_to_string(path)?)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let source = DirectorySource { dir: cli.data_dir };
    let Some(block) = augment(&source, &cli.store_path) else {
        info!(store_path = %cli.store_path, "nothing to render");
        return Ok(());
    };
    if cli.json {
        println!("{}", serde_json::to_string(&block)?);
    } else {
        print!("{}", unwrap_safe_html(&[&block]));
    }
    Ok(())
}
