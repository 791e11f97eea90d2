mod fetch;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use weightfetch_core::Config;

#[derive(Parser)]
#[command(name = "weightfetch")]
#[command(author, version, about = "Download model weights from the HuggingFace Hub", long_about = None)]
struct Cli {
    /// Repository to fetch (e.g., "zibojia/minimax-remover")
    #[arg(short, long)]
    repo: Option<String>,

    /// Local directory the repository is mirrored into
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load config, using defaults: {}", e);
        Config::default()
    });
    if let Some(repo) = cli.repo {
        config.repo_id = repo;
    }
    if let Some(dir) = cli.dir {
        config.cache_dir = dir;
    }

    // Low disk space and incomplete verification are warnings only;
    // a failed download is the single fatal path.
    if let Err(e) = fetch::execute(&config).await {
        eprintln!("Error downloading weights: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
