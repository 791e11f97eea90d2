use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use weightfetch_core::hub::{HuggingFaceHub, SnapshotFetcher};
use weightfetch_core::{space, verify, Config};

pub async fn execute(config: &Config) -> Result<()> {
    println!("Model Weight Downloader");
    println!("{}", "=".repeat(40));

    match space::check(Path::new(".")) {
        Some(check) if check.sufficient => {
            println!(
                "Disk space check passed. Available: {:.1}GB",
                check.available_gb
            );
        }
        Some(check) => {
            println!(
                "Warning: Low disk space. Available: {:.1}GB, Required: {:.1}GB",
                check.available_gb,
                space::REQUIRED_SPACE_GB
            );
            println!("Warning: Proceeding with limited disk space...");
        }
        None => {}
    }

    println!("Downloading weights from {}...", config.repo_id);

    fs::create_dir_all(&config.cache_dir)
        .with_context(|| format!("Failed to create {}", config.cache_dir.display()))?;

    let hub = HuggingFaceHub::from_config(&config.hub);
    let snapshot = hub.snapshot(&config.repo_id, &config.cache_dir).await?;

    println!("\nModel weights downloaded successfully!");
    println!("  Files: {}", snapshot.files.len());
    println!(
        "  Size: {:.2} GB",
        snapshot.size_bytes as f64 / 1_073_741_824.0
    );
    println!("  Path: {:?}", snapshot.path);

    if verify::verify_components(&config.cache_dir) {
        println!("All weights verified successfully!");
    } else {
        let missing = verify::missing_components(&config.cache_dir);
        println!("Warning: Some weights may be missing: {}", missing.join(", "));
    }

    println!("Weight download completed!");

    Ok(())
}
