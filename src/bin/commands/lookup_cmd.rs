use anyhow::{Context, Result};
use manuf::{fetch, ManufError, Registry};
use serde_json::json;
use std::path::PathBuf;

pub fn cmd_lookup(
    address: String,
    db: Option<PathBuf>,
    url: Option<String>,
    offline: bool,
    refresh: bool,
    json_output: bool,
    quiet: bool,
) -> Result<()> {
    let path = db.unwrap_or_else(fetch::default_cache_path);
    let url = url.unwrap_or_else(|| fetch::DEFAULT_URL.to_string());

    if offline {
        if !path.exists() {
            anyhow::bail!(
                "registry not cached at {} (drop --offline, or run `manuf update`)",
                path.display()
            );
        }
    } else {
        fetch::ensure_cached(&path, &url, refresh)
            .with_context(|| format!("failed to fetch registry into {}", path.display()))?;
    }

    let registry = Registry::from_file(&path)
        .with_context(|| format!("failed to load registry from {}", path.display()))?;

    match registry.lookup(&address) {
        Ok(name) => {
            if quiet {
                // Exit code only.
            } else if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "address": address,
                        "manufacturer": name,
                    }))?
                );
            } else {
                println!("{}", name);
            }
            Ok(())
        }
        Err(ManufError::NotFound) => {
            // A miss is an expected outcome: message on stderr, exit 1,
            // distinct from a registry that could not be loaded.
            if !quiet {
                eprintln!("Manufacturer not found for {}", address);
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
