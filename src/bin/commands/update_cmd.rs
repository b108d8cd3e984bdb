use anyhow::{Context, Result};
use manuf::{fetch, Registry};
use std::path::PathBuf;

pub fn cmd_update(db: Option<PathBuf>, url: Option<String>) -> Result<()> {
    let path = db.unwrap_or_else(fetch::default_cache_path);
    let url = url.unwrap_or_else(|| fetch::DEFAULT_URL.to_string());

    fetch::download(&url, &path)
        .with_context(|| format!("failed to fetch registry into {}", path.display()))?;

    // Load what was just written so a broken download is caught now,
    // not on the next lookup.
    let registry = Registry::from_file(&path)
        .with_context(|| format!("failed to load registry from {}", path.display()))?;

    println!(
        "Registry updated: {} prefix blocks cached at {}",
        registry.len(),
        path.display()
    );
    Ok(())
}
