use anyhow::{Context, Result};
use manuf::{fetch, Registry};
use serde_json::json;
use std::path::PathBuf;

/// Bit length of a normalized registry key. Keys ending in a single hex
/// digit carry a 4-bit partial octet.
fn key_bits(key: &str) -> usize {
    let segments: Vec<&str> = key.split(':').collect();
    match segments.last() {
        Some(last) if last.len() == 1 => (segments.len() - 1) * 8 + 4,
        _ => segments.len() * 8,
    }
}

pub fn cmd_inspect(db: Option<PathBuf>, json_output: bool) -> Result<()> {
    let path = db.unwrap_or_else(fetch::default_cache_path);

    let size = std::fs::metadata(&path)
        .with_context(|| format!("no cached registry at {} (run `manuf update`)", path.display()))?
        .len();

    let registry = Registry::from_file(&path)
        .with_context(|| format!("failed to load registry from {}", path.display()))?;

    let mut oui24 = 0usize;
    let mut oui28 = 0usize;
    let mut oui36 = 0usize;
    let mut other = 0usize;
    for (key, _) in registry.iter() {
        match key_bits(key) {
            24 => oui24 += 1,
            28 => oui28 += 1,
            36 => oui36 += 1,
            _ => other += 1,
        }
    }

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "file": path.display().to_string(),
                "bytes": size,
                "entries": registry.len(),
                "oui24_count": oui24,
                "oui28_count": oui28,
                "oui36_count": oui36,
                "other_count": other,
            }))?
        );
    } else {
        println!("Registry: {}", path.display());
        println!("Size:     {} bytes", size);
        println!("Entries:  {}", registry.len());
        println!();
        println!("Prefix blocks:");
        println!("  24-bit: {}", oui24);
        println!("  28-bit: {}", oui28);
        println!("  36-bit: {}", oui36);
        if other > 0 {
            println!("  other:  {}", other);
        }
    }

    Ok(())
}
