//! Upstream registry download and on-disk cache
//!
//! The Wireshark project publishes its manufacturer registry as a
//! gzip-compressed flat text file. This module downloads it, decompresses
//! it, and stores the plain text in a per-user cache; the cache format is
//! exactly the upstream text, so the same loader reads both. Downloads
//! land in a sibling temp file that is renamed into place, so an
//! interrupted fetch never clobbers an existing cache.

use crate::error::ManufError;
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Upstream location of the Wireshark manufacturer registry.
pub const DEFAULT_URL: &str = "https://www.wireshark.org/download/automated/data/manuf.gz";

/// Default on-disk location of the cached registry.
///
/// `<platform cache dir>/manuf/manuf.db`, falling back to `./manuf.db`
/// when the platform reports no cache directory.
pub fn default_cache_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(dir) => dir.join("manuf").join("manuf.db"),
        None => PathBuf::from("manuf.db"),
    }
}

/// Download the registry from `url`, decompress it, and store it at `dest`.
///
/// Non-success HTTP statuses, gzip errors, and cache-write failures all
/// surface as [`ManufError::Fetch`]. Parent directories of `dest` are
/// created as needed.
pub fn download(url: &str, dest: &Path) -> Result<(), ManufError> {
    info!(url, "fetching manufacturer registry");

    let response = reqwest::blocking::get(url)
        .map_err(|e| ManufError::Fetch(format!("request to {} failed: {}", url, e)))?;
    if !response.status().is_success() {
        return Err(ManufError::Fetch(format!(
            "unexpected status {} from {}",
            response.status(),
            url
        )));
    }
    let body = response
        .bytes()
        .map_err(|e| ManufError::Fetch(format!("failed to read body from {}: {}", url, e)))?;

    let mut text = Vec::new();
    GzDecoder::new(&body[..])
        .read_to_end(&mut text)
        .map_err(|e| ManufError::Fetch(format!("invalid gzip data from {}: {}", url, e)))?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ManufError::Fetch(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
    }

    // Write beside the destination, then rename into place.
    let tmp = dest.with_extension("tmp");
    fs::write(&tmp, &text)
        .map_err(|e| ManufError::Fetch(format!("failed to write {}: {}", tmp.display(), e)))?;
    fs::rename(&tmp, dest)
        .map_err(|e| ManufError::Fetch(format!("failed to move cache into {}: {}", dest.display(), e)))?;

    info!(path = %dest.display(), bytes = text.len(), "manufacturer registry cached");
    Ok(())
}

/// Make sure a registry cache exists at `dest`, downloading on first use.
///
/// An existing cache is left alone unless `refresh` is set. The caller
/// loads the registry only after this returns `Ok`, so a fetch failure
/// never leads to reading a half-written file.
pub fn ensure_cached(dest: &Path, url: &str, refresh: bool) -> Result<(), ManufError> {
    if dest.exists() && !refresh {
        return Ok(());
    }
    download(url, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn default_cache_path_ends_with_the_registry_name() {
        let path = default_cache_path();
        assert!(path.ends_with("manuf/manuf.db") || path.ends_with("manuf.db"));
    }

    #[test]
    fn existing_cache_is_not_refetched() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("manuf.db");
        let mut file = fs::File::create(&dest).unwrap();
        writeln!(file, "00:00:00\tXerox").unwrap();

        // The unroutable URL would fail if a request were made.
        ensure_cached(&dest, "http://127.0.0.1:1/manuf.gz", false).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "00:00:00\tXerox\n");
    }

    #[test]
    fn unreachable_upstream_surfaces_as_a_fetch_error() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("manuf.db");

        match ensure_cached(&dest, "http://127.0.0.1:1/manuf.gz", false) {
            Err(ManufError::Fetch(_)) => {}
            other => panic!("expected fetch error, got {:?}", other),
        }
        assert!(!dest.exists());
    }
}
