//! In-memory manufacturer registry
//!
//! A [`Registry`] maps normalized prefix keys to manufacturer short
//! names. It is built by one synchronous scan of a registry source and
//! treated as read-only afterwards; reloading means constructing a fresh
//! `Registry` and swapping it in whole, so a half-built mapping is never
//! observable and a failed load leaves the previous value untouched.

use crate::error::ManufError;
use crate::prefix;
use crate::source;
use rustc_hash::FxHashMap;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Mapping from normalized prefix keys to manufacturer short names.
///
/// # Example
///
/// ```rust
/// use manuf::Registry;
/// use std::io::Cursor;
///
/// let text = "\
/// 00:00:00\tXerox\tXerox Corporation
/// FC:D2:B6:20/28\tSoma\tSoma GmbH
/// ";
/// let registry = Registry::from_reader(Cursor::new(text))?;
///
/// assert_eq!(registry.lookup("fc:d2:b6:20:11:22")?, "Soma");
/// assert!(registry.lookup("aa:bb:cc:dd:ee:ff").is_err());
/// # Ok::<(), manuf::ManufError>(())
/// ```
pub struct Registry {
    entries: FxHashMap<String, String>,
}

impl Registry {
    /// Build a registry from a line-oriented source.
    ///
    /// Lines starting with `#` or consisting only of whitespace are
    /// skipped, as are lines with fewer than two whitespace-separated
    /// fields. Field 0 is the prefix specifier, field 1 the short
    /// manufacturer name; any further fields (long-form names) are
    /// ignored. Duplicate keys keep the last value seen.
    ///
    /// Fails with [`ManufError::Scan`] if the underlying stream errors
    /// mid-iteration; no partially-built registry is ever returned.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ManufError> {
        let mut entries = FxHashMap::default();

        for line in reader.lines() {
            let line = line.map_err(|e| ManufError::Scan(e.to_string()))?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(spec), Some(name)) = (fields.next(), fields.next()) else {
                continue;
            };
            entries.insert(prefix::normalize(spec), name.to_string());
        }

        debug!(entries = entries.len(), "manufacturer registry loaded");
        Ok(Registry { entries })
    }

    /// Build a registry from a file path.
    ///
    /// `.gz` paths are decompressed transparently and `-` reads stdin,
    /// see [`source::open`](crate::source::open). Fails with
    /// [`ManufError::Io`] when the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ManufError> {
        let path = path.as_ref();
        let reader = source::open(path)
            .map_err(|e| ManufError::Io(format!("failed to open {}: {}", path.display(), e)))?;
        Self::from_reader(reader)
    }

    /// Resolve a hardware address to its manufacturer short name.
    ///
    /// The address is matched case-insensitively at decreasing
    /// specificity (36-bit, 28-bit, then 24-bit prefix, as far as the
    /// address length allows); the longest matching prefix wins. Returns
    /// [`ManufError::NotFound`] - a normal outcome, not a failure of the
    /// registry - when no tier matches or the address has fewer than
    /// three segments.
    pub fn lookup(&self, addr: &str) -> Result<&str, ManufError> {
        for key in prefix::candidate_keys(addr) {
            if let Some(name) = self.entries.get(&key) {
                return Ok(name);
            }
        }
        Err(ManufError::NotFound)
    }

    /// Probe a single normalized key without tier derivation.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of prefix blocks in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(normalized key, short name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
