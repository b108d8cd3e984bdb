//! Manuf - MAC Address to Manufacturer Resolution
//!
//! Resolve hardware network addresses to the name of their manufacturer
//! using the Wireshark manufacturer registry, downloaded and cached
//! locally on first use. Registry prefixes come in three granularities -
//! classic 24-bit OUIs plus 28- and 36-bit sub-octet blocks - and
//! lookups always prefer the longest matching prefix.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use manuf::{fetch, Registry};
//!
//! // Download the registry on first use, then load the cache.
//! let cache = fetch::default_cache_path();
//! fetch::ensure_cached(&cache, fetch::DEFAULT_URL, false)?;
//! let registry = Registry::from_file(&cache)?;
//!
//! match registry.lookup("8C:1F:64:DC:71:22") {
//!     Ok(name) => println!("{}", name),
//!     Err(manuf::ManufError::NotFound) => println!("unknown manufacturer"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! upstream manuf.gz ── fetch ──> on-disk cache (plain text)
//!                                      │
//!                                   source/registry loader
//!                                      ▼
//!                         Registry { key -> short name }
//!                                      │
//!                                   lookup (36 -> 28 -> 24 bit)
//!                                      ▼
//!                              manufacturer short name
//! ```
//!
//! The registry mapping is rebuilt in full on every load; swapping in a
//! freshly-built [`Registry`] is the reload mechanism.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
/// Error types for registry operations
pub mod error;
/// Upstream download and on-disk caching
pub mod fetch;
mod prefix;
/// Registry loading and longest-prefix lookup
pub mod registry;
/// Opening plain, gzip-compressed, or stdin registry sources
pub mod source;

// Re-exports for consumers
pub use crate::error::ManufError;
pub use crate::registry::Registry;

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
