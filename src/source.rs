//! Registry source opening
//!
//! The registry is consumed as a line-oriented text stream. The on-disk
//! cache holds plain text, but the upstream distribution is
//! gzip-compressed, so paths ending in `.gz` (case-insensitive) are
//! decompressed transparently. The path `-` reads stdin, which lets a
//! registry be piped straight through the CLI.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, stdin, BufRead, BufReader};
use std::path::Path;

/// Buffer size for registry scanning (64KB)
const BUFFER_SIZE: usize = 64 * 1024;

/// Open a registry source for line-by-line reading.
///
/// Gzip handling is keyed off the file extension; a `.gz` file with
/// corrupt contents opens fine here and fails during the scan instead.
///
/// # Example
///
/// ```rust,no_run
/// let plain = manuf::source::open("manuf.db")?;
/// let compressed = manuf::source::open("manuf.gz")?;
/// let piped = manuf::source::open("-")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();

    if path.to_str() == Some("-") {
        return Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, stdin())));
    }

    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    if is_gzip {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(BUFFER_SIZE, file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn plain_text_source() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "00:00:00\tXerox").unwrap();
        file.flush().unwrap();

        let reader = open(file.path()).unwrap();
        let lines: Vec<String> = reader.lines().collect::<io::Result<Vec<_>>>().unwrap();
        assert_eq!(lines, vec!["00:00:00\tXerox"]);
    }

    #[test]
    fn gz_source_is_decompressed() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        writeln!(encoder, "00:00:00\tXerox").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut file = NamedTempFile::with_suffix(".gz").unwrap();
        file.write_all(&compressed).unwrap();
        file.flush().unwrap();

        let reader = open(file.path()).unwrap();
        let lines: Vec<String> = reader.lines().collect::<io::Result<Vec<_>>>().unwrap();
        assert_eq!(lines, vec!["00:00:00\tXerox"]);
    }

    #[test]
    fn missing_source_is_an_open_error() {
        assert!(open("/nonexistent/manuf.db").is_err());
    }
}
