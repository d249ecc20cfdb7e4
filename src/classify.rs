//! Text/binary classification: extension deny-list plus a sampled-byte
//! heuristic.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extensions that are never treated as text, checked before any sampling.
const BINARY_EXTENSIONS: &[&str] = &[
    // executables and libraries
    "exe", "dll", "so", "dylib", "msi", "com",
    // object, debug and cache artifacts
    "o", "obj", "a", "lib", "pdb", "class", "pyc", "pyo", "cache",
    // generic binary and data
    "bin", "dat", "db", "sqlite", "sqlite3",
    // disk images
    "img", "iso", "dmg",
    // archives and compression
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar",
];

/// Number of decoded characters sampled from the start of a file.
const SAMPLE_CHARS: usize = 8000;

/// Minimum fraction of ASCII characters in the sample for a text verdict.
const ASCII_TEXT_THRESHOLD: f64 = 0.9;

/// Decide whether a file's content should be treated as text.
///
/// Files with a deny-listed extension are binary without being opened.
/// Otherwise up to [`SAMPLE_CHARS`] characters are decoded (lossily, as
/// UTF-8) from the start of the file; empty files are text, and non-empty
/// samples are text when at least 90% of their characters are ASCII.
/// Sampling failures classify the file as binary rather than propagating.
pub fn is_text(path: &Path) -> bool {
    if has_denied_extension(path) {
        return false;
    }
    match sample_ascii_fraction(path) {
        Ok(None) => true, // empty file
        Ok(Some(fraction)) => fraction >= ASCII_TEXT_THRESHOLD,
        Err(_) => false,
    }
}

fn has_denied_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.as_str()))
}

/// Read the sample and return the ASCII fraction, or `None` for an empty
/// read.
fn sample_ascii_fraction(path: &Path) -> std::io::Result<Option<f64>> {
    let mut file = File::open(path)?;
    // Four bytes per character bounds the read for any UTF-8 input.
    let mut buf = vec![0u8; SAMPLE_CHARS * 4];
    let mut filled = 0;
    loop {
        let n = file.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
        if filled == buf.len() {
            break;
        }
    }
    if filled == 0 {
        return Ok(None);
    }

    let decoded = String::from_utf8_lossy(&buf[..filled]);
    let mut total = 0usize;
    let mut ascii = 0usize;
    for c in decoded.chars().take(SAMPLE_CHARS) {
        total += 1;
        if (c as u32) <= 127 {
            ascii += 1;
        }
    }
    Ok(Some(ascii as f64 / total as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn denied_extension_is_binary_without_reading() {
        let tmp = TempDir::new().unwrap();
        // Content is pure ASCII; the extension alone decides.
        let path = write_file(&tmp, "app.EXE", b"just text");
        assert!(!is_text(&path));
    }

    #[test]
    fn ascii_file_is_text() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "letters.txt", "a".repeat(200).as_bytes());
        assert!(is_text(&path));
    }

    #[test]
    fn non_ascii_file_is_binary() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "euros.txt", "€".repeat(200).as_bytes());
        assert!(!is_text(&path));
    }

    #[test]
    fn empty_file_is_text() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty.txt", b"");
        assert!(is_text(&path));
    }

    #[test]
    fn missing_file_is_binary() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_text(&tmp.path().join("gone.txt")));
    }

    #[test]
    fn mostly_ascii_with_some_unicode_is_text() {
        let tmp = TempDir::new().unwrap();
        // 190 ASCII + 10 non-ASCII = 95% ASCII.
        let content = format!("{}{}", "a".repeat(190), "é".repeat(10));
        let path = write_file(&tmp, "mixed.txt", content.as_bytes());
        assert!(is_text(&path));
    }
}
