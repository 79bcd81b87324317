//! Program Image Loader.
//!
//! Reads program images from disk into a vector of 32-bit words. Two formats
//! are accepted:
//! 1. **Binary:** Raw big-endian words; the length must be a multiple of 4.
//! 2. **Text:** One word per line as `0x` hex, `0b` binary or a bare 32-digit
//!    binary string. `_` separators are ignored, and so are blank lines and
//!    comments starting with `#` or `//`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a program image.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A binary image whose length is not a whole number of words.
    #[error("binary image length {len} is not a multiple of 4")]
    Truncated {
        /// Image length in bytes.
        len: usize,
    },
    /// A text line that is not a valid word.
    #[error("line {line}: cannot parse '{text}' as a 32-bit word")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending text after comment stripping.
        text: String,
    },
    /// The image contains no words.
    #[error("program image is empty")]
    Empty,
}

/// On-disk layout of a program image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raw big-endian words.
    Binary,
    /// One word per line.
    Text,
}

impl ImageFormat {
    /// Picks a format for `path` and its contents.
    ///
    /// A `.bin` extension forces binary; otherwise valid UTF-8 is read as text.
    pub fn detect(path: &Path, bytes: &[u8]) -> Self {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin")) {
            return ImageFormat::Binary;
        }
        if std::str::from_utf8(bytes).is_ok() {
            ImageFormat::Text
        } else {
            ImageFormat::Binary
        }
    }
}

/// Reads and parses a program image from disk.
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise any error from `parse_binary`
/// or `parse_text`.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u32>, LoaderError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ImageFormat::detect(path, &bytes);
    let words = match format {
        ImageFormat::Binary => parse_binary(&bytes)?,
        ImageFormat::Text => parse_text(&String::from_utf8_lossy(&bytes))?,
    };
    debug!(path = %path.display(), ?format, words = words.len(), "image loaded");
    Ok(words)
}

/// Splits raw bytes into big-endian words.
///
/// # Errors
///
/// `Empty` for no bytes, `Truncated` if the length is not a multiple of 4.
pub fn parse_binary(bytes: &[u8]) -> Result<Vec<u32>, LoaderError> {
    if bytes.is_empty() {
        return Err(LoaderError::Empty);
    }
    let chunks = bytes.chunks_exact(4);
    if !chunks.remainder().is_empty() {
        return Err(LoaderError::Truncated { len: bytes.len() });
    }
    Ok(chunks
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Parses a text image, one word per line.
///
/// # Errors
///
/// `Parse` for the first malformed line, `Empty` if no words remain.
///
/// # Examples
///
/// ```
/// use isasim_core::sim::loader::parse_text;
///
/// let words = parse_text("0x2100_8800  # add\n// comment\n\n0b11\n").unwrap();
/// assert_eq!(words, vec![0x2100_8800, 3]);
/// ```
pub fn parse_text(text: &str) -> Result<Vec<u32>, LoaderError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        let word = parse_word(line).ok_or_else(|| LoaderError::Parse {
            line: idx + 1,
            text: line.to_string(),
        })?;
        words.push(word);
    }
    if words.is_empty() {
        return Err(LoaderError::Empty);
    }
    Ok(words)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_word(token: &str) -> Option<u32> {
    let digits: String = token.chars().filter(|&c| c != '_').collect();
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        return u32::from_str_radix(bin, 2).ok();
    }
    if digits.len() == 32 && digits.chars().all(|c| c == '0' || c == '1') {
        return u32::from_str_radix(&digits, 2).ok();
    }
    None
}
