//! Word list loading
//!
//! Opens a word list, detects its encoding and yields its lines as UTF-8
//! strings one at a time.

use bytesize::ByteSize;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bytes sampled from the head of a file for encoding detection
const SAMPLE_SIZE: u64 = 64 * 1024;

/// Errors raised while opening or reading a word list
#[derive(Debug, Error)]
pub enum SourceError {
    /// The word list does not exist
    #[error("{} is missing, be sure you downloaded it and put it in the word list directory", path.display())]
    Missing { path: PathBuf },

    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Path of the word list this error is about
    pub fn path(&self) -> &Path {
        match self {
            Self::Missing { path } | Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Result of encoding detection
#[derive(Debug, Clone)]
pub struct EncodingInfo {
    /// Detected encoding name
    pub name: &'static str,
    /// Confidence level (0.0 - 1.0)
    pub confidence: f32,
    /// The encoding_rs Encoding reference
    pub encoding: &'static Encoding,
}

impl Default for EncodingInfo {
    fn default() -> Self {
        Self {
            name: "UTF-8",
            confidence: 1.0,
            encoding: encoding_rs::UTF_8,
        }
    }
}

impl From<&'static Encoding> for EncodingInfo {
    fn from(encoding: &'static Encoding) -> Self {
        Self {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        }
    }
}

/// Detect the encoding of a file by sampling its first 64 KiB
pub fn detect_encoding(path: &Path) -> io::Result<EncodingInfo> {
    let mut sample = Vec::new();
    File::open(path)?.take(SAMPLE_SIZE).read_to_end(&mut sample)?;

    if sample.is_empty() {
        return Ok(EncodingInfo::default());
    }

    if let Some(encoding) = detect_bom(&sample) {
        return Ok(encoding.into());
    }

    // A sample cut inside a multi-byte sequence is still UTF-8
    match std::str::from_utf8(&sample) {
        Ok(_) => return Ok(EncodingInfo::default()),
        Err(e) if e.error_len().is_none() => return Ok(EncodingInfo::default()),
        Err(_) => {}
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);
    let encoding = detector.guess(None, true);

    Ok(EncodingInfo {
        name: encoding.name(),
        confidence: if encoding == encoding_rs::UTF_8 { 0.5 } else { 0.8 },
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(encoding_rs::UTF_8);
    }
    if content.starts_with(&[0xFE, 0xFF]) {
        return Some(encoding_rs::UTF_16BE);
    }
    if content.starts_with(&[0xFF, 0xFE]) {
        return Some(encoding_rs::UTF_16LE);
    }
    None
}

/// Lazy line reader over one word list
///
/// Lines come out transcoded to UTF-8 without their line terminator.
pub struct WordSource {
    path: PathBuf,
    reader: BufReader<DecodeReaderBytes<File, Vec<u8>>>,
    encoding: &'static Encoding,
    size: u64,
    line_buffer: String,
}

impl WordSource {
    /// Open a word list, failing with [`SourceError::Missing`] if it is not a file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(SourceError::Missing { path });
        }

        let open_err = |source| SourceError::Open {
            path: path.clone(),
            source,
        };

        let info = detect_encoding(&path).map_err(open_err)?;
        let file = File::open(&path).map_err(open_err)?;
        let size = file.metadata().map_err(open_err)?.len();

        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(info.encoding))
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        log::debug!(
            "Opened {} ({}, {}, confidence {:.1})",
            path.display(),
            ByteSize(size),
            info.name,
            info.confidence
        );

        Ok(Self {
            path,
            reader: BufReader::new(decoder),
            encoding: info.encoding,
            size,
            line_buffer: String::with_capacity(64),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the detected encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Size of the file on disk in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl std::fmt::Debug for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordSource")
            .field("path", &self.path)
            .field("encoding", &self.encoding.name())
            .field("size", &self.size)
            .finish()
    }
}

impl Iterator for WordSource {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_line(&mut self.line_buffer) {
            Ok(0) => None,
            Ok(_) => {
                let line = self.line_buffer.trim_end_matches(['\n', '\r']);
                Some(Ok(line.to_string()))
            }
            Err(source) => Some(Err(SourceError::Read {
                path: self.path.clone(),
                source,
            })),
        }
    }
}
