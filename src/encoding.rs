//! Encoding detection and lenient line reading
//!
//! Detects the input encoding (BOM sniff, then chardetng over a sample) and
//! iterates lines with best-effort decoding: malformed byte sequences are
//! dropped rather than failing the run.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

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

/// Detect the encoding of a file by sampling its content
pub fn detect_encoding(path: &Path) -> anyhow::Result<EncodingInfo> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // Read sample for detection (first 64KB should be enough)
    let mut sample = vec![0u8; 64 * 1024];
    let bytes_read = reader.read(&mut sample)?;
    sample.truncate(bytes_read);

    if bytes_read == 0 {
        return Ok(EncodingInfo::default());
    }

    // Check for BOM first
    if let Some(encoding) = detect_bom(&sample) {
        return Ok(EncodingInfo {
            name: encoding.name(),
            confidence: 1.0,
            encoding,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(&sample, true);

    let encoding = detector.guess(None, true);

    // Rough confidence based on whether the sample is valid UTF-8
    let confidence = if encoding == encoding_rs::UTF_8 {
        if std::str::from_utf8(&sample).is_ok() {
            1.0
        } else {
            0.5
        }
    } else {
        0.8
    };

    Ok(EncodingInfo {
        name: encoding.name(),
        confidence,
        encoding,
    })
}

/// Detect BOM (Byte Order Mark) at the start of content
fn detect_bom(content: &[u8]) -> Option<&'static Encoding> {
    if content.len() >= 3 && content[0..3] == [0xEF, 0xBB, 0xBF] {
        return Some(encoding_rs::UTF_8);
    }
    if content.len() >= 2 {
        if content[0..2] == [0xFE, 0xFF] {
            return Some(encoding_rs::UTF_16BE);
        }
        if content[0..2] == [0xFF, 0xFE] {
            return Some(encoding_rs::UTF_16LE);
        }
    }
    None
}

/// Decode UTF-8 bytes, dropping malformed sequences instead of replacing them.
fn decode_utf8_dropping(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                out.push_str(s);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    None => break, // truncated sequence at end of input
                }
            }
        }
    }

    out
}

/// A line iterator that handles different encodings with drop-on-error decoding
pub struct EncodedLineIterator {
    reader: BufReader<File>,
    encoding: &'static Encoding,
    line_buffer: Vec<u8>,
    bytes_read: u64,
}

impl EncodedLineIterator {
    /// Create a new line iterator for a file with automatic encoding detection
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let encoding_info = detect_encoding(path)?;
        let file = File::open(path)?;

        Ok(Self {
            reader: BufReader::with_capacity(64 * 1024, file),
            encoding: encoding_info.encoding,
            line_buffer: Vec::with_capacity(4096),
            bytes_read: 0,
        })
    }

    /// Create with a specific encoding
    pub fn with_encoding(path: &Path, encoding: &'static Encoding) -> anyhow::Result<Self> {
        let file = File::open(path)?;

        Ok(Self {
            reader: BufReader::with_capacity(64 * 1024, file),
            encoding,
            line_buffer: Vec::with_capacity(4096),
            bytes_read: 0,
        })
    }

    /// Get the detected encoding
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Total raw bytes consumed so far, including line terminators
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl Iterator for EncodedLineIterator {
    type Item = anyhow::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None, // EOF
            Ok(n) => {
                self.bytes_read += n as u64;

                // Remove trailing newline characters
                while self.line_buffer.last() == Some(&b'\n')
                    || self.line_buffer.last() == Some(&b'\r')
                {
                    self.line_buffer.pop();
                }

                if self.encoding == encoding_rs::UTF_8 {
                    // Fast path for valid UTF-8, drop malformed bytes otherwise
                    match std::str::from_utf8(&self.line_buffer) {
                        Ok(s) => Some(Ok(s.to_string())),
                        Err(_) => {
                            log::warn!("Malformed UTF-8 in line, dropping invalid bytes");
                            Some(Ok(decode_utf8_dropping(&self.line_buffer)))
                        }
                    }
                } else {
                    // Transcode, stripping replacement characters on error
                    let (decoded, _, had_errors) = self.encoding.decode(&self.line_buffer);
                    if had_errors {
                        log::warn!("Encoding errors in line, dropping undecodable bytes");
                        Some(Ok(decoded.chars().filter(|&c| c != '\u{FFFD}').collect()))
                    } else {
                        Some(Ok(decoded.into_owned()))
                    }
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
