//! Output management module
//!
//! Handles writing the generated variants to the output file with buffering.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (8MB)
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(path: PathBuf, buffer_size: usize) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Write a full batch of sorted variants
    pub fn write_all<'a, I>(&mut self, lines: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
