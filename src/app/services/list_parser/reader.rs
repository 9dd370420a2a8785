//! Seekable line reader for listing files
//!
//! Listing files are multi-megabyte ASCII reports that are read twice: a
//! forward indexing pass recording byte offsets, then seek-and-extract calls
//! per recorded block. This reader tracks the byte position of every line it
//! hands out and decodes leniently, replacing undecodable bytes instead of
//! propagating decode errors.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Buffered, position-tracking reader over one listing file
///
/// The file handle is owned by the reader and released when it is dropped.
#[derive(Debug)]
pub struct ListingReader {
    reader: BufReader<File>,
    position: u64,
    path: PathBuf,
    buf: Vec<u8>,
}

impl ListingReader {
    /// Open a listing file for reading
    ///
    /// Fails fast when the file does not exist; this is the hard precondition
    /// of every parsing operation.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open {}", path.display()), e),
        })?;
        Ok(Self {
            reader: BufReader::new(file),
            position: 0,
            path: path.to_path_buf(),
            buf: Vec::with_capacity(128),
        })
    }

    /// Byte offset the next `read_line` call will start from
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seek to an absolute byte offset
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        self.reader
            .seek(SeekFrom::Start(offset))
            .map_err(|e| Error::io(format!("Failed to seek in {}", self.path.display()), e))?;
        self.position = offset;
        Ok(())
    }

    /// Read the next line, without its terminator
    ///
    /// Returns `Ok(None)` at end of stream. Decoding is lenient: bytes that
    /// are not valid UTF-8 are replaced, never reported as errors.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| Error::io(format!("Failed to read {}", self.path.display()), e))?;
        if read == 0 {
            return Ok(None);
        }
        self.position += read as u64;

        let mut end = self.buf.len();
        if end > 0 && self.buf[end - 1] == b'\n' {
            end -= 1;
        }
        if end > 0 && self.buf[end - 1] == b'\r' {
            end -= 1;
        }
        Ok(Some(String::from_utf8_lossy(&self.buf[..end]).into_owned()))
    }
}
