//! Bounded file reading for the analyzer.
//!
//! The analyzer itself works on in-memory buffers; this module is the only
//! place where read errors originate.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Extensions accepted by callers that enforce an executable allowlist.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["exe", "dll"];

/// Resource limits for I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    pub max_read_bytes: u64,
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_read_bytes: 100 * 1024 * 1024, // 100MB
            max_file_size: 100 * 1024 * 1024,  // 100MB
        }
    }
}

/// A bounded reader that limits the amount of data read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            return Ok(0); // EOF
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;

        if self.bytes_read >= self.limit {
            warn!(
                "BoundedReader limit reached after reading {} bytes",
                self.bytes_read
            );
        }

        Ok(n)
    }
}

/// File reader that enforces [`IOLimits`].
pub struct SafeFileReader {
    file: File,
    size: u64,
    limits: IOLimits,
}

impl SafeFileReader {
    /// Open a file, rejecting it when it exceeds `max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: IOLimits) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening file for safe reading: {:?}", path);

        let file = File::open(path)?;
        let size = file.metadata()?.len();
        check_size(size, &limits)?;

        Ok(Self { file, size, limits })
    }

    /// Read the whole file. Fails with `IncompleteRead` when `max_read_bytes`
    /// stops the read before the size reported at open.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut reader = BoundedReader::new(&mut self.file, self.limits.max_read_bytes);
        let mut data = Vec::with_capacity(self.size.min(self.limits.max_read_bytes) as usize);
        reader.read_to_end(&mut data)?;
        check_complete(data.len() as u64, self.size)?;
        Ok(data)
    }
}

fn check_size(size: u64, limits: &IOLimits) -> Result<()> {
    if size > limits.max_file_size {
        warn!(
            "File too large: {} bytes (limit: {})",
            size, limits.max_file_size
        );
        return Err(AnalysisError::FileTooLarge {
            size,
            limit: limits.max_file_size,
        });
    }
    Ok(())
}

fn check_complete(read: u64, size: u64) -> Result<()> {
    if read < size {
        warn!("Read stopped at {} of {} bytes", read, size);
        return Err(AnalysisError::IncompleteRead { read, size });
    }
    Ok(())
}

/// Read a file into memory under the given limits.
pub fn read_file<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Vec<u8>> {
    let mut reader = SafeFileReader::open(path.as_ref(), limits.clone())?;
    let data = reader.read_all()?;
    info!("Read {:?} ({} bytes)", path.as_ref(), data.len());
    Ok(data)
}

/// Async counterpart of [`read_file`], bounded the same way.
pub async fn read_file_async<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;
    let size = file.metadata().await?.len();
    check_size(size, limits)?;

    let mut reader = file.take(limits.max_read_bytes);
    let mut data = Vec::with_capacity(size.min(limits.max_read_bytes) as usize);
    reader.read_to_end(&mut data).await?;
    check_complete(data.len() as u64, size)?;

    info!("Read {:?} ({} bytes)", path, data.len());
    Ok(data)
}

/// Whether the path carries a `.exe` or `.dll` extension (any case).
pub fn has_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| e.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}
