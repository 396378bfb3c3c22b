//! Writing the fixed binary payload to disk.
//!
//! The payload and the file name are compile-time constants. A write always
//! creates the file or truncates an existing one, so repeated runs leave the
//! same four bytes behind.

use anyhow::{Context, Result};
use log::Level;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::telemetry::{LogMessage, log_with_context};

/// Bytes written to the output file, in order.
pub const PAYLOAD: [u8; 4] = [0x00, 0xFF, 0x10, 0xA7];

/// Name of the output file, resolved against the target directory.
pub const OUTPUT_FILE_NAME: &str = "binaryFile.bin";

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Path the payload was written to
    pub file_path: PathBuf,

    /// Number of bytes now in the file
    pub bytes_written: usize,
}

/// Returns the path of the output file inside `dir`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use binfile::writer::output_path_in;
///
/// let path = output_path_in(Path::new("/tmp/out"));
/// assert_eq!(path, PathBuf::from("/tmp/out/binaryFile.bin"));
/// ```
pub fn output_path_in(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE_NAME)
}

/// Writes [`PAYLOAD`] to [`OUTPUT_FILE_NAME`] in the current working directory.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written. The
/// root cause is always a [`std::io::Error`]. A partially written file is
/// left in place.
pub fn write_fixed_bytes() -> Result<WriteReport> {
    write_to(PathBuf::from(OUTPUT_FILE_NAME))
}

/// Writes [`PAYLOAD`] to [`OUTPUT_FILE_NAME`] inside `dir`.
///
/// Behaves exactly like [`write_fixed_bytes`] apart from the target directory.
pub fn write_fixed_bytes_in(dir: &Path) -> Result<WriteReport> {
    write_to(output_path_in(dir))
}

fn write_to(file_path: PathBuf) -> Result<WriteReport> {
    let result = write_payload(&file_path);

    match &result {
        Ok(()) => log_with_context(
            Level::Debug,
            LogMessage {
                message: "Payload written".to_string(),
                module: "writer",
                context: Some(vec![
                    ("file_path", file_path.display().to_string()),
                    ("bytes", PAYLOAD.len().to_string()),
                ]),
            },
        ),
        Err(e) => log_with_context(
            Level::Debug,
            LogMessage {
                message: format!("Failed to write payload: {:#}", e),
                module: "writer",
                context: Some(vec![("file_path", file_path.display().to_string())]),
            },
        ),
    }

    result?;

    Ok(WriteReport {
        file_path,
        bytes_written: PAYLOAD.len(),
    })
}

/// Create or truncate, then write. The handle is closed when `file` goes out
/// of scope, including early returns through `?`.
fn write_payload(path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(&PAYLOAD)
        .with_context(|| format!("Failed to write to file {}", path.display()))?;

    Ok(())
}
