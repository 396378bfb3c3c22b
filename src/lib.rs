//! # binfile
//!
//! Writes the fixed payload `00 FF 10 A7` to `binaryFile.bin`.
//!
//! ## Features
//!
//! * Payload writing - Create or truncate the output file and write the four bytes
//! * Logging - stderr logging controlled by `RUST_LOG`

/// Logging setup and context-tagged log helpers
pub mod telemetry;
/// Writing the fixed payload to disk
pub mod writer;
