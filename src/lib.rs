// src/lib.rs - CORE CLIPSUM PRIMITIVES
// Integrity checksum engine for clip uploads

// Module exports
pub mod checksum;

// Re-export primary public interface
pub use checksum::crc32c::{Crc32c, compute};
pub use checksum::digest::Digest;
pub use checksum::reader::ChecksumReader;

/// Compute the wire-format checksum an upload request carries.
///
/// One call from file contents to the base64 string the receiving service
/// compares against its own recomputation. Use [`Crc32c`] directly for
/// chunked input, or [`ChecksumReader`] to checksum a stream while
/// forwarding it.
pub fn checksum_base64(data: &[u8]) -> String {
    compute(data).to_base64()
}
