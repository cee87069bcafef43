// src/checksum/digest.rs - FINALIZED DIGEST AND WIRE ENCODING
// Big-endian base64 representation expected by the upload service

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Finalized 32-bit checksum value.
///
/// Immutable once produced by [`Crc32c::finalize`](crate::Crc32c::finalize).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    // Complemented final register
    value: u32,
}

impl Digest {
    pub(crate) fn new(value: u32) -> Self {
        Self { value }
    }

    /// Raw 32-bit digest value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Encode the digest for transmission in an upload request.
    ///
    /// The 32-bit value is laid out as exactly 4 big-endian bytes and then
    /// base64-encoded with padding. The remote service compares this string
    /// against its own recomputation over the received bytes, so the byte
    /// order and padding here must not change.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.value.to_be_bytes())
    }
}

// Diagnostic form only; the wire form is `to_base64`
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.value)
    }
}
