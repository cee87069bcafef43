// src/checksum/crc32c.rs - STREAMING CRC32C ACCUMULATOR
// Table-driven checksum over arbitrary byte sequences

use crate::checksum::digest::Digest;
use crate::checksum::table::CRC_TABLE;

/// Seed value for the accumulator register.
const SEED: u32 = 0xFFFF_FFFF;

/// Streaming CRC32C accumulator.
///
/// The running register is the entire carried state, so checksumming a large
/// file chunk by chunk needs O(1) memory no matter how the caller splits its
/// reads. One accumulator belongs to exactly one in-progress computation;
/// for parallel checksums, create one per file.
///
/// `finalize` consumes the accumulator, so updating after finalization is a
/// compile error rather than a silently wrong digest.
pub struct Crc32c {
    // Running register, seeded to all-ones
    register: u32,
}

impl Crc32c {
    /// Create a fresh accumulator.
    pub fn new() -> Self {
        Self { register: SEED }
    }

    /// Feed bytes into the checksum, strictly left to right.
    ///
    /// Byte order is load-bearing: the checksum exists to detect reordering
    /// and corruption, so bytes must arrive in exactly source order.
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.register;
        for &byte in data {
            let index = ((crc ^ byte as u32) & 0xFF) as usize;
            crc = CRC_TABLE[index] ^ (crc >> 8);
        }
        self.register = crc;
    }

    /// Complement the register and produce the final digest.
    pub fn finalize(self) -> Digest {
        Digest::new(self.register ^ SEED)
    }
}

impl Default for Crc32c {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot checksum of a fully buffered byte sequence.
pub fn compute(data: &[u8]) -> Digest {
    let mut crc = Crc32c::new();
    crc.update(data);
    crc.finalize()
}
