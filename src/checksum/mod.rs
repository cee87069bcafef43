// src/checksum/mod.rs - CHECKSUM ENGINE
// CRC32C computation, digest type, and streaming adapters

pub mod crc32c;
pub mod digest;
pub mod reader;
pub mod table;

pub use crc32c::{Crc32c, compute};
pub use digest::Digest;
pub use reader::ChecksumReader;
