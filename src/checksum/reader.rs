// src/checksum/reader.rs - CHECKSUMMING READ ADAPTER
// Accumulates the checksum over bytes pulled through an io::Read

use std::io::{self, Read};

use crate::checksum::crc32c::Crc32c;
use crate::checksum::digest::Digest;

/// Wraps a reader and checksums every byte read through it.
///
/// Lets an uploading caller stream a large file toward its destination
/// without buffering it whole just to compute the integrity checksum. Only
/// bytes actually returned by the inner reader are accumulated, so short
/// reads are handled correctly.
pub struct ChecksumReader<R> {
    // Wrapped byte source
    inner: R,
    // Running checksum over everything read so far
    crc: Crc32c,
}

impl<R: Read> ChecksumReader<R> {
    /// Wrap a reader with a fresh accumulator.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            crc: Crc32c::new(),
        }
    }

    /// Finish the checksum over everything read so far.
    pub fn digest(self) -> Digest {
        self.crc.finalize()
    }

    /// Unwrap, discarding the in-progress checksum.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.crc.update(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::crc32c::compute;
    use std::io::{Cursor, Write};

    #[test]
    fn test_reader_matches_one_shot() {
        let data = b"bytes pulled through the adapter in small reads";
        let mut reader = ChecksumReader::new(Cursor::new(&data[..]));

        // Deliberately tiny buffer to force many short reads
        let mut buf = [0u8; 7];
        let mut total = 0;
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            total += n;
        }

        assert_eq!(total, data.len());
        assert_eq!(reader.digest(), compute(data));
    }

    #[test]
    fn test_reader_empty_source() {
        let mut reader = ChecksumReader::new(Cursor::new(&b""[..]));
        let mut sink = Vec::new();
        reader.read_to_end(&mut sink).unwrap();
        assert_eq!(reader.digest(), compute(b""));
    }

    #[test]
    fn test_reader_over_file() {
        // Stream a file from disk the way an uploader would
        let mut file = tempfile::tempfile().unwrap();
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        file.write_all(&data).unwrap();
        file.sync_all().unwrap();

        use std::io::Seek;
        file.rewind().unwrap();

        let mut reader = ChecksumReader::new(file);
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).unwrap();

        assert_eq!(contents, data);
        assert_eq!(reader.digest(), compute(&data));
    }
}
