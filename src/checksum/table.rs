// src/checksum/table.rs - CRC32C LOOKUP TABLE
// Compile-time table generation for the Castagnoli polynomial

/// Castagnoli polynomial in reversed (reflected) form.
///
/// The natural form is 0x1EDC6F41; the reflected algorithm processes bits
/// least-significant-first, so the bit-reversed constant is the one that
/// appears in the recurrence. This is NOT the CRC-32 (IEEE) polynomial —
/// using 0xEDB88320 here would produce a different, incompatible checksum
/// family.
pub const CASTAGNOLI: u32 = 0x82F63B78;

/// Pre-computed lookup table, one entry per byte value.
///
/// Entry `i` is byte value `i` pushed through 8 rounds of the reflected
/// shift-and-XOR recurrence. Built once at compile time; read-only, so it is
/// safe to share across any number of concurrent checksum computations.
pub(crate) const CRC_TABLE: [u32; 256] = generate_table();

/// Generate the 256-entry lookup table for the reflected polynomial.
const fn generate_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CASTAGNOLI;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}
