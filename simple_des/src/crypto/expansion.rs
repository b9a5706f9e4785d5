// src/crypto/expansion.rs

/// Maps each source bit of the 6-bit input to the output bits it feeds.
/// Bits 3 and 2 are duplicated, DES-style; the target sets are disjoint
/// and jointly cover all eight output bits.
const EXPANSION_MAP: [(u8, u8); 6] = [
    (0b10_0000, 0b1000_0000),
    (0b01_0000, 0b0100_0000),
    (0b00_1000, 0b0001_0100),
    (0b00_0100, 0b0010_1000),
    (0b00_0010, 0b0000_0010),
    (0b00_0001, 0b0000_0001),
];

/// Expands a 6-bit value into an 8-bit value.
pub fn expand(input: u8) -> u8 {
    assert!(input < 64, "expansion input must fit in 6 bits");
    let mut output = 0u8;
    for &(source_bit, target_bits) in &EXPANSION_MAP {
        if input & source_bit != 0 {
            output |= target_bits;
        }
    }
    output
}
