// src/crypto/key_schedule.rs

pub const MASTER_KEY_BITS: u32 = 9;
pub const ROUND_KEY_BITS: u32 = 8;

/// Derives the 8-bit round key for a 1-based round index.
///
/// The 9-bit master key is rotated left by `(round - 1) % 9` positions
/// inside a 9-bit field, then the lowest bit of the rotation is
/// dropped. Each round therefore reads a different 8-bit window of the
/// cyclic key, with period 9 in the round index.
pub fn round_key(master_key: u16, round: u32) -> u8 {
    assert!(
        master_key < 1 << MASTER_KEY_BITS,
        "master key must fit in 9 bits"
    );
    assert!(round >= 1, "round index is 1-based");

    let index = (round - 1) % MASTER_KEY_BITS;
    let high = master_key >> (MASTER_KEY_BITS - index);
    let low = master_key & ((1 << (MASTER_KEY_BITS - index)) - 1);
    let rotated = (low << index) | high;

    (rotated >> 1) as u8
}
