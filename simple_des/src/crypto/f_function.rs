// src/crypto/f_function.rs

use crate::crypto::expansion::expand;
use crate::crypto::sboxes::{s1, s2};

/// The Feistel round function f(R, K): 6-bit input, 6-bit output.
pub fn round_function(r: u8, round_key: u8) -> u8 {
    let expanded = expand(r);
    let mixed = round_key ^ expanded;

    let left4 = mixed >> 4;
    let right4 = mixed & 0xF;

    // top bit of each half selects the row, the low 3 bits the column
    let s1_out = s1(left4 >> 3, left4 & 7);
    let s2_out = s2(right4 >> 3, right4 & 7);

    (s1_out << 3) | s2_out
}
