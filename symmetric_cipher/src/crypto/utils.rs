/// Renders the low `n_bits` of `value` as a zero-padded binary string.
pub fn to_binary_string(value: u16, n_bits: usize) -> String {
    assert!(n_bits >= 1 && n_bits <= 16, "n_bits must be in 1..=16");
    let masked = if n_bits == 16 {
        value
    } else {
        value & ((1u16 << n_bits) - 1)
    };
    format!("{:0width$b}", masked, width = n_bits)
}
