use simple_des::crypto::expansion::expand;

#[test]
fn test_expand_zero() {
    assert_eq!(expand(0), 0);
}

#[test]
fn test_expand_single_bits() {
    assert_eq!(expand(32), 128);
    assert_eq!(expand(16), 64);
    assert_eq!(expand(8), 16 + 4);
    assert_eq!(expand(4), 32 + 8);
    assert_eq!(expand(2), 2);
    assert_eq!(expand(1), 1);
}

#[test]
fn test_expand_all_bits_set() {
    // disjoint target sets covering all eight output bits
    assert_eq!(expand(63), 255);
}

#[test]
fn test_expand_is_additive_over_disjoint_bits() {
    for input in 0u8..64 {
        let mut expected = 0u8;
        for bit in 0..6 {
            if input & (1 << bit) != 0 {
                expected |= expand(1 << bit);
            }
        }
        assert_eq!(expand(input), expected);
    }
}

#[test]
fn test_expand_consistency() {
    for input in 0u8..64 {
        assert_eq!(expand(input), expand(input));
    }
}

#[test]
#[should_panic(expected = "expansion input must fit in 6 bits")]
fn test_expand_rejects_seven_bit_input() {
    let _ = expand(64);
}
