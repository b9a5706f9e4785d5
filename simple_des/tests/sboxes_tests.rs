use simple_des::crypto::sboxes::{S1, S2, s1, s2};

#[test]
fn test_lookup_matches_tables() {
    assert_eq!(s1(0, 0), 5);
    assert_eq!(s1(1, 5), 7);
    assert_eq!(s2(0, 1), 0);
    assert_eq!(s2(1, 2), 0);
    assert_eq!(s2(1, 7), 4);
}

#[test]
fn test_outputs_fit_in_three_bits() {
    for row in 0u8..2 {
        for col in 0u8..8 {
            assert!(s1(row, col) < 8);
            assert!(s2(row, col) < 8);
        }
    }
}

#[test]
fn test_each_row_is_a_permutation() {
    for table in [&S1, &S2] {
        for row in table {
            let mut seen = [false; 8];
            for &value in row {
                assert!(!seen[value as usize], "duplicate s-box entry {value}");
                seen[value as usize] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }
}

#[test]
#[should_panic(expected = "s-box row must be 0 or 1")]
fn test_out_of_range_row_is_rejected() {
    let _ = s1(2, 0);
}

#[test]
#[should_panic(expected = "s-box column must fit in 3 bits")]
fn test_out_of_range_column_is_rejected() {
    let _ = s2(0, 8);
}
