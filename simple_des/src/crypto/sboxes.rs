// src/crypto/sboxes.rs

pub const S1: [[u8; 8]; 2] = [
    [5, 2, 1, 6, 3, 4, 7, 0],
    [1, 4, 6, 2, 0, 7, 5, 3],
];

pub const S2: [[u8; 8]; 2] = [
    [4, 0, 6, 5, 7, 1, 3, 2],
    [5, 3, 0, 7, 6, 2, 1, 4],
];

pub fn s1(row: u8, col: u8) -> u8 {
    lookup(&S1, row, col)
}

pub fn s2(row: u8, col: u8) -> u8 {
    lookup(&S2, row, col)
}

fn lookup(table: &[[u8; 8]; 2], row: u8, col: u8) -> u8 {
    assert!(row < 2, "s-box row must be 0 or 1");
    assert!(col < 8, "s-box column must fit in 3 bits");
    table[row as usize][col as usize]
}
