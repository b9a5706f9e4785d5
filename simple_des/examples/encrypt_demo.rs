use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};

use simple_des::crypto::simple_des::SimpleDesCipher;
use symmetric_cipher::crypto::round_trace::{RoundObserver, RoundTrace};
use symmetric_cipher::crypto::utils::to_binary_string;

struct PrintObserver;

impl RoundObserver for PrintObserver {
    fn on_round(&self, trace: RoundTrace) {
        println!(
            "  round {}: K={} f={} L={} R={}",
            trace.round,
            to_binary_string(trace.round_key as u16, 8),
            to_binary_string(trace.f_output as u16, 6),
            to_binary_string(trace.left as u16, 6),
            to_binary_string(trace.right as u16, 6),
        );
    }
}

fn main() {
    // 1000 1011 0101
    let input: u16 = 0x8b5;
    // 1 1100 0111
    let key: u16 = 0x1c7;

    println!("=== Single-block demo ===");
    let cipher = SimpleDesCipher::with_observer(key, Arc::new(PrintObserver));

    let encrypted = cipher.encrypt_block(input);
    println!("Encrypted value:    {}", to_binary_string(encrypted, 12));

    let plaintext = cipher.decrypt_block(encrypted);
    println!("Decrypted value:    {}", to_binary_string(plaintext, 12));

    println!("Original plaintext: {}", to_binary_string(input, 12));
    assert_eq!(plaintext, input);

    println!("\n=== Random round-trip demo ===");
    let mut rng = StdRng::seed_from_u64(0xdeadbeef);
    for _ in 0..8 {
        let key = rng.random_range(0..512u16);
        let block = rng.random_range(0..4096u16);
        let cipher = SimpleDesCipher::new(key);
        let encrypted = cipher.encrypt_block(block);
        let decrypted = cipher.decrypt_block(encrypted);
        assert_eq!(decrypted, block);
        println!(
            "key={} {} -> {} -> {} OK",
            to_binary_string(key, 9),
            to_binary_string(block, 12),
            to_binary_string(encrypted, 12),
            to_binary_string(decrypted, 12),
        );
    }
}
