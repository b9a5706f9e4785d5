// src/crypto/simple_des.rs

use std::sync::Arc;

use symmetric_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use symmetric_cipher::crypto::round_trace::{RoundObserver, RoundTrace};

use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::{MASTER_KEY_BITS, round_key};

pub const BLOCK_BITS: u32 = 12;
pub const ROUNDS: u32 = 2;

const HALF_BITS: u32 = 6;
const HALF_MASK: u16 = 0x3F;

/// Two-round Feistel cipher over 12-bit blocks with a 9-bit master key.
///
/// Encryption and decryption share one round formula; only the order
/// in which the round keys are applied differs.
#[derive(Clone)]
pub struct SimpleDesCipher {
    master_key: u16,
    observer: Option<Arc<dyn RoundObserver + Send + Sync>>,
}

impl SimpleDesCipher {
    pub fn new(master_key: u16) -> Self {
        assert!(
            master_key < 1 << MASTER_KEY_BITS,
            "master key must fit in 9 bits"
        );
        SimpleDesCipher {
            master_key,
            observer: None,
        }
    }

    /// Same cipher, with a diagnostic hook invoked after every round.
    pub fn with_observer(
        master_key: u16,
        observer: Arc<dyn RoundObserver + Send + Sync>,
    ) -> Self {
        let mut cipher = SimpleDesCipher::new(master_key);
        cipher.observer = Some(observer);
        cipher
    }

    /// Runs the Feistel network from `start_round` to `end_round`
    /// inclusive (both 1-based). `start_round > end_round` walks the
    /// key schedule backwards, which is how decryption undoes an
    /// encryption pass. At least one round always runs.
    pub fn process(&self, block: u16, start_round: u32, end_round: u32) -> u16 {
        assert!(block < 1 << BLOCK_BITS, "block must fit in 12 bits");
        assert!(
            start_round >= 1 && end_round >= 1,
            "round indices are 1-based"
        );

        let mut left = (block >> HALF_BITS) as u8;
        let mut right = (block & HALF_MASK) as u8;

        let decrypting = start_round > end_round;
        let mut round = start_round;
        loop {
            let key = round_key(self.master_key, round);
            let f_out = round_function(right, key);

            let new_left = right;
            let new_right = f_out ^ left;
            left = new_left;
            right = new_right;

            if let Some(observer) = &self.observer {
                observer.on_round(RoundTrace {
                    round,
                    round_key: key,
                    f_output: f_out,
                    left,
                    right,
                });
            }

            if round == end_round {
                break;
            }
            round = if decrypting { round - 1 } else { round + 1 };
        }

        // the final swap: last R becomes the high half
        ((right as u16) << HALF_BITS) | left as u16
    }

    pub fn encrypt_block(&self, block: u16) -> u16 {
        self.process(block, 1, ROUNDS)
    }

    pub fn decrypt_block(&self, block: u16) -> u16 {
        self.process(block, ROUNDS, 1)
    }
}

impl CipherAlgorithm for SimpleDesCipher {
    fn encrypt(&self, block: u16) -> u16 {
        self.encrypt_block(block)
    }

    fn decrypt(&self, block: u16) -> u16 {
        self.decrypt_block(block)
    }
}

impl SymmetricCipher for SimpleDesCipher {
    fn set_key(&mut self, master_key: u16) -> Result<(), &'static str> {
        if master_key >= 1 << MASTER_KEY_BITS {
            return Err("master key must fit in 9 bits");
        }
        self.master_key = master_key;
        Ok(())
    }
}

impl SymmetricCipherWithRounds for SimpleDesCipher {
    fn process(&self, block: u16, start_round: u32, end_round: u32) -> u16 {
        SimpleDesCipher::process(self, block, start_round, end_round)
    }

    fn block_bits(&self) -> u32 {
        BLOCK_BITS
    }

    fn export_round_keys(&self) -> Option<Vec<u8>> {
        // one full period of the schedule
        Some(
            (1..=MASTER_KEY_BITS)
                .map(|i| round_key(self.master_key, i))
                .collect(),
        )
    }
}
