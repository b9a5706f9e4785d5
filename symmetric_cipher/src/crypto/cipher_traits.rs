pub trait CipherAlgorithm {
    fn encrypt(&self, block: u16) -> u16;
    fn decrypt(&self, block: u16) -> u16;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, _: u16) -> Result<(), &'static str>;
}

pub trait SymmetricCipherWithRounds: SymmetricCipher {
    /// Runs the Feistel network over an arbitrary 1-based round range.
    /// `start_round > end_round` walks the schedule backwards.
    fn process(&self, block: u16, start_round: u32, end_round: u32) -> u16;
    fn block_bits(&self) -> u32;
    fn export_round_keys(&self) -> Option<Vec<u8>>;
}
