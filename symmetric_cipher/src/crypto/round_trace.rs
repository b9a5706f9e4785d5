/// Snapshot of one Feistel round, taken after the halves are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrace {
    pub round: u32,
    pub round_key: u8,
    pub f_output: u8,
    pub left: u8,
    pub right: u8,
}

/// Diagnostic hook for the round loop. The engine stays pure; anything
/// that wants the per-round values (a logger, a test collector) plugs
/// in here instead of printing from inside the algorithm.
pub trait RoundObserver {
    fn on_round(&self, trace: RoundTrace);
}
