pub mod cipher_traits;
pub mod round_trace;
pub mod utils;
