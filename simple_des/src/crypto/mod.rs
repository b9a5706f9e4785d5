pub mod expansion;
pub mod f_function;
pub mod key_schedule;
pub mod sboxes;
pub mod simple_des;
