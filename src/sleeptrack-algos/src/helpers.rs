pub mod date;
pub mod math;
