pub mod date;
pub mod timezone;
