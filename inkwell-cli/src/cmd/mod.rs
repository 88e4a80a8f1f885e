pub mod config;
pub mod date;
