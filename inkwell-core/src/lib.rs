pub mod config;
pub mod date;
pub mod template;

// Re-export main types
pub use config::{Config, ConfigError};
pub use date::{INVALID_DATE, format_date, parse_date};
pub use template::register_filters;
