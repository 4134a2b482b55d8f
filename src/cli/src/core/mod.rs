pub mod error;
pub mod exit_code;
pub mod formatter;
pub mod logger;
pub mod version;
