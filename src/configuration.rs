pub mod config;
pub mod options;
