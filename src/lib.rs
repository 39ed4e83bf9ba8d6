pub mod cli;
pub mod config;
pub mod links;
pub mod storage;

pub use config::{AppConfig, ConfigLoader, ConfigPaths};
