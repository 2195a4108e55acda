pub mod app;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;

pub use app::{CalcRequest, run_calc, run_session};
pub use config::{ConfigError, Settings};
