//! SmartResume client library

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod session;
pub mod ui;

pub use error::{Result, SmartResumeError};
pub use config::Config;
