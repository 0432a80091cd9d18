//! goldcalc terminal front end
//!
//! A line-driven rendition of the gold price form: every edit re-prices the
//! item and prints the itemized receipt.

pub mod command;
pub mod config;
pub mod session;

pub use command::Command;
pub use config::{CliConfig, OutputFormat};
pub use session::{Flow, Session};
