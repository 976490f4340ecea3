//! Command-Line Front End
//!
//! This crate stands in for the intake form: it collects field values from
//! the command line, hands them to the code domain, and renders the result or
//! the error.
//!
//! # Architecture
//!
//! - **cli**: clap argument definitions
//! - **commands**: handlers returning serializable outputs
//! - **config**: environment-driven configuration
//! - **logging**: tracing subscriber setup
//! - **error**: error types and their JSON bodies

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use cli::{Cli, Command};
pub use commands::{execute, CommandOutput};
pub use config::{CliConfig, LogFormat, OutputFormat};
pub use error::{CliError, ErrorResponse};
