//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`info`] - Plugin metadata and active zone
//! - [`init`] - Configuration initialization
//! - [`print`] - Resolve a strip payload to stdout
//! - [`run`] - Main command (classify a feed and print strips)

pub mod config;
pub mod info;
pub mod init;
pub mod print;
pub mod run;
