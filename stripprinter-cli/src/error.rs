//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use stripprinter::config::ConfigFileError;
use stripprinter::feed::FeedError;
use stripprinter::strip::PayloadError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Config file could not be read, parsed or written
    ConfigFile(ConfigFileError),
    /// Flight plan feed could not be opened or read
    Feed(FeedError),
    /// No usable strip payload
    Payload(PayloadError),
    /// Failed to write to stdout
    Output(std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Payload(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::ConfigFile(ConfigFileError::InvalidValue { section, key, .. }) => {
                eprintln!();
                eprintln!("Fix the value in the config file, or reset it with:");
                eprintln!("  stripprinter config set {}.{} <value>", section, key);
                eprintln!("Run 'stripprinter config path' to locate the file.");
            }
            CliError::Payload(PayloadError::Empty) => {
                eprintln!();
                eprintln!("Usage:");
                eprintln!("  stripprinter print --file <payload file>");
                eprintln!("  stripprinter print --text <payload>");
                eprintln!("  stripprinter print --test");
            }
            CliError::Feed(FeedError::Open { .. }) => {
                eprintln!();
                eprintln!("Use '--feed -' to read flight plan updates from stdin.");
            }
            _ => {}
        }

        process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Feed(e) => write!(f, "{}", e),
            CliError::Payload(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Feed(e) => Some(e),
            CliError::Payload(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<FeedError> for CliError {
    fn from(e: FeedError) -> Self {
        CliError::Feed(e)
    }
}

impl From<PayloadError> for CliError {
    fn from(e: PayloadError) -> Self {
        CliError::Payload(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_exit_codes() {
        assert_eq!(CliError::Payload(PayloadError::Empty).exit_code(), 2);
        let read = PayloadError::Read {
            path: "strip.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(CliError::Payload(read).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_exit_one() {
        assert_eq!(CliError::Config("bad".to_string()).exit_code(), 1);
        assert_eq!(
            CliError::LoggingInit("denied".to_string()).to_string(),
            "Failed to initialize logging: denied"
        );
    }
}
