//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and construction of
//! the library components so command handlers stay short.

use crate::error::CliError;
use std::sync::Arc;
use stripprinter::classifier::UpdateClassifier;
use stripprinter::config::ConfigFile;
use stripprinter::dispatch::{PrintDispatcher, TempFileDispatcher};
use stripprinter::log::{Logger, TracingLogger};
use stripprinter::logging::{default_log_file, init_logging, LoggingGuard};
use stripprinter::plugin::PluginInfo;
use stripprinter::session::SessionStore;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Library logger, backed by `tracing`
    logger: Arc<dyn Logger>,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    /// * `stdout_reserved` - When true, stdout carries command output (strips) and
    ///   log events go to the log file only
    pub fn new(debug_mode: bool, stdout_reserved: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| default_log_file().to_string());

        // Mirror to stdout only for an interactive terminal that is not showing strips.
        let stdout_enabled = atty::is(atty::Stream::Stdout) && !stdout_reserved;

        let logging_guard = init_logging(&log_dir, &log_file, stdout_enabled, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            logger: Arc::new(TracingLogger),
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("{}", PluginInfo::current());
        info!("Strip Printer CLI: {} command", command);
        info!(
            "Zone: {} ({})",
            self.config.zone.aerodromes, self.config.zone.filter_mode
        );
    }

    /// Dispatcher that hands strips to the configured printing tool.
    pub fn create_print_dispatcher(&self) -> TempFileDispatcher {
        let printer = &self.config.printer;
        let dispatcher =
            TempFileDispatcher::new(&printer.executable).with_logger(self.logger.clone());

        match &printer.temp_dir {
            Some(dir) => dispatcher.with_temp_dir(dir),
            None => dispatcher,
        }
    }

    /// Classifier for the configured zone, feeding `dispatcher`.
    pub fn create_classifier<D: PrintDispatcher>(&self, dispatcher: D) -> UpdateClassifier<D> {
        let session = SessionStore::with_soft_limit(self.config.zone.max_tracked_callsigns);

        UpdateClassifier::new(self.config.zone_config(), dispatcher)
            .with_session(session)
            .with_logger(self.logger.clone())
    }

    /// Library logger.
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}
