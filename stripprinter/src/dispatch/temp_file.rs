//! Temp-file hand-off to the printing tool.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{DetachedLauncher, DispatchError, PrintCommand, PrintDispatcher, ProcessLauncher};
use crate::log::{Logger, NoOpLogger};
use crate::{log_debug, log_warn};

/// Prefix of every payload file.
pub const TEMP_FILE_PREFIX: &str = "ESFP";

/// Suffix of every payload file.
pub const TEMP_FILE_SUFFIX: &str = ".tmp";

/// Default printing tool executable.
pub const DEFAULT_PRINTER_EXECUTABLE: &str = "StripPrinter.exe";

/// Writes each payload to a fresh temp file and launches the printing tool on it.
///
/// Every payload gets its own uniquely named file, so back-to-back amendments
/// never overwrite each other before the tool has read them. Files are left in
/// place for the tool (or the OS) to clean up.
pub struct TempFileDispatcher {
    executable: PathBuf,
    temp_dir: Option<PathBuf>,
    launcher: Arc<dyn ProcessLauncher>,
    logger: Arc<dyn Logger>,
}

impl TempFileDispatcher {
    /// Dispatcher for `executable`, using the OS temp directory and a detached launcher.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            temp_dir: None,
            launcher: Arc::new(DetachedLauncher),
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Write payload files into `dir` instead of the OS temp directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Replace the process launcher.
    pub fn with_launcher(mut self, launcher: Arc<dyn ProcessLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Report absorbed failures to `logger`.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The printing tool executable.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Directory payload files are written to.
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Write `payload` and launch the printing tool, reporting what went wrong.
    ///
    /// Returns the absolute path of the payload file handed to the tool.
    pub fn try_dispatch(&self, payload: &str) -> Result<PathBuf, DispatchError> {
        let dir = absolute_dir(self.temp_dir())?;

        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(TEMP_FILE_SUFFIX)
            .tempfile_in(&dir)
            .map_err(|source| DispatchError::CreateTempFile {
                dir: dir.clone(),
                source,
            })?;

        file.write_all(payload.as_bytes())
            .and_then(|()| file.flush())
            .map_err(DispatchError::Write)?;

        // Closed before launch so the tool can open it on platforms with exclusive handles.
        let (handle, path) = file.keep().map_err(|e| DispatchError::Persist(e.error))?;
        drop(handle);

        let command = PrintCommand::for_payload_file(&self.executable, &path);
        log_debug!(self.logger, "Launching {}", command);
        self.launcher
            .launch(&command)
            .map_err(|source| DispatchError::Spawn {
                program: self.executable.display().to_string(),
                source,
            })?;

        Ok(path)
    }
}

impl PrintDispatcher for TempFileDispatcher {
    fn dispatch(&self, payload: &str) {
        if let Err(e) = self.try_dispatch(payload) {
            log_warn!(self.logger, "Strip not printed: {}", e);
        }
    }
}

fn absolute_dir(dir: PathBuf) -> Result<PathBuf, DispatchError> {
    if dir.is_absolute() {
        return Ok(dir);
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&dir))
        .map_err(|source| DispatchError::TempDir { path: dir, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{LogLevel, MemoryLogger};
    use std::fs;
    use std::io;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CapturingLauncher {
        commands: Mutex<Vec<PrintCommand>>,
    }

    impl ProcessLauncher for CapturingLauncher {
        fn launch(&self, command: &PrintCommand) -> io::Result<()> {
            self.commands.lock().unwrap().push(command.clone());
            Ok(())
        }
    }

    struct RefusingLauncher;

    impl ProcessLauncher for RefusingLauncher {
        fn launch(&self, _command: &PrintCommand) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such program"))
        }
    }

    #[test]
    fn test_writes_payload_and_launches_with_file_flag() {
        let dir = TempDir::new().unwrap();
        let launcher = Arc::new(CapturingLauncher::default());
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path())
            .with_launcher(launcher.clone());

        let path = dispatcher.try_dispatch("CS: ACA123\n").unwrap();

        assert!(path.is_absolute());
        assert_eq!(fs::read_to_string(&path).unwrap(), "CS: ACA123\n");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(TEMP_FILE_PREFIX));
        assert!(name.ends_with(TEMP_FILE_SUFFIX));

        let commands = launcher.commands.lock().unwrap();
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0],
            PrintCommand::for_payload_file(Path::new("StripPrinter.exe"), &path)
        );
    }

    #[test]
    fn test_successive_payloads_get_distinct_files() {
        let dir = TempDir::new().unwrap();
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path())
            .with_launcher(Arc::new(CapturingLauncher::default()));

        let first = dispatcher.try_dispatch("one").unwrap();
        let second = dispatcher.try_dispatch("two").unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(first).unwrap(), "one");
        assert_eq!(fs::read_to_string(second).unwrap(), "two");
    }

    #[test]
    fn test_file_kept_after_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path())
            .with_launcher(Arc::new(RefusingLauncher));

        let err = dispatcher.try_dispatch("payload").unwrap_err();

        assert!(matches!(err, DispatchError::Spawn { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_temp_dir_is_create_error() {
        let dir = TempDir::new().unwrap();
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path().join("does-not-exist"))
            .with_launcher(Arc::new(CapturingLauncher::default()));

        let err = dispatcher.try_dispatch("payload").unwrap_err();
        assert!(matches!(err, DispatchError::CreateTempFile { .. }));
    }

    #[test]
    fn test_dispatch_absorbs_and_reports_failure() {
        let dir = TempDir::new().unwrap();
        let logger = Arc::new(MemoryLogger::new());
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path())
            .with_launcher(Arc::new(RefusingLauncher))
            .with_logger(logger.clone());

        dispatcher.dispatch("payload");

        assert!(logger.contains(LogLevel::Warn, "Strip not printed"));
    }

    #[test]
    fn test_dispatch_failure_is_silent_without_logger() {
        let dir = TempDir::new().unwrap();
        let dispatcher = TempFileDispatcher::new("StripPrinter.exe")
            .with_temp_dir(dir.path().join("does-not-exist"))
            .with_launcher(Arc::new(RefusingLauncher));

        dispatcher.dispatch("payload");

        assert!(!dir.path().join("does-not-exist").exists());
    }

    #[test]
    fn test_defaults() {
        let dispatcher = TempFileDispatcher::new(DEFAULT_PRINTER_EXECUTABLE);
        assert_eq!(dispatcher.executable(), Path::new("StripPrinter.exe"));
        assert_eq!(dispatcher.temp_dir(), std::env::temp_dir());
    }
}
