//! External process launching.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// `CREATE_NO_WINDOW`: keep the printing tool from flashing a console.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    /// Executable to run, resolved through `PATH` when not absolute.
    pub program: PathBuf,
    /// Arguments passed verbatim.
    pub args: Vec<OsString>,
}

impl PrintCommand {
    /// `<program> --file <payload_path>`
    pub fn for_payload_file(program: &Path, payload_path: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            args: vec![OsString::from("--file"), payload_path.as_os_str().to_owned()],
        }
    }
}

impl fmt::Display for PrintCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.program.display())?;
        for arg in &self.args {
            write!(f, " \"{}\"", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Capability to start a process and walk away from it.
///
/// Implementations return once the process has been started. They never wait
/// for it to exit and never inspect its status.
pub trait ProcessLauncher: Send + Sync {
    /// Start `command` detached.
    fn launch(&self, command: &PrintCommand) -> io::Result<()>;
}

/// Launches with [`std::process::Command`], stdio closed, no console window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl ProcessLauncher for DetachedLauncher {
    fn launch(&self, command: &PrintCommand) -> io::Result<()> {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            process.creation_flags(CREATE_NO_WINDOW);
        }

        // The child handle is dropped without waiting; the tool runs on its own.
        process.spawn().map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_file_command() {
        let cmd = PrintCommand::for_payload_file(
            Path::new("StripPrinter.exe"),
            Path::new("/tmp/ESFP1234.tmp"),
        );
        assert_eq!(cmd.program, PathBuf::from("StripPrinter.exe"));
        assert_eq!(
            cmd.args,
            vec![OsString::from("--file"), OsString::from("/tmp/ESFP1234.tmp")]
        );
        assert_eq!(
            cmd.to_string(),
            "\"StripPrinter.exe\" \"--file\" \"/tmp/ESFP1234.tmp\""
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let cmd = PrintCommand::for_payload_file(
            Path::new("definitely-not-a-strip-printer-binary"),
            Path::new("payload.tmp"),
        );
        assert!(DetachedLauncher.launch(&cmd).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_returns_without_waiting() {
        let cmd = PrintCommand {
            program: PathBuf::from("sleep"),
            args: vec![OsString::from("5")],
        };
        let started = std::time::Instant::now();
        DetachedLauncher.launch(&cmd).unwrap();
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }
}
