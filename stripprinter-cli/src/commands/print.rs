//! Print command - resolve a strip payload the way the printing tool does.
//!
//! `--file`, `--text` and `--test` mirror the printing tool's own flags, so a
//! controller can check what a payload file will produce without paper. As
//! with the printing tool, the flag given last wins.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use stripprinter::strip::PayloadSource;

use crate::error::CliError;

/// Arguments for the print command.
pub struct PrintArgs {
    /// Payload flags paired with their command-line positions.
    pub sources: Vec<(usize, PayloadSource)>,
}

impl PrintArgs {
    /// Collect the given payload flags with their positions from `matches`.
    pub fn from_flags(
        matches: Option<&ArgMatches>,
        file: Option<PathBuf>,
        text: Option<String>,
        test: bool,
    ) -> Self {
        let position = |id: &str| matches.and_then(|m| m.index_of(id)).unwrap_or(0);

        let mut sources = Vec::new();
        if let Some(path) = file {
            sources.push((position("file"), PayloadSource::File(path)));
        }
        if let Some(text) = text {
            sources.push((position("text"), PayloadSource::Text(text)));
        }
        if test {
            sources.push((position("test"), PayloadSource::Test));
        }
        Self { sources }
    }
}

/// Run the print command.
pub fn run(args: PrintArgs) -> Result<(), CliError> {
    let source = PayloadSource::last_given(args.sources);
    let payload = PayloadSource::resolve_optional(source.as_ref())?;

    let mut out = io::stdout().lock();
    out.write_all(payload.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}
