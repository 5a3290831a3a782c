//! Init command - write the default configuration file.

use stripprinter::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Create `~/.stripprinter/config.ini` with defaults unless it already exists.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();

    if ConfigFile::ensure_exists_at(&path)? {
        println!("Created {}", path.display());
        println!();
        println!("Set your control zone with:");
        println!("  stripprinter config set zone.aerodromes \"CYTZ, CYYZ\"");
        println!("  stripprinter config set zone.filter_mode both");
    } else {
        println!("Configuration already exists at {}", path.display());
    }

    Ok(())
}
