//! Info command - plugin identity and active settings.

use stripprinter::config::{config_file_path, ConfigFile};
use stripprinter::plugin::PluginInfo;

use crate::error::CliError;

/// Show plugin metadata and the zone the printer would watch.
pub fn run() -> Result<(), CliError> {
    let info = PluginInfo::current();
    let config = ConfigFile::load()?;

    println!("{} v{}", info.name, info.version);
    println!("{} {}", info.copyright, info.author);
    println!();
    println!("Config:       {}", config_file_path().display());
    println!("Aerodromes:   {}", config.zone.aerodromes);
    println!("Filter mode:  {}", config.zone.filter_mode);
    println!("Printer:      {}", config.printer.executable.display());
    println!("Log file:     {}", config.logging.file.display());

    Ok(())
}
