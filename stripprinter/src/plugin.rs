//! Plugin identity reported to the host.

use std::fmt;

pub const PLUGIN_NAME: &str = "Strip Printer (CZ+Amendments)";
pub const PLUGIN_VERSION: &str = "0.3.0";
pub const PLUGIN_AUTHOR: &str = "Charlie Yablon";
pub const PLUGIN_COPYRIGHT: &str = "© 2025";

/// Name, version, author and copyright as one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub copyright: &'static str,
}

impl PluginInfo {
    /// This plugin's metadata.
    pub const fn current() -> Self {
        Self {
            name: PLUGIN_NAME,
            version: PLUGIN_VERSION,
            author: PLUGIN_AUTHOR,
            copyright: PLUGIN_COPYRIGHT,
        }
    }
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} by {} {}",
            self.name, self.version, self.author, self.copyright
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_version_matches_crate() {
        assert_eq!(PLUGIN_VERSION, crate::VERSION);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PluginInfo::current().to_string(),
            "Strip Printer (CZ+Amendments) 0.3.0 by Charlie Yablon © 2025"
        );
    }
}
