//! Strip Printer - control-zone flight strip dispatch
//!
//! This library watches flight plan updates for a set of controlled
//! aerodromes and prints a paper flight strip the first time a relevant
//! flight is seen, then an amendment strip whenever its origin, destination
//! or route changes.
//!
//! # Overview
//!
//! ```
//! use stripprinter::classifier::{FlightPlanHandler, UpdateClassifier, UpdateOutcome};
//! use stripprinter::config::ConfigFile;
//! use stripprinter::dispatch::RecordingDispatcher;
//! use stripprinter::flight_plan::FlightPlanSnapshot;
//!
//! let config = ConfigFile::default();
//! let mut classifier = UpdateClassifier::new(config.zone_config(), RecordingDispatcher::new());
//!
//! let plan = FlightPlanSnapshot::new("JZA42", "CYTZ", "CYOW", "DCT OAKVL");
//! assert_eq!(classifier.handle_update(&plan), UpdateOutcome::Initial);
//!
//! let rerouted = FlightPlanSnapshot::new("JZA42", "CYTZ", "CYOW", "DCT VERKO");
//! assert_eq!(classifier.handle_update(&rerouted), UpdateOutcome::Amendment);
//! ```
//!
//! In production the dispatcher is a [`dispatch::TempFileDispatcher`], which
//! writes each strip to a temp file and hands it to the external printing tool.

pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod feed;
pub mod flight_plan;
pub mod log;
pub mod logging;
pub mod plugin;
pub mod session;
pub mod signature;
pub mod strip;
pub mod zone;

/// Version of the Strip Printer library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
