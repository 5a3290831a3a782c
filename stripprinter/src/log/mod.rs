//! Logging abstraction layer.
//!
//! Library components never call `tracing` directly. They log through the
//! [`Logger`] trait so that an embedding host decides where messages go:
//!
//! - [`TracingLogger`]: forwards to `tracing` (used by the CLI)
//! - [`NoOpLogger`]: discards everything
//! - [`MemoryLogger`]: records messages for test assertions
//!
//! Components take an `Arc<dyn Logger>` and use the `log_*!` macros:
//!
//! ```
//! use stripprinter::log::{Logger, NoOpLogger};
//! use stripprinter::log_info;
//! use std::sync::Arc;
//!
//! struct Feed {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! let feed = Feed { logger: Arc::new(NoOpLogger) };
//! log_info!(feed.logger, "Feed opened");
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
