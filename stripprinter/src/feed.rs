//! Flight plan feed decoding.
//!
//! The feed is JSON Lines: one flight plan update per line, for example
//!
//! ```text
//! {"callsign":"ACA123","origin":"CYYZ","destination":"KJFK","route":"DCT YCF J576"}
//! {"callsign":"ACA123","origin":"CYYZ","destination":"KJFK","route":"DCT YCF J576","squawk":"2301"}
//! ```
//!
//! Missing or `null` fields are empty. Blank lines are ignored. A line that
//! is not valid JSON (including one that is not valid UTF-8) is reported and
//! skipped; the session carries on with the next update.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::classifier::FlightPlanHandler;
use crate::flight_plan::FlightPlanSnapshot;
use crate::log::{Logger, NoOpLogger};
use crate::log_warn;

/// Feed errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed file could not be opened.
    #[error("Failed to open feed {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the feed failed; the feed is unusable.
    #[error("Failed to read feed at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// One line could not be decoded.
    #[error("Invalid flight plan at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Where updates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Standard input (`-`).
    Stdin,
    /// A JSON Lines file.
    File(PathBuf),
}

impl FromStr for FeedSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            FeedSource::Stdin
        } else {
            FeedSource::File(PathBuf::from(s))
        })
    }
}

impl FeedSource {
    /// Open the source for line reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, FeedError> {
        match self {
            FeedSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            FeedSource::File(path) => {
                let file = File::open(path).map_err(|source| FeedError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Totals from driving a handler with a feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Updates handed to the handler.
    pub delivered: usize,
    /// Lines skipped because they could not be decoded.
    pub skipped: usize,
}

/// Iterator of decoded updates over a line reader.
pub struct FeedReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
    logger: Arc<dyn Logger>,
}

impl<R: BufRead> FeedReader<R> {
    /// Read updates from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
            logger: Arc::new(NoOpLogger),
        }
    }

    /// Report skipped lines to `logger`.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Deliver every decodable update to `handler`, in feed order.
    ///
    /// Undecodable lines are logged and skipped. Stops at end of input or on
    /// a read error.
    pub fn drive<H: FlightPlanHandler + ?Sized>(
        mut self,
        handler: &mut H,
    ) -> Result<FeedSummary, FeedError> {
        let mut summary = FeedSummary::default();
        while let Some(item) = self.next() {
            match item {
                Ok(snapshot) => {
                    handler.handle_update(&snapshot);
                    summary.delivered += 1;
                }
                Err(e @ FeedError::Decode { .. }) => {
                    log_warn!(self.logger, "Skipping feed line: {}", e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(summary)
    }
}

impl<R: BufRead> Iterator for FeedReader<R> {
    type Item = Result<FlightPlanSnapshot, FeedError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(source) => {
                    self.line += 1;
                    return Some(Err(FeedError::Read {
                        line: self.line,
                        source,
                    }));
                }
            }

            if self.buf.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            // Bytes go straight to serde_json so bad UTF-8 is a decode error.
            return Some(
                serde_json::from_slice(&self.buf).map_err(|source| FeedError::Decode {
                    line: self.line,
                    source,
                }),
            );
        }
    }
}
