//! Run command - classify a flight plan feed and print strips.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing::info;

use stripprinter::classifier::{ClassifierStats, UpdateClassifier};
use stripprinter::dispatch::PrintDispatcher;
use stripprinter::feed::{FeedReader, FeedSource, FeedSummary};
use stripprinter::log::Logger;
use stripprinter::log_warn;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the run command.
pub struct RunArgs {
    pub feed: FeedSource,
    pub dry_run: bool,
    pub debug: bool,
}

/// Run the run command.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug, args.dry_run)?;
    runner.log_startup("run");

    let reader = args.feed.open()?;
    info!("Reading flight plan updates from {}", describe(&args.feed));

    let (summary, stats) = if args.dry_run {
        let console = ConsoleDispatcher::new(runner.logger());
        process(reader, runner.create_classifier(console), runner.logger())?
    } else {
        let printer = runner.create_print_dispatcher();
        info!("Printing with {}", printer.executable().display());
        process(reader, runner.create_classifier(printer), runner.logger())?
    };

    info!("Session finished: {}", stats);
    eprintln!("{}", stats);
    if summary.skipped > 0 {
        eprintln!(
            "{} feed line(s) skipped; see the log file for details",
            summary.skipped
        );
    }

    Ok(())
}

fn process<D: PrintDispatcher>(
    reader: Box<dyn BufRead>,
    mut classifier: UpdateClassifier<D>,
    logger: Arc<dyn Logger>,
) -> Result<(FeedSummary, ClassifierStats), CliError> {
    let summary = FeedReader::new(reader)
        .with_logger(logger)
        .drive(&mut classifier)?;
    Ok((summary, classifier.stats()))
}

fn describe(source: &FeedSource) -> String {
    match source {
        FeedSource::Stdin => "stdin".to_string(),
        FeedSource::File(path) => path.display().to_string(),
    }
}

/// Writes strips to stdout instead of the printing tool.
struct ConsoleDispatcher {
    logger: Arc<dyn Logger>,
}

impl ConsoleDispatcher {
    fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl PrintDispatcher for ConsoleDispatcher {
    fn dispatch(&self, payload: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", payload).and_then(|()| out.flush()) {
            log_warn!(self.logger, "Strip not shown: {}", e);
        }
    }
}
