//! Multi-target command handler
//!
//! Every listing command follows the same flow:
//! 1. Resolve targets (flags + config)
//! 2. Validate and fetch each target, up to `--concurrency` at a time
//! 3. Print each report in input order as soon as it is ready
//! 4. Report failures without stopping, unless `--fail-fast` is set

use std::future::Future;

use colored::Colorize;
use futures::stream::{self, StreamExt};
use log::debug;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::models::EntityReport;
use crate::output::json::format_json;
use crate::output::{format_report, plain::PlainRow};
use crate::sso::Target;

/// Run `process` for every target and hand each result to `emit`.
///
/// Results are emitted in target order even when `concurrency > 1`. A
/// failing target is reported on stderr and the rest still run; with
/// `fail_fast` the first failure is returned immediately. A single failing
/// target surfaces its own error, several surface [`Error::Partial`].
pub async fn run_targets<O, F, Fut, E>(
    targets: Vec<Target>,
    concurrency: usize,
    fail_fast: bool,
    process: F,
    mut emit: E,
) -> Result<()>
where
    F: Fn(Target) -> Fut,
    Fut: Future<Output = Result<O>>,
    E: FnMut(O) -> Result<()>,
{
    let total = targets.len();
    debug!(
        "Processing {} target(s) with concurrency {}",
        total, concurrency
    );

    let mut results = stream::iter(targets.into_iter().map(|target| {
        let pending = process(target.clone());
        async move { (target, pending.await) }
    }))
    .buffered(concurrency.max(1));

    let mut failures = Vec::new();
    while let Some((target, result)) = results.next().await {
        match result {
            Ok(output) => emit(output)?,
            Err(err) if fail_fast => return Err(err),
            Err(err) => {
                if total > 1 {
                    eprintln!("{} {}: {}", "✗".red(), target, err);
                }
                failures.push(err);
            }
        }
    }

    match failures.len() {
        0 => Ok(()),
        1 if total == 1 => Err(failures.remove(0)),
        failed => Err(Error::Partial { failed, total }),
    }
}

/// Prints reports as they arrive, deferring JSON to one document at the end.
pub struct ReportPrinter<R> {
    format: OutputFormat,
    printed: usize,
    deferred: Vec<EntityReport<R>>,
}

impl<R> ReportPrinter<R>
where
    R: PlainRow + Serialize,
{
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            printed: 0,
            deferred: Vec::new(),
        }
    }

    /// Print (or, for JSON, hold) one report. `D` is the table row type.
    pub fn emit<D>(&mut self, report: EntityReport<R>) -> Result<()>
    where
        D: Tabled + for<'a> From<&'a R>,
    {
        match format_report::<R, D>(&report, self.format) {
            Some(text) => {
                if self.printed > 0 {
                    println!();
                }
                println!("{}", text);
                self.printed += 1;
            }
            None => self.deferred.push(report),
        }
        Ok(())
    }

    /// Print the JSON document, if any reports were deferred or the format is JSON.
    pub fn finish(self) -> Result<()> {
        if self.format == OutputFormat::Json {
            println!("{}", format_json(&self.deferred)?);
        }
        Ok(())
    }
}
