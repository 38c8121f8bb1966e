//! `godtrend trend`: per-class direction of WMC, ATFD and TCC.
//!
//! Drives the block parser over the report, computes a trend count for each
//! metric of every block with enough snapshots, and writes the results.
//! In plain format each result is written as soon as its block closes.

pub mod analyzer;
mod report;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::parser::{BlockParser, open_report};
use analyzer::{MIN_SNAPSHOTS, TrendResult, analyze_block};
use report::{write_json, write_line, write_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct TrendOptions {
    pub format: OutputFormat,
    pub min_snapshots: usize,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            min_snapshots: MIN_SNAPSHOTS,
        }
    }
}

/// Counters gathered over one scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub blocks: usize,
    pub emitted: usize,
    pub dropped: usize,
}

pub fn run(path: &Path, opts: &TrendOptions) -> Result<(), Box<dyn Error>> {
    if opts.min_snapshots < MIN_SNAPSHOTS {
        return Err(format!("--min-snapshots must be at least {MIN_SNAPSHOTS}").into());
    }

    let parser = open_report(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = scan(parser, opts, &mut out)?;
    info!(
        "{}: {} line(s), {} class block(s), {} trend(s), {} skipped",
        path.display(),
        summary.lines,
        summary.blocks,
        summary.emitted,
        summary.dropped
    );
    Ok(())
}

/// Consume every block from `parser` and write trends to `out`.
///
/// Stops at the first parse error. Plain lines already written stay
/// written; table and JSON output is only produced for a complete scan.
pub fn scan<R: BufRead>(
    mut parser: BlockParser<R>,
    opts: &TrendOptions,
    out: &mut impl Write,
) -> Result<ScanSummary, Box<dyn Error>> {
    let mut summary = ScanSummary::default();
    let mut results: Vec<TrendResult> = Vec::new();

    for block in parser.by_ref() {
        let block = block?;
        summary.blocks += 1;

        let Some(result) = analyze_block(&block, opts.min_snapshots) else {
            debug!("skipping {:?}: {} snapshot(s)", block.name, block.len());
            summary.dropped += 1;
            continue;
        };
        summary.emitted += 1;

        match opts.format {
            OutputFormat::Plain => write_line(out, &result)?,
            OutputFormat::Table | OutputFormat::Json => results.push(result),
        }
    }

    match opts.format {
        OutputFormat::Plain => {}
        OutputFormat::Table => write_table(out, &results, summary.dropped)?,
        OutputFormat::Json => write_json(out, &results)?,
    }
    out.flush()?;

    summary.lines = parser.lines_read();
    Ok(summary)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
