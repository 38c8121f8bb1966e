//! `godtrend god`: classify each class by its latest snapshot.
//!
//! Uses the same block parser as `trend`, but a single snapshot is enough
//! for a verdict. By default only god and demi-god structs are listed.

pub mod analyzer;
mod report;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::parser::{BlockParser, open_report};
use analyzer::{StructVerdict, Thresholds, Verdict, assess_block};
use report::{write_json, write_table};

#[derive(Debug, Clone, Copy, Default)]
pub struct GodOptions {
    pub json: bool,
    /// Include classes whose verdict is normal.
    pub all: bool,
    pub thresholds: Thresholds,
}

pub fn run(path: &Path, opts: &GodOptions) -> Result<(), Box<dyn Error>> {
    let t = &opts.thresholds;
    if t.wmc < 0 || t.atfd < 0 || !t.tcc.is_finite() || t.tcc < 0.0 {
        return Err("thresholds must be non-negative finite numbers".into());
    }

    let parser = open_report(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let listed = scan(parser, opts, &mut out)?;
    info!("{}: {listed} class(es) listed", path.display());
    Ok(())
}

/// Classify every block from `parser` and write the listing to `out`.
/// Returns the number of classes listed.
pub fn scan<R: BufRead>(
    parser: BlockParser<R>,
    opts: &GodOptions,
    out: &mut impl Write,
) -> Result<usize, Box<dyn Error>> {
    let mut verdicts: Vec<StructVerdict> = Vec::new();

    for block in parser {
        let block = block?;
        let Some(v) = assess_block(&block, &opts.thresholds) else {
            debug!("skipping {:?}: no rows", block.name);
            continue;
        };
        if opts.all || v.verdict != Verdict::Normal {
            verdicts.push(v);
        }
    }

    // Worst first: god, then demi-god, then normal; by name within a verdict.
    verdicts.sort_by(|a, b| {
        rank(a.verdict)
            .cmp(&rank(b.verdict))
            .then_with(|| a.class.cmp(&b.class))
    });

    if opts.json {
        write_json(out, &verdicts)?;
    } else {
        write_table(out, &verdicts, &opts.thresholds)?;
    }
    out.flush()?;

    Ok(verdicts.len())
}

fn rank(v: Verdict) -> u8 {
    match v {
        Verdict::God => 0,
        Verdict::DemiGod => 1,
        Verdict::Normal => 2,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
