/// CLI argument definitions for the `godtrend` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Report read when no path is given.
pub const DEFAULT_REPORT: &str = "out.txt";

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "godtrend",
    version,
    about = "Metric trends for god-struct evolution reports"
)]
pub struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every subcommand.
#[derive(Args)]
pub struct CommonArgs {
    /// Evolution report to read, `-` for stdin (default: out.txt)
    pub path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommonArgs {
    pub fn report_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show whether WMC, ATFD and TCC went up or down per class
    #[command(long_about = "\
Show whether WMC, ATFD and TCC went up or down per class.

Reads an evolution report where each class header is followed by one
`files` row per analysed release:

  [hugolib] Site: ...
  files a b <wmc> c <atfd> d <tcc>
  files a b <wmc> c <atfd> d <tcc>

For every metric the trend is the number of releases where it rose
minus the number where it fell. Unchanged values do not count.

  > 0  UP    -- the metric mostly grew
  < 0  DOWN  -- the metric mostly shrank
  = 0  FLAT  -- balanced or unchanged

Classes with fewer than two rows have no direction and are skipped.
Default output is one `<class> <wmc> <atfd> <tcc>` line per class,
written as soon as the class block ends.

Examples:
  godtrend trend                   # read ./out.txt
  godtrend trend evolution.txt     # read another report
  godtrend trend --table           # aligned table with directions
  godtrend trend --json            # machine-readable output")]
    Trend {
        #[command(flatten)]
        common: CommonArgs,

        /// Show an aligned table with direction labels
        #[arg(long, conflicts_with = "json")]
        table: bool,

        /// Minimum rows for a class to get a trend (default: 2)
        #[arg(long, default_value = "2")]
        min_snapshots: usize,
    },

    /// Classify each class as god, demi-god or normal by its latest row
    #[command(long_about = "\
Classify each class by the metrics of its latest row.

  GOD       -- WMC > wmc AND ATFD > atfd AND TCC < tcc
  DEMI-GOD  -- exactly two of the three conditions hold

A TCC of 99999 means cohesion is undefined (fewer than two methods)
and is shown as `--`.

Examples:
  godtrend god                     # god and demi-god structs in ./out.txt
  godtrend god --all               # include normal classes
  godtrend god --wmc 30 --atfd 3   # stricter thresholds")]
    God {
        #[command(flatten)]
        common: CommonArgs,

        /// List normal classes too
        #[arg(long)]
        all: bool,

        /// Weighted method complexity threshold (default: 47)
        #[arg(long, default_value = "47")]
        wmc: i64,

        /// Access to foreign data threshold (default: 5)
        #[arg(long, default_value = "5")]
        atfd: i64,

        /// Tight class cohesion threshold (default: 0.3)
        #[arg(long, default_value = "0.3")]
        tcc: f64,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
