/// Report formatters for metric trends.
///
/// The plain format is one `<class> <wmc> <atfd> <tcc>` line per class and
/// is written as each block closes. Table and JSON are written once the
/// scan has finished.
use std::io::{self, Write};

use serde::Serialize;

use super::analyzer::{Direction, TrendResult};
use crate::report_helpers;

/// Write one result as space-separated fields.
pub fn write_line(out: &mut impl Write, r: &TrendResult) -> io::Result<()> {
    writeln!(out, "{} {} {} {}", r.class, r.wmc, r.atfd, r.tcc)
}

/// Write a table of trend counts with a direction label per metric.
pub fn write_table(
    out: &mut impl Write,
    results: &[TrendResult],
    dropped: usize,
) -> io::Result<()> {
    if results.is_empty() {
        writeln!(out, "No classes with enough snapshots found.")?;
        return Ok(());
    }

    let name_width = report_helpers::max_name_width(results.iter().map(|r| r.class.as_str()), 5);
    // " {class}  {Snaps:>5}  {WMC:>10}  {ATFD:>10}  {TCC:>10}"
    let header_width = 1 + name_width + 2 + 5 + 3 * (2 + 10);
    let separator = report_helpers::separator(header_width.max(60));

    writeln!(out, "Metric Trends Across Snapshots")?;
    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " {:<width$}  {:>5}  {:>10}  {:>10}  {:>10}",
        "Class",
        "Snaps",
        "WMC",
        "ATFD",
        "TCC",
        width = name_width
    )?;
    writeln!(out, "{separator}")?;

    for r in results {
        writeln!(
            out,
            " {:<width$}  {:>5}  {:>10}  {:>10}  {:>10}",
            r.class,
            r.snapshots,
            cell(r.wmc),
            cell(r.atfd),
            cell(r.tcc),
            width = name_width
        )?;
    }

    writeln!(out, "{separator}")?;
    if dropped > 0 {
        writeln!(out)?;
        writeln!(out, "{dropped} class(es) skipped: too few snapshots.")?;
    }
    Ok(())
}

/// Signed count followed by its direction, e.g. `+2 UP`.
fn cell(count: i64) -> String {
    format!("{count:+} {}", Direction::from_count(count).label())
}

/// JSON-serializable representation of a class trend.
#[derive(Serialize)]
struct JsonEntry<'a> {
    class: &'a str,
    snapshots: usize,
    wmc: MetricTrend,
    atfd: MetricTrend,
    tcc: MetricTrend,
}

#[derive(Serialize)]
struct MetricTrend {
    count: i64,
    direction: Direction,
}

impl MetricTrend {
    fn new(count: i64) -> Self {
        Self {
            count,
            direction: Direction::from_count(count),
        }
    }
}

/// Serialize trend results as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, results: &[TrendResult]) -> io::Result<()> {
    let entries: Vec<JsonEntry<'_>> = results
        .iter()
        .map(|r| JsonEntry {
            class: &r.class,
            snapshots: r.snapshots,
            wmc: MetricTrend::new(r.wmc),
            atfd: MetricTrend::new(r.atfd),
            tcc: MetricTrend::new(r.tcc),
        })
        .collect();

    report_helpers::write_json(out, &entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
