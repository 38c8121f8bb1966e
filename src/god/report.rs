/// Report formatters for god-struct classification.
///
/// Shows the latest WMC, ATFD and TCC of each class with its verdict.
/// Undefined cohesion is shown as `--` in the table and `null` in JSON.
use std::io::{self, Write};

use serde::Serialize;

use super::analyzer::{StructVerdict, Thresholds, Verdict, is_null_tcc};
use crate::report_helpers;

fn tcc_cell(tcc: f64) -> String {
    if is_null_tcc(tcc) {
        "--".to_string()
    } else {
        format!("{tcc:.2}")
    }
}

/// Write a table of classes with their latest metrics and verdict.
pub fn write_table(
    out: &mut impl Write,
    verdicts: &[StructVerdict],
    thresholds: &Thresholds,
) -> io::Result<()> {
    if verdicts.is_empty() {
        writeln!(out, "No god structs found.")?;
        return Ok(());
    }

    let name_width = report_helpers::max_name_width(verdicts.iter().map(|v| v.class.as_str()), 5);
    let header_width = 1 + name_width + 2 + 5 + 2 + 6 + 2 + 6 + 2 + 6 + 2 + 8;
    let separator = report_helpers::separator(header_width.max(60));

    writeln!(
        out,
        "God Structs (WMC > {}, ATFD > {}, TCC < {})",
        thresholds.wmc, thresholds.atfd, thresholds.tcc
    )?;
    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " {:<width$}  {:>5}  {:>6}  {:>6}  {:>6}  Verdict",
        "Class",
        "Snaps",
        "WMC",
        "ATFD",
        "TCC",
        width = name_width
    )?;
    writeln!(out, "{separator}")?;

    for v in verdicts {
        writeln!(
            out,
            " {:<width$}  {:>5}  {:>6}  {:>6}  {:>6}  {}",
            v.class,
            v.snapshots,
            v.latest.wmc,
            v.latest.atfd,
            tcc_cell(v.latest.tcc),
            v.verdict.label(),
            width = name_width
        )?;
    }

    writeln!(out, "{separator}")?;

    let gods = verdicts.iter().filter(|v| v.verdict == Verdict::God).count();
    let demi = verdicts
        .iter()
        .filter(|v| v.verdict == Verdict::DemiGod)
        .count();
    writeln!(out, "[*] Total {gods} god struct(s), {demi} demi-god struct(s).")
}

/// JSON-serializable representation of a class verdict.
#[derive(Serialize)]
struct JsonEntry<'a> {
    class: &'a str,
    snapshots: usize,
    wmc: i64,
    atfd: i64,
    tcc: Option<f64>,
    verdict: Verdict,
}

/// Serialize class verdicts as pretty-printed JSON.
pub fn write_json(out: &mut impl Write, verdicts: &[StructVerdict]) -> io::Result<()> {
    let entries: Vec<JsonEntry<'_>> = verdicts
        .iter()
        .map(|v| JsonEntry {
            class: &v.class,
            snapshots: v.snapshots,
            wmc: v.latest.wmc,
            atfd: v.latest.atfd,
            tcc: (!is_null_tcc(v.latest.tcc)).then_some(v.latest.tcc),
            verdict: v.verdict,
        })
        .collect();

    report_helpers::write_json(out, &entries)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
