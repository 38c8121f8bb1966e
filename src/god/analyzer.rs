//! God-struct classification of the latest snapshot of a class.
//!
//! A class is a god struct when it is complex (WMC above threshold), reaches
//! into other classes' data (ATFD above threshold) and has low cohesion (TCC
//! below threshold). Meeting exactly two of the three makes it a demi-god.

use serde::Serialize;

use crate::parser::{ClassBlock, Snapshot};

/// TCC value the report writer uses when a class has fewer than two
/// methods and cohesion is undefined.
pub const TCC_NULL: f64 = 99999.0;

/// Classification cut-offs. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub wmc: i64,
    pub atfd: i64,
    pub tcc: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            wmc: 47,
            atfd: 5,
            tcc: 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    God,
    DemiGod,
    Normal,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::God => "GOD",
            Verdict::DemiGod => "DEMI-GOD",
            Verdict::Normal => "normal",
        }
    }
}

pub fn is_null_tcc(tcc: f64) -> bool {
    tcc >= TCC_NULL
}

/// Classify one snapshot against the thresholds.
pub fn classify(s: &Snapshot, t: &Thresholds) -> Verdict {
    let hits = [s.wmc > t.wmc, s.atfd > t.atfd, s.tcc < t.tcc]
        .iter()
        .filter(|&&hit| hit)
        .count();
    match hits {
        3 => Verdict::God,
        2 => Verdict::DemiGod,
        _ => Verdict::Normal,
    }
}

/// Latest-snapshot verdict for one class.
#[derive(Debug, Clone, PartialEq)]
pub struct StructVerdict {
    pub class: String,
    pub snapshots: usize,
    pub latest: Snapshot,
    pub verdict: Verdict,
}

/// Classify the latest snapshot of a block. Empty blocks give `None`.
pub fn assess_block(block: &ClassBlock, t: &Thresholds) -> Option<StructVerdict> {
    let latest = block.latest()?;
    Some(StructVerdict {
        class: block.name.clone(),
        snapshots: block.len(),
        latest,
        verdict: classify(&latest, t),
    })
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
