//! Directional trend counting over per-class metric histories.
//!
//! The trend of a sequence is the number of strict increases between
//! consecutive snapshots minus the number of strict decreases. Ties do not
//! count. This is a coarse direction signal, not a slope.

use std::cmp::Ordering;

use serde::Serialize;

use crate::parser::ClassBlock;

/// Fewest snapshots that carry a direction.
pub const MIN_SNAPSHOTS: usize = 2;

/// Net direction of a metric across its snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn from_count(count: i64) -> Self {
        match count.cmp(&0) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Flat,
        }
    }

    /// Uppercase label for table output.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Flat => "FLAT",
        }
    }
}

/// Net count of strict pairwise increases minus decreases.
///
/// Sequences shorter than two samples give 0. Pairs that cannot be
/// ordered (NaN) count like ties.
pub fn trend_count<T: PartialOrd>(samples: &[T]) -> i64 {
    samples
        .windows(2)
        .map(|pair| match pair[1].partial_cmp(&pair[0]) {
            Some(Ordering::Greater) => 1,
            Some(Ordering::Less) => -1,
            _ => 0,
        })
        .sum()
}

/// Trend counts for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendResult {
    pub class: String,
    pub snapshots: usize,
    pub wmc: i64,
    pub atfd: i64,
    pub tcc: i64,
}

/// Compute trends for a block, or `None` when it has fewer than
/// `min_snapshots` snapshots.
pub fn analyze_block(block: &ClassBlock, min_snapshots: usize) -> Option<TrendResult> {
    if block.len() < min_snapshots.max(MIN_SNAPSHOTS) {
        return None;
    }
    Some(TrendResult {
        class: block.name.clone(),
        snapshots: block.len(),
        wmc: trend_count(block.wmc()),
        atfd: trend_count(block.atfd()),
        tcc: trend_count(block.tcc()),
    })
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
