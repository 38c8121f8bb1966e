//! Block parser for god-struct evolution reports.
//!
//! The report groups metric rows under class headers:
//!
//! ```text
//! [hugolib] Site: ...
//! files a b <wmc> c <atfd> d <tcc>
//! files a b <wmc> c <atfd> d <tcc>
//!
//! [tpl] Namespace: ...
//! ```
//!
//! `BlockParser` is an explicit two-state machine (Seeking, Collecting)
//! driven over a single forward cursor. The line that ends a data run is
//! pushed back and examined again in Seeking, so a header that directly
//! follows data still opens its own block. A block still open at end of
//! input is flushed.

pub mod line;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{ReportError, Result};
use line::{LineKind, classify, header_name, parse_snapshot};

/// One recorded measurement of a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub wmc: i64,
    pub atfd: i64,
    pub tcc: f64,
}

/// A class identifier and its metric history, one entry per snapshot.
/// The three sequences only grow together through `push_snapshot`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassBlock {
    pub name: String,
    wmc: Vec<i64>,
    atfd: Vec<i64>,
    tcc: Vec<f64>,
}

impl ClassBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wmc: Vec::new(),
            atfd: Vec::new(),
            tcc: Vec::new(),
        }
    }

    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.wmc.push(snapshot.wmc);
        self.atfd.push(snapshot.atfd);
        self.tcc.push(snapshot.tcc);
    }

    /// Number of snapshots recorded.
    pub fn len(&self) -> usize {
        self.wmc.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wmc.is_empty()
    }

    pub fn wmc(&self) -> &[i64] {
        &self.wmc
    }

    pub fn atfd(&self) -> &[i64] {
        &self.atfd
    }

    pub fn tcc(&self) -> &[f64] {
        &self.tcc
    }

    /// The most recent snapshot, if any.
    pub fn latest(&self) -> Option<Snapshot> {
        let i = self.len().checked_sub(1)?;
        Some(Snapshot {
            wmc: self.wmc[i],
            atfd: self.atfd[i],
            tcc: self.tcc[i],
        })
    }
}

#[derive(Debug)]
enum State {
    Seeking,
    Collecting(ClassBlock),
}

/// Lazy, single-pass parser yielding one `ClassBlock` per class header.
///
/// Blocks are yielded whatever their length; callers decide how many
/// snapshots they need. The iterator stops for good after the first error.
pub struct BlockParser<R> {
    lines: io::Lines<R>,
    state: State,
    pending: Option<String>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> BlockParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            state: State::Seeking,
            pending: None,
            line_no: 0,
            done: false,
        }
    }

    /// Number of lines consumed from the reader so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Next line to examine: the pushed-back line first, then the reader.
    fn next_line(&mut self) -> Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some(line));
        }
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_no += 1;
                Ok(Some(line))
            }
            Some(Err(source)) => Err(ReportError::Read {
                line: self.line_no + 1,
                source,
            }),
            None => Ok(None),
        }
    }

    /// Run the state machine until a block closes or input ends.
    fn advance(&mut self) -> Result<Option<ClassBlock>> {
        loop {
            let Some(line) = self.next_line()? else {
                return Ok(match std::mem::replace(&mut self.state, State::Seeking) {
                    State::Collecting(block) => {
                        debug!("end of input: flushing block {:?}", block.name);
                        Some(block)
                    }
                    State::Seeking => None,
                });
            };

            match std::mem::replace(&mut self.state, State::Seeking) {
                State::Seeking => {
                    if classify(&line) == LineKind::Header {
                        let name = header_name(&line, self.line_no)?;
                        debug!("line {}: opened block {name:?}", self.line_no);
                        self.state = State::Collecting(ClassBlock::new(name));
                    }
                }
                State::Collecting(mut block) => {
                    if classify(&line) == LineKind::Data {
                        block.push_snapshot(parse_snapshot(&line, self.line_no)?);
                        self.state = State::Collecting(block);
                    } else {
                        debug!(
                            "line {}: closed block {:?} with {} snapshot(s)",
                            self.line_no,
                            block.name,
                            block.len()
                        );
                        self.pending = Some(line);
                        return Ok(Some(block));
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for BlockParser<R> {
    type Item = Result<ClassBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(block)) => Some(Ok(block)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Path that selects standard input instead of a file.
const STDIN_PATH: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Open a report for parsing. `-` reads standard input.
pub fn open_report(path: &Path) -> Result<BlockParser<Box<dyn BufRead>>> {
    let reader: Box<dyn BufRead> = if is_stdin(path) {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| ReportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Box::new(BufReader::new(file))
    };
    Ok(BlockParser::new(reader))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
