//! Error types for reading and parsing evolution reports.
//!
//! Every failure is fatal to the scan: the parser stops at the first error
//! and the command propagates it to `main`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot open report {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: class header has no ':' delimiter: {text:?}")]
    Header { line: usize, text: String },

    #[error("line {line}: data line has no field at position {index}")]
    MissingField { line: usize, index: usize },

    #[error("line {line}: field {index} is not a valid number: {token:?}")]
    InvalidNumber {
        line: usize,
        index: usize,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
