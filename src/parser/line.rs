/// Classification and field extraction for single report lines.
///
/// A class header starts with `[` and names the class between the closing
/// `]` and the following `:`. A data line starts with the literal `files`
/// and carries WMC, ATFD and TCC at fixed whitespace-token positions,
/// counted from the first token after the keyword. Anything else ends the
/// current data run.
use std::str::FromStr;

use super::Snapshot;
use crate::error::{ReportError, Result};

const HEADER_PREFIX: char = '[';
const DATA_PREFIX: &str = "files";

/// Field positions among the tokens that follow the `files` keyword:
/// `files <0> <1> <wmc> <3> <atfd> <5> <tcc>`.
pub(crate) const WMC_FIELD: usize = 2;
pub(crate) const ATFD_FIELD: usize = 4;
pub(crate) const TCC_FIELD: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Data,
    Other,
}

/// Classify a line by its prefix only; no parsing happens here.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(HEADER_PREFIX) {
        LineKind::Header
    } else if line.starts_with(DATA_PREFIX) {
        LineKind::Data
    } else {
        LineKind::Other
    }
}

/// Extract the class identifier from a header line.
///
/// `[pkg] Name: ...` yields `Name`. When no `:` follows the closing bracket
/// (the `[Name: ...]` form), the identifier runs from the opening `[` to
/// the first `:`. Leading whitespace is trimmed; trailing text is kept.
pub fn header_name(line: &str, line_no: usize) -> Result<String> {
    let body = line.strip_prefix(HEADER_PREFIX).unwrap_or(line);

    if let Some(close) = body.find(']') {
        let after = &body[close + 1..];
        if let Some(colon) = after.find(':') {
            return Ok(after[..colon].trim_start().to_string());
        }
    }

    match body.find(':') {
        Some(colon) => Ok(body[..colon].trim_start().to_string()),
        None => Err(ReportError::Header {
            line: line_no,
            text: line.to_string(),
        }),
    }
}

/// Parse the three metric fields of a `files` line.
pub fn parse_snapshot(line: &str, line_no: usize) -> Result<Snapshot> {
    let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
    Ok(Snapshot {
        wmc: field(&tokens, WMC_FIELD, line_no)?,
        atfd: field(&tokens, ATFD_FIELD, line_no)?,
        tcc: field(&tokens, TCC_FIELD, line_no)?,
    })
}

fn field<T: FromStr>(tokens: &[&str], index: usize, line_no: usize) -> Result<T> {
    let token = tokens.get(index).ok_or(ReportError::MissingField {
        line: line_no,
        index,
    })?;
    token.parse().map_err(|_| ReportError::InvalidNumber {
        line: line_no,
        index,
        token: token.to_string(),
    })
}

#[cfg(test)]
#[path = "line_test.rs"]
mod tests;
