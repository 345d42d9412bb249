// HitMapper - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// Everything here lives for a single line: tokens borrow from the line
// being processed and are dropped before the next one is read.

use crate::util::constants;
use chrono::{DateTime, FixedOffset};
use std::fmt;

// =============================================================================
// Tokens
// =============================================================================

/// Which alternative of the extraction pattern produced a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `"..."` segment; the quotes are stripped.
    Quoted,
    /// `[...]` segment; the brackets are stripped.
    Bracketed,
    /// Run of non-whitespace characters.
    Bare,
}

/// One field of a log line as produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }
}

// =============================================================================
// Access record (extracted fields)
// =============================================================================

/// The positional fields of one access-log line.
///
/// Common log format lines fill the seven core fields. Combined log format
/// lines additionally carry `referrer` and `user_agent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord<'a> {
    pub ip: &'a str,
    pub identity: &'a str,
    pub username: &'a str,
    pub time: &'a str,
    pub request: &'a str,
    pub status_code: &'a str,
    pub size: &'a str,
    pub referrer: Option<&'a str>,
    pub user_agent: Option<&'a str>,
}

impl<'a> AccessRecord<'a> {
    /// Parse the bracketed time field, e.g. `10/Oct/2000:13:55:36 -0700`.
    ///
    /// Returns `None` when the field does not follow the access-log format;
    /// the mapper never rejects a line for that reason.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_str(self.time, constants::ACCESS_LOG_TIME_FORMAT).ok()
    }

    /// HTTP status code, if the field is numeric.
    pub fn status(&self) -> Option<u16> {
        self.status_code.parse().ok()
    }
}

// =============================================================================
// Output record
// =============================================================================

/// A key/value pair emitted to the reduce stage: the client IP and a count
/// of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRecord {
    pub ip: String,
    pub count: u32,
}

impl HitRecord {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            count: constants::HIT_COUNT,
        }
    }
}

/// Renders the streaming wire form `<ip>\t<count>` (no trailing newline).
impl fmt::Display for HitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.ip, self.count)
    }
}

// =============================================================================
// Per-line outcome
// =============================================================================

/// What the mapper decided for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line matched; emit this record.
    Emit(HitRecord),
    /// The line did not tokenize into a recognised field layout.
    FieldCountMismatch { found: usize },
    /// The fields were extracted but the IP is not the target.
    IpMismatch,
}

impl LineOutcome {
    /// The record to emit, if any.
    pub fn hit(&self) -> Option<&HitRecord> {
        match self {
            LineOutcome::Emit(hit) => Some(hit),
            _ => None,
        }
    }
}

/// Counters accumulated over one mapper run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSummary {
    pub lines_read: u64,
    pub emitted: u64,
    pub field_count_mismatches: u64,
    pub ip_mismatches: u64,
}

impl MapSummary {
    /// Account for one processed line.
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Emit(_) => self.emitted += 1,
            LineOutcome::FieldCountMismatch { .. } => self.field_count_mismatches += 1,
            LineOutcome::IpMismatch => self.ip_mismatches += 1,
        }
    }
}
