// HitMapper - app/runner.rs
//
// Streams input lines through the map step and writes emitted records.
// The only layer that owns reader/writer handles; main.rs supplies
// locked stdin/stdout, tests supply in-memory buffers.

use crate::core::filter::IpFilter;
use crate::core::mapper::{extract_fields, map_line};
use crate::core::model::{LineOutcome, MapSummary};
use crate::core::tokenizer::tokenize;
use crate::util::error::{Result, StreamError};
use crate::util::logging::preview;
use std::io::{BufRead, Write};

/// Read `input` to end-of-stream, writing `<ip>\t1` to `output` for every
/// matching line in input order.
///
/// Non-matching lines are skipped silently (they are counted in the returned
/// summary). A read, decode, write or flush failure aborts the run.
pub fn run_mapper<R, W>(mut input: R, mut output: W, filter: &IpFilter) -> Result<MapSummary>
where
    R: BufRead,
    W: Write,
{
    tracing::debug!(target_ip = filter.target(), "Mapper started");

    let mut summary = MapSummary::default();
    let mut line = String::new();

    loop {
        line.clear();
        let line_number = summary.lines_read + 1;
        let bytes = input
            .read_line(&mut line)
            .map_err(|source| StreamError::Read {
                line_number,
                source,
            })?;
        if bytes == 0 {
            break;
        }

        let outcome = map_line(&line, filter);
        match &outcome {
            LineOutcome::Emit(hit) => {
                writeln!(output, "{hit}").map_err(|source| StreamError::Write {
                    line_number,
                    source,
                })?;
                trace_hit(&line, line_number);
            }
            LineOutcome::FieldCountMismatch { found } => {
                tracing::trace!(
                    line = line_number,
                    tokens = *found,
                    text = preview(line.trim_end()),
                    "Skipping line: unrecognised field layout"
                );
            }
            LineOutcome::IpMismatch => {
                tracing::trace!(line = line_number, "Skipping line: client IP not targeted");
            }
        }
        summary.record(&outcome);
    }

    output
        .flush()
        .map_err(|source| StreamError::Flush { source })?;

    tracing::debug!(
        lines = summary.lines_read,
        emitted = summary.emitted,
        field_count_mismatches = summary.field_count_mismatches,
        ip_mismatches = summary.ip_mismatches,
        "Mapper complete"
    );

    Ok(summary)
}

fn trace_hit(line: &str, line_number: u64) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let tokens = tokenize(line);
    if let Some(record) = extract_fields(&tokens) {
        tracing::trace!(
            line = line_number,
            ip = record.ip,
            timestamp = ?record.timestamp(),
            status = ?record.status(),
            "Hit emitted"
        );
    }
}
