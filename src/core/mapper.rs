// HitMapper - core/mapper.rs
//
// The per-line map step: tokenize, bind positional fields, filter, emit.
// Core layer: accepts a line of text, never touches a stream.

use crate::core::filter::IpFilter;
use crate::core::model::{AccessRecord, HitRecord, LineOutcome, Token, TokenKind};
use crate::core::tokenizer::tokenize;
use crate::util::constants::{COMBINED_FIELD_COUNT, EXPECTED_FIELD_COUNT};

/// Bind tokens to access-log fields.
///
/// Accepted layouts:
/// - exactly 7 tokens (common log format);
/// - exactly 9 tokens where the last two are quoted (combined log format,
///   adding referrer and user agent).
///
/// Anything else returns `None`.
pub fn extract_fields<'a>(tokens: &[Token<'a>]) -> Option<AccessRecord<'a>> {
    let (referrer, user_agent) = match tokens.len() {
        EXPECTED_FIELD_COUNT => (None, None),
        COMBINED_FIELD_COUNT => {
            let (referrer, user_agent) = (tokens[7], tokens[8]);
            if referrer.kind != TokenKind::Quoted || user_agent.kind != TokenKind::Quoted {
                return None;
            }
            (Some(referrer.text), Some(user_agent.text))
        }
        _ => return None,
    };

    Some(AccessRecord {
        ip: tokens[0].text,
        identity: tokens[1].text,
        username: tokens[2].text,
        time: tokens[3].text,
        request: tokens[4].text,
        status_code: tokens[5].text,
        size: tokens[6].text,
        referrer,
        user_agent,
    })
}

/// Run the map step over one input line.
///
/// Trailing line terminators are ignored. Non-matching lines are reported
/// through the returned outcome and are never errors.
pub fn map_line(line: &str, filter: &IpFilter) -> LineOutcome {
    let line = line.trim_end_matches(['\n', '\r']);
    let tokens = tokenize(line);

    let Some(record) = extract_fields(&tokens) else {
        return LineOutcome::FieldCountMismatch {
            found: tokens.len(),
        };
    };

    if filter.matches(&record) {
        LineOutcome::Emit(HitRecord::new(record.ip))
    } else {
        LineOutcome::IpMismatch
    }
}
