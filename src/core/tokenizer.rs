// HitMapper - core/tokenizer.rs
//
// Splits an access-log line into fields with a single regex pass.
// Quoted and bracketed segments stay whole even when they contain spaces;
// everything else splits on whitespace.

use crate::core::model::{Token, TokenKind};
use crate::util::constants;
use regex::Regex;
use std::sync::OnceLock;

/// The compiled extraction pattern, built on first use and shared for the
/// life of the process.
pub fn extraction_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // The pattern is a constant covered by the unit tests below, so a
        // failure here is a build defect rather than an input condition.
        Regex::new(constants::EXTRACTION_PATTERN).expect("tokenizer: invalid extraction regex")
    })
}

/// Tokenize `line` left to right.
///
/// Each match contributes exactly one token: the alternative that
/// participated in the match. An empty quoted segment (`""`) yields an
/// empty token, which still counts toward the field total.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    extraction_regex()
        .captures_iter(line)
        .filter_map(|caps| {
            caps.get(1)
                .map(|m| Token::new(m.as_str(), TokenKind::Quoted))
                .or_else(|| caps.get(2).map(|m| Token::new(m.as_str(), TokenKind::Bracketed)))
                .or_else(|| caps.get(3).map(|m| Token::new(m.as_str(), TokenKind::Bare)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<&str> {
        tokenize(line).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_extraction_regex_compiles() {
        assert!(extraction_regex().is_match("x"));
    }

    #[test]
    fn test_common_log_line_yields_seven_tokens() {
        let line = r#"10.223.157.186 - - [15/Jul/2009:14:58:59 -0700] "GET / HTTP/1.1" 403 202"#;
        assert_eq!(
            texts(line),
            vec![
                "10.223.157.186",
                "-",
                "-",
                "15/Jul/2009:14:58:59 -0700",
                "GET / HTTP/1.1",
                "403",
                "202",
            ]
        );
    }

    #[test]
    fn test_token_kinds() {
        let tokens = tokenize(r#"a [b c] "d e""#);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Bare, TokenKind::Bracketed, TokenKind::Quoted]
        );
    }

    #[test]
    fn test_combined_log_line_yields_nine_tokens() {
        let line = r#"10.99.99.186 - - [01/Jan/2020:00:00:00 +0000] "GET /x HTTP/1.1" 200 - "-" "curl/7.0""#;
        let tokens = tokenize(line);
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[7], Token::new("-", TokenKind::Quoted));
        assert_eq!(tokens[8], Token::new("curl/7.0", TokenKind::Quoted));
    }

    #[test]
    fn test_empty_quoted_segment_is_a_token() {
        assert_eq!(texts(r#"a "" b"#), vec!["a", "", "b"]);
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_bare_tokens() {
        assert_eq!(texts(r#""GET / HTTP"#), vec![r#""GET"#, "/", "HTTP"]);
    }

    #[test]
    fn test_empty_and_blank_lines_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t  ").is_empty());
    }

    #[test]
    fn test_tab_separated_fields() {
        assert_eq!(texts("a\tb\t[c d]"), vec!["a", "b", "c d"]);
    }
}
