//! Parser for the output of `wmctrl -lx`.
//!
//! # Line format
//!
//! ```text
//! 0x03a00007  0 Navigator.firefox     myhost Inbox - Mozilla Firefox
//! 0x04200003 -1 plank.Plank           myhost plank
//! ```
//!
//! Fields, left to right: window id, desktop number, `WM_CLASS`, client
//! machine, title.  The first four are whitespace-delimited; the title is
//! everything after the single separator following the host, so leading
//! spaces inside a title are kept.
//!
//! Lines that don't fit this shape are skipped.  The desktop must be
//! unsigned digits, so sticky windows (desktop `-1`, as in the second line
//! above) are never indexed.

use crate::command::WindowRecord;
use log::debug;

/// Parse the full stdout of `wmctrl -lx`, keeping listing order.
pub fn parse_listing(output: &str) -> Vec<WindowRecord> {
    output
        .lines()
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() {
                debug!("skipping unparsable line: {:?}", line);
            }
            record
        })
        .collect()
}

/// Parse a single listing line.
///
/// The desktop number must be sandwiched between one or more whitespace
/// characters and exactly one; the title starts after exactly one
/// whitespace character following the host and must not be empty.
pub fn parse_line(line: &str) -> Option<WindowRecord> {
    let (id, rest) = token(line)?;
    let rest = spaces(rest)?;
    let (desktop, rest) = token(rest)?;
    let desktop = parse_desktop(desktop)?;
    let rest = one_space(rest)?;
    let (window_class, rest) = token(rest)?;
    let rest = spaces(rest)?;
    let (host, rest) = token(rest)?;
    let title = one_space(rest)?;
    if title.is_empty() {
        return None;
    }

    Some(WindowRecord {
        id: id.to_string(),
        desktop,
        window_class: window_class.to_string(),
        host: host.to_string(),
        title: title.to_string(),
    })
}

/// Split off a non-empty run of non-whitespace characters.
fn token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some(s.split_at(end))
    }
}

/// Skip one or more whitespace characters.
fn spaces(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    if trimmed.len() == s.len() {
        None
    } else {
        Some(trimmed)
    }
}

/// Skip exactly one whitespace character.
fn one_space(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    let c = chars.next()?;
    c.is_whitespace().then(|| chars.as_str())
}

/// Accept an unsigned run of ASCII digits.
fn parse_desktop(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_line() {
        let r = parse_line("0x03a00007  0 Navigator.firefox     myhost Inbox - Mozilla Firefox")
            .unwrap();
        assert_eq!(r.id, "0x03a00007");
        assert_eq!(r.desktop, 0);
        assert_eq!(r.window_class, "Navigator.firefox");
        assert_eq!(r.host, "myhost");
        assert_eq!(r.title, "Inbox - Mozilla Firefox");
    }

    #[test]
    fn parses_quoted_title() {
        let r = parse_line(r#"0x00123 0 Slack host "Messages - general""#).unwrap();
        assert_eq!(r.id, "0x00123");
        assert_eq!(r.window_class, "Slack");
        assert_eq!(r.title, r#""Messages - general""#);
    }

    #[test]
    fn sticky_window_is_skipped() {
        assert!(parse_line("0x04200003 -1 plank.Plank           myhost plank").is_none());
        assert!(parse_line("0x04200003 +1 plank.Plank           myhost plank").is_none());
    }

    #[test]
    fn sticky_window_cannot_claim_an_alias() {
        let out = "\
0x04200003 -1 term.Term host Editor sticky
0x05 0 term.Term host Editor real
";
        let records = parse_listing(out);
        assert_eq!(records.len(), 1);

        let mut config = crate::config::AppConfig::default();
        config
            .window_title_substrings
            .insert("ed".into(), vec!["Editor".into()]);
        let resolved = crate::index::resolve_aliases(&config, &records);
        assert_eq!(resolved.get("ed").map(String::as_str), Some("0x05"));
    }

    #[test]
    fn title_keeps_leading_whitespace() {
        let r = parse_line("0x1 2 term.Term host   padded title").unwrap();
        assert_eq!(r.title, "  padded title");
    }

    #[test]
    fn rejects_malformed_lines() {
        // no title
        assert!(parse_line("0x1 0 class host").is_none());
        assert!(parse_line("0x1 0 class host ").is_none());
        // desktop is not numeric
        assert!(parse_line("0x1 x class host title").is_none());
        assert!(parse_line("0x1 0a class host title").is_none());
        // two separators between desktop and class
        assert!(parse_line("0x1 0  class host title").is_none());
        // leading whitespace before the id
        assert!(parse_line(" 0x1 0 class host title").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn listing_skips_bad_lines_and_keeps_order() {
        let out = "\
0x01 0 a.A host first window
garbage
0x02 1 b.B host second window
";
        let records = parse_listing(out);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0x01", "0x02"]);
    }
}
