//! PSL Parser
//!
//! Splits a list into the rule lines that are subject to linting.
//! Blank lines and `//` comments are skipped; everything else is kept
//! verbatim together with its physical line number.

pub mod rule;

pub use rule::{Rule, RuleKind};

use std::iter::Enumerate;
use std::str::Lines;

/// A rule line with its 1-based physical line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLine<'a> {
    pub number: usize,
    /// Line text exactly as it appears in the source
    pub text: &'a str,
}

/// Lazy iterator over the rule lines of a source.
///
/// Cloning yields an independent iterator at the same position, so a
/// sequence can be restarted by cloning it before consuming.
#[derive(Debug, Clone)]
pub struct RuleLines<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Iterator for RuleLines<'a> {
    type Item = RuleLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .find(|(_, text)| is_rule_line(text))
            .map(|(idx, text)| RuleLine {
                number: idx + 1,
                text,
            })
    }
}

/// Iterate over the rule lines of `source`
pub fn rule_lines(source: &str) -> RuleLines<'_> {
    RuleLines {
        lines: source.lines().enumerate(),
    }
}

/// Whether a line carries a rule rather than being blank or a comment
pub fn is_rule_line(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && !trimmed.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let source = "\n// aw : http://en.wikipedia.org/wiki/.aw\naw\n   \ncom.aw\n";
        let lines: Vec<_> = rule_lines(source).collect();

        assert_eq!(
            lines,
            vec![
                RuleLine {
                    number: 3,
                    text: "aw"
                },
                RuleLine {
                    number: 5,
                    text: "com.aw"
                },
            ]
        );
    }

    #[test]
    fn test_keeps_surrounding_whitespace() {
        let lines: Vec<_> = rule_lines("aw\n com.aw \n").collect();
        assert_eq!(lines[1].text, " com.aw ");
        assert_eq!(lines[1].number, 2);
    }

    #[test]
    fn test_indented_comment_is_skipped() {
        let lines: Vec<_> = rule_lines("   // indented comment\naw").collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines: Vec<_> = rule_lines("aw\r\n\r\ncom.aw\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "aw");
        assert_eq!(lines[1].number, 3);
        assert_eq!(lines[1].text, "com.aw");
    }

    #[test]
    fn test_restart_by_clone() {
        let lines = rule_lines("aw\n// c\ncom.aw");
        let first: Vec<_> = lines.clone().collect();
        let second: Vec<_> = lines.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(rule_lines("").count(), 0);
    }

    #[test]
    fn test_is_rule_line() {
        assert!(is_rule_line("aw"));
        assert!(is_rule_line(" *.ck"));
        assert!(is_rule_line("!www.ck"));
        assert!(!is_rule_line(""));
        assert!(!is_rule_line("\t "));
        assert!(!is_rule_line("// comment"));
    }
}
