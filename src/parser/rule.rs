//! Rule Syntax
//!
//! Minimal view of a single PSL rule line.
//! No validation logic - pure data representation.

/// Kind of a PSL rule, decided by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A plain suffix like "com.aw"
    Normal,
    /// A wildcard rule like "*.ck"
    Wildcard,
    /// An exception rule like "!www.ck"
    Exception,
}

/// A rule line split into its kind and bare suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a> {
    pub kind: RuleKind,
    /// Suffix without the `!` or `*.` prefix
    pub suffix: &'a str,
}

impl<'a> Rule<'a> {
    /// Parse a rule from line text.
    ///
    /// Surrounding whitespace is ignored. A `!` prefix marks an exception and
    /// takes priority over a following `*.`, matching how the list treats
    /// exceptions to wildcards.
    pub fn parse(text: &'a str) -> Self {
        let text = text.trim();

        if let Some(rest) = text.strip_prefix('!') {
            Rule {
                kind: RuleKind::Exception,
                suffix: rest.strip_prefix("*.").unwrap_or(rest),
            }
        } else if let Some(rest) = text.strip_prefix("*.") {
            Rule {
                kind: RuleKind::Wildcard,
                suffix: rest,
            }
        } else {
            Rule {
                kind: RuleKind::Normal,
                suffix: text,
            }
        }
    }

    /// Labels of the suffix, left to right
    pub fn labels(&self) -> impl Iterator<Item = &'a str> {
        self.suffix.split('.')
    }
}
