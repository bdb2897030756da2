//! Rule engine
//!
//! Each rule can check byte content for issues and produce fixed content.
//! Built-in rules:
//! - TL010: trailing spaces and tabs
//! - TL001: exactly one trailing newline

pub mod line_endings;
pub mod trailing_newline;
pub mod trailing_whitespace;

use tracing::trace;

use crate::core::model::Issue;

pub use trailing_newline::TrailingNewline;
pub use trailing_whitespace::TrailingWhitespace;

/// A formatting rule over raw file bytes
pub trait Rule {
    /// Stable identifier shown in reports
    fn id(&self) -> &'static str;

    /// Issues found in `content`; `file` is only used to label them
    fn check(&self, file: &str, content: &[u8]) -> Vec<Issue>;

    /// `content` with this rule's issues resolved
    fn fix(&self, content: &[u8]) -> Vec<u8>;
}

/// Upper bound on full rule passes in [`RuleSet::fix`]
const MAX_FIX_PASSES: usize = 4;

/// Ordered list of rules applied together
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// TL010 then TL001. Trailing whitespace goes first so the newline
    /// rule sees the final line content.
    pub fn builtin() -> Self {
        Self {
            rules: vec![Box::new(TrailingWhitespace), Box::new(TrailingNewline)],
        }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Issues from every rule, in rule order
    pub fn check(&self, file: &str, content: &[u8]) -> Vec<Issue> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(file, content))
            .collect()
    }

    /// Apply every rule in order, repeating until the output is stable.
    ///
    /// A single pass is enough for ordinary text. A line ending in a bare CR
    /// hides its trailing whitespace from TL010 until TL001 appends a
    /// terminator, which the second pass then cleans up.
    pub fn fix(&self, content: &[u8]) -> Vec<u8> {
        let mut current = content.to_vec();
        for pass in 1..=MAX_FIX_PASSES {
            let next = self
                .rules
                .iter()
                .fold(current.clone(), |acc, rule| rule.fix(&acc));
            if next == current {
                trace!(pass, "fix reached a fixed point");
                break;
            }
            current = next;
        }
        current
    }
}
