//! TL001: a file ends with exactly one line terminator
//!
//! The terminator style is the one detected for the whole file. Empty files
//! are left alone.

use crate::core::model::Issue;
use crate::rules::line_endings::LineEnding;
use crate::rules::Rule;

pub const ID: &str = "TL001";
pub const MESSAGE_NO_END: &str = "file must end with exactly one newline";
pub const MESSAGE_MULTI: &str = "file must end with exactly one newline (multiple newlines at end)";

pub struct TrailingNewline;

/// Number of back-to-back `ending` sequences at the end of `content`
fn trailing_count(content: &[u8], ending: LineEnding) -> usize {
    let term = ending.as_bytes();
    let mut rest = content;
    let mut count = 0;
    while let Some(stripped) = rest.strip_suffix(term) {
        rest = stripped;
        count += 1;
    }
    count
}

impl Rule for TrailingNewline {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, file: &str, content: &[u8]) -> Vec<Issue> {
        if content.is_empty() {
            return Vec::new();
        }

        let message = match trailing_count(content, LineEnding::detect(content)) {
            0 => MESSAGE_NO_END,
            1 => return Vec::new(),
            _ => MESSAGE_MULTI,
        };
        vec![Issue::new(file, 1, 1, ID, message)]
    }

    fn fix(&self, content: &[u8]) -> Vec<u8> {
        if content.is_empty() {
            return Vec::new();
        }

        let ending = LineEnding::detect(content);
        let term = ending.as_bytes();
        let keep = content.len() - trailing_count(content, ending) * term.len();

        let mut out = Vec::with_capacity(keep + term.len());
        out.extend_from_slice(&content[..keep]);
        out.extend_from_slice(term);
        out
    }
}
