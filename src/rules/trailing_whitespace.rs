//! TL010: no trailing spaces or tabs at the end of a line

use crate::core::model::Issue;
use crate::rules::line_endings::{split_lines, strip_line_ending};
use crate::rules::Rule;

pub const ID: &str = "TL010";
pub const MESSAGE: &str = "no trailing spaces at end of line";

pub struct TrailingWhitespace;

/// Length of `line` once trailing spaces and tabs are removed
fn trimmed_len(line: &[u8]) -> usize {
    line.iter()
        .rposition(|&b| b != b' ' && b != b'\t')
        .map_or(0, |i| i + 1)
}

impl Rule for TrailingWhitespace {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, file: &str, content: &[u8]) -> Vec<Issue> {
        split_lines(content)
            .enumerate()
            .filter_map(|(n, raw)| {
                let (line, _) = strip_line_ending(raw);
                let keep = trimmed_len(line);
                (keep < line.len()).then(|| Issue::new(file, n + 1, keep + 1, ID, MESSAGE))
            })
            .collect()
    }

    fn fix(&self, content: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(content.len());
        for raw in split_lines(content) {
            let (line, ending) = strip_line_ending(raw);
            out.extend_from_slice(&line[..trimmed_len(line)]);
            out.extend_from_slice(ending);
        }
        out
    }
}
