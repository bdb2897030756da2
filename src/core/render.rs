//! Renderer module
//!
//! Renders an issue list to the supported report formats: compact, tap, json

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use crate::core::model::Issue;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Compact,
    Tap,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Compact => "compact",
            OutputFormat::Tap => "tap",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(OutputFormat::Compact),
            "tap" => Ok(OutputFormat::Tap),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unsupported format {:?} (use compact, tap, or json)",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    line: usize,
    column: usize,
    rule: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    issues: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    files_scanned: Option<usize>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: BTreeMap<&'a str, Vec<JsonIssue<'a>>>,
    summary: JsonSummary,
}

/// Renderer for issue lists
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render issues to a string.
    ///
    /// `files_scanned` is the number of files checked; when `None` the file
    /// count is derived from the distinct files in `issues`.
    pub fn render(&self, issues: &[Issue], files_scanned: Option<usize>) -> String {
        match self.format {
            OutputFormat::Compact => render_compact(issues, files_scanned),
            OutputFormat::Tap => render_tap(issues),
            OutputFormat::Json => render_json(issues, files_scanned),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write + ?Sized>(
        &self,
        issues: &[Issue],
        files_scanned: Option<usize>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *writer, &json_report(issues, files_scanned))?;
            return writer.write_all(b"\n");
        }
        let output = self.render(issues, files_scanned);
        writer.write_all(output.as_bytes())
    }
}

fn distinct_files(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.file.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

fn render_compact(issues: &[Issue], files_scanned: Option<usize>) -> String {
    let mut output = String::new();
    for i in issues {
        output.push_str(&format!(
            "{}:{}:{}: {}: {}\n",
            i.file, i.line, i.column, i.rule, i.message
        ));
    }
    match files_scanned {
        Some(n) => output.push_str(&format!(
            "{} file(s) scanned, {} issue(s).\n",
            n,
            issues.len()
        )),
        None => output.push_str(&format!(
            "{} file(s), {} issue(s).\n",
            distinct_files(issues),
            issues.len()
        )),
    }
    output
}

fn render_tap(issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "1..1\nok 1 - no issues\n".to_string();
    }

    let mut output = format!("1..{}\n", issues.len());
    for (n, i) in issues.iter().enumerate() {
        output.push_str(&format!(
            "not ok {} - {}:{}:{} {} {}\n",
            n + 1,
            i.file,
            i.line,
            i.column,
            i.rule,
            i.message
        ));
    }
    output
}

fn json_report(issues: &[Issue], files_scanned: Option<usize>) -> JsonReport<'_> {
    let mut files: BTreeMap<&str, Vec<JsonIssue<'_>>> = BTreeMap::new();
    for i in issues {
        files.entry(i.file.as_str()).or_default().push(JsonIssue {
            line: i.line,
            column: i.column,
            rule: i.rule,
            message: i.message,
        });
    }

    JsonReport {
        summary: JsonSummary {
            files: files.len(),
            issues: issues.len(),
            files_scanned,
        },
        files,
    }
}

fn render_json(issues: &[Issue], files_scanned: Option<usize>) -> String {
    let report = json_report(issues, files_scanned);
    let mut output = serde_json::to_string_pretty(&report)
        .unwrap_or_else(|_| json_fallback(&report.summary));
    output.push('\n');
    output
}

/// Summary-only report, still matching the regular layout
fn json_fallback(summary: &JsonSummary) -> String {
    let scanned = summary
        .files_scanned
        .map(|n| format!(", \"files_scanned\": {}", n))
        .unwrap_or_default();
    format!(
        "{{\"files\": {{}}, \"summary\": {{\"files\": {}, \"issues\": {}{}}}}}",
        summary.files, summary.issues, scanned
    )
}
