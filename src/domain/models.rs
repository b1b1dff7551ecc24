use serde::Serialize;
use std::fmt;

/// One reading inside a report.
pub type Level = i64;
/// An ordered sequence of levels, one per input line.
pub type Report = Vec<Level>;
pub type ReportCollection = Vec<Report>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Increasing => "increasing",
            Direction::Decreasing => "decreasing",
        })
    }
}

/// First rule breach found while scanning a report. `index` points at the
/// left element of the offending pair.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("step {from} -> {to} at index {index} is outside the allowed range")]
    StepOutOfRange { index: usize, from: Level, to: Level },
    #[error("step {from} -> {to} at index {index} reverses the {expected} direction")]
    DirectionChange {
        index: usize,
        from: Level,
        to: Level,
        expected: Direction,
    },
}

impl Violation {
    pub fn index(&self) -> usize {
        match self {
            Violation::StepOutOfRange { index, .. } | Violation::DirectionChange { index, .. } => {
                *index
            }
        }
    }
}

/// A parsed report together with the 1-based input line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedReport {
    pub line: usize,
    pub levels: Report,
}

impl AsRef<[Level]> for SourcedReport {
    fn as_ref(&self) -> &[Level] {
        &self.levels
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub reports: Vec<SourcedReport>,
    /// Lines dropped in lenient mode because a token was not an integer.
    pub skipped: usize,
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub parse_ms: u64,
    pub process_ms: u64,
    pub total_ms: u64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ReportDetail {
    pub line: usize,
    pub levels: Report,
    pub safe: bool,
    /// Index of the left level of the first offending pair.
    pub violation_index: Option<usize>,
    pub reason: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CheckSummary {
    pub file: String,
    pub loaded: usize,
    pub safe: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
    pub skipped: usize,
    pub timing: Timing,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<ReportDetail>,
}

#[derive(Serialize, Debug, Clone)]
pub struct GenerateSummary {
    pub file: String,
    pub path: String,
    pub count: usize,
    pub safe_probability: f64,
    pub mode: String,
    pub seed: Option<u64>,
    pub safe: usize,
    #[serde(rename = "unsafe")]
    pub unsafe_count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub name: String,
    pub size_bytes: u64,
}
