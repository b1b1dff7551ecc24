use crate::domain::models::{Level, ParsedInput, SourcedReport};
use crate::error::AppError;

/// How a token that is not an integer is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fail the whole read.
    #[default]
    Strict,
    /// Drop the offending line and keep going.
    Lenient,
}

/// Parses whitespace-separated integer levels, one report per non-blank line.
pub fn parse_reports(text: &str, mode: ParseMode) -> Result<ParsedInput, AppError> {
    let mut parsed = ParsedInput::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_line(trimmed) {
            Ok(levels) => parsed.reports.push(SourcedReport { line, levels }),
            Err(token) => match mode {
                ParseMode::Strict => {
                    return Err(AppError::MalformedNumeric {
                        line,
                        token: token.to_string(),
                    });
                }
                ParseMode::Lenient => {
                    tracing::warn!(line, token, "skipping line with non-integer level");
                    parsed.skipped += 1;
                }
            },
        }
    }
    Ok(parsed)
}

fn parse_line(line: &str) -> Result<Vec<Level>, &str> {
    line.split_whitespace()
        .map(|tok| tok.parse::<Level>().map_err(|_| tok))
        .collect()
}
