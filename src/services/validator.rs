//! Bounded-monotonic-step rule for reports.
//!
//! A report is safe when every consecutive step has a magnitude in
//! `[MIN_STEP, MAX_STEP]` and all steps share the direction of the first one.
//! Reports with fewer than two levels are vacuously safe.

use crate::domain::constants::{MAX_STEP, MIN_STEP};
use crate::domain::models::{Direction, Level, Violation};
use std::io::{self, Write};

/// Scans `levels` and returns the direction of a safe report, `None` for a
/// report too short to have one, or the first violation found. Stops at the
/// first violation.
pub fn evaluate(levels: &[Level]) -> Result<Option<Direction>, Violation> {
    let mut direction = None;
    for (index, pair) in levels.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let magnitude = from.abs_diff(to);
        if !(MIN_STEP..=MAX_STEP).contains(&magnitude) {
            return Err(Violation::StepOutOfRange { index, from, to });
        }
        // magnitude >= 1 here, so from != to
        let step = if to > from {
            Direction::Increasing
        } else {
            Direction::Decreasing
        };
        match direction {
            None => direction = Some(step),
            Some(expected) if expected != step => {
                return Err(Violation::DirectionChange {
                    index,
                    from,
                    to,
                    expected,
                });
            }
            Some(_) => {}
        }
    }
    Ok(direction)
}

pub fn is_safe(levels: &[Level]) -> bool {
    evaluate(levels).is_ok()
}

pub fn count_safe<R: AsRef<[Level]>>(reports: &[R]) -> usize {
    reports.iter().filter(|r| is_safe(r.as_ref())).count()
}

/// Writes the loaded and safe counts to `sink` and returns the safe count.
pub fn check_and_report<R: AsRef<[Level]>>(
    reports: &[R],
    label: Option<&str>,
    mut sink: impl Write,
) -> io::Result<usize> {
    let origin = label.map(|l| format!(" from {l}")).unwrap_or_default();
    writeln!(sink, "Loaded {} reports{}", reports.len(), origin)?;
    let safe = count_safe(reports);
    writeln!(sink, "Answer: {safe} reports are safe")?;
    tracing::debug!(loaded = reports.len(), safe, "reports checked");
    Ok(safe)
}
