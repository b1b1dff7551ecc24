//! Synthetic report generation for exercising the validator.
//!
//! Every construction is a best-effort heuristic: in [`GenerationMode::Heuristic`]
//! a "safe" report may come out unsafe (the out-of-range correction reverses
//! direction) and an "unsafe" one may come out safe (mixed directions can
//! happen to stay monotonic). [`GenerationMode::Verified`] post-checks each
//! report against the validator and regenerates on mismatch.

use crate::domain::constants::{
    MAX_LEVEL, MAX_REPORT_LENGTH, MAX_STEP, MAX_VERIFY_ATTEMPTS, MIN_LEVEL, MIN_REPORT_LENGTH,
    MIN_STEP,
};
use crate::domain::models::{Level, Report, ReportCollection};
use crate::services::validator::is_safe;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MIN_STEP_LEVEL: Level = MIN_STEP as Level;
const MAX_STEP_LEVEL: Level = MAX_STEP as Level;
const MAX_CORRECTION_STEP: Level = 2;
const MAX_LARGE_STEP: Level = 10;
const MAX_MIXED_OVERSIZED_STEP: Level = 8;
const DIRECTION_FLIP_PROBABILITY: f64 = 0.3;
const REPEAT_PROBABILITY: f64 = 0.4;
const OVERSIZED_PROBABILITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    Heuristic,
    Verified,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Heuristic => "heuristic",
            GenerationMode::Verified => "verified",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no {wanted} report produced after {attempts} attempts")]
    VerificationExhausted { wanted: &'static str, attempts: usize },
}

/// The four ways an unsafe report is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationStrategy {
    LargeDifference,
    ZeroDifference,
    MixedDirection,
    MultipleViolations,
}

impl ViolationStrategy {
    pub const ALL: [ViolationStrategy; 4] = [
        ViolationStrategy::LargeDifference,
        ViolationStrategy::ZeroDifference,
        ViolationStrategy::MixedDirection,
        ViolationStrategy::MultipleViolations,
    ];
}

#[derive(Debug)]
pub struct ReportGenerator<R: Rng> {
    rng: R,
    mode: GenerationMode,
}

impl ReportGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ReportGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            mode: GenerationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: GenerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Produces `count` reports, each safe with probability `safe_probability`.
    ///
    /// `safe_probability` must lie in `[0, 1]`; callers validate it first.
    pub fn reports(
        &mut self,
        count: usize,
        safe_probability: f64,
    ) -> Result<ReportCollection, GenerateError> {
        let out = (0..count)
            .map(|_| {
                if self.rng.random_bool(safe_probability) {
                    self.safe_report()
                } else {
                    self.unsafe_report()
                }
            })
            .collect::<Result<ReportCollection, _>>()?;
        tracing::debug!(count, safe_probability, mode = self.mode.as_str(), "reports generated");
        Ok(out)
    }

    pub fn safe_report(&mut self) -> Result<Report, GenerateError> {
        match self.mode {
            GenerationMode::Heuristic => Ok(self.heuristic_safe_report()),
            GenerationMode::Verified => {
                self.verified("safe", true, |g| g.heuristic_safe_report())
            }
        }
    }

    pub fn unsafe_report(&mut self) -> Result<Report, GenerateError> {
        match self.mode {
            GenerationMode::Heuristic => Ok(self.heuristic_unsafe_report()),
            GenerationMode::Verified => {
                self.verified("unsafe", false, |g| g.heuristic_unsafe_report())
            }
        }
    }

    fn verified(
        &mut self,
        wanted: &'static str,
        safe: bool,
        mut build: impl FnMut(&mut Self) -> Report,
    ) -> Result<Report, GenerateError> {
        for attempt in 1..=MAX_VERIFY_ATTEMPTS {
            let report = build(&mut *self);
            if is_safe(&report) == safe {
                if attempt > 1 {
                    tracing::trace!(wanted, attempt, "regenerated report to match verdict");
                }
                return Ok(report);
            }
        }
        Err(GenerateError::VerificationExhausted {
            wanted,
            attempts: MAX_VERIFY_ATTEMPTS,
        })
    }

    fn report_length(&mut self) -> usize {
        self.rng.random_range(MIN_REPORT_LENGTH..=MAX_REPORT_LENGTH)
    }

    fn step(&mut self) -> Level {
        self.rng.random_range(MIN_STEP_LEVEL..=MAX_STEP_LEVEL)
    }

    fn signed(&mut self, magnitude: Level) -> Level {
        if self.rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    fn heuristic_safe_report(&mut self) -> Report {
        let length = self.report_length();
        let increasing = self.rng.random_bool(0.5);
        let mut current = self.rng.random_range(MIN_LEVEL..=MAX_LEVEL);
        let mut report = Vec::with_capacity(length);
        report.push(current);

        for _ in 1..length {
            let diff = self.step();
            current += if increasing { diff } else { -diff };
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&current) {
                // Step back from the previous level instead of leaving the range.
                let smaller = self
                    .rng
                    .random_range(MIN_STEP_LEVEL..=MAX_STEP_LEVEL.min(MAX_CORRECTION_STEP));
                let previous = report[report.len() - 1];
                current = previous + if increasing { -smaller } else { smaller };
            }
            report.push(current);
        }
        report
    }

    fn heuristic_unsafe_report(&mut self) -> Report {
        let length = self.report_length();
        let pick = self.rng.random_range(0..ViolationStrategy::ALL.len());
        let strategy = ViolationStrategy::ALL[pick];
        self.build_with(strategy, length)
    }

    fn build_with(&mut self, strategy: ViolationStrategy, length: usize) -> Report {
        match strategy {
            ViolationStrategy::LargeDifference => self.large_difference(length),
            ViolationStrategy::ZeroDifference => self.zero_difference(length),
            ViolationStrategy::MixedDirection => self.mixed_direction(length),
            ViolationStrategy::MultipleViolations => self.multiple_violations(length),
        }
    }

    fn large_difference(&mut self, length: usize) -> Report {
        let mut current = self.rng.random_range(MIN_LEVEL..=90);
        let mut report = vec![current];
        for i in 1..length {
            current += if i == 1 {
                let ceiling = MAX_LARGE_STEP.min(MAX_LEVEL - current);
                self.rng.random_range(MAX_STEP_LEVEL + 1..=ceiling)
            } else {
                self.step()
            };
            report.push(current.min(MAX_LEVEL));
        }
        report
    }

    fn zero_difference(&mut self, length: usize) -> Report {
        let mut current = self.rng.random_range(MIN_LEVEL..=MAX_LEVEL);
        let mut report = vec![current];
        for i in 1..length {
            if i == length / 2 {
                current = report[i - 1];
                report.push(current);
            } else {
                let diff = self.step();
                current += self.signed(diff);
                report.push(current.clamp(MIN_LEVEL, MAX_LEVEL));
            }
        }
        report
    }

    fn mixed_direction(&mut self, length: usize) -> Report {
        let mut current = self.rng.random_range(11..=90);
        let mut report = vec![current];
        let mut increasing = true;
        for _ in 1..length {
            if self.rng.random_bool(DIRECTION_FLIP_PROBABILITY) {
                increasing = !increasing;
            }
            let diff = self.step();
            current += if increasing { diff } else { -diff };
            current = current.clamp(MIN_LEVEL, MAX_LEVEL);
            report.push(current);
        }
        report
    }

    fn multiple_violations(&mut self, length: usize) -> Report {
        let mut current = self.rng.random_range(MIN_LEVEL..=MAX_LEVEL);
        let mut report = vec![current];
        for _ in 1..length {
            if self.rng.random_bool(REPEAT_PROBABILITY) {
                report.push(current);
                continue;
            }
            let magnitude = if self.rng.random_bool(OVERSIZED_PROBABILITY) {
                self.rng.random_range(MAX_STEP_LEVEL + 1..=MAX_MIXED_OVERSIZED_STEP)
            } else {
                self.step()
            };
            current += self.signed(magnitude);
            report.push(current.clamp(MIN_LEVEL, MAX_LEVEL));
        }
        report
    }
}

/// Renders reports one per line, levels separated by single spaces, with no
/// trailing newline.
pub fn format_reports(reports: &[Report]) -> String {
    reports
        .iter()
        .map(|r| {
            r.iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
