/// Smallest allowed magnitude of a step between consecutive levels.
pub const MIN_STEP: u64 = 1;
/// Largest allowed magnitude of a step between consecutive levels.
pub const MAX_STEP: u64 = 3;

pub const MIN_REPORT_LENGTH: usize = 3;
pub const MAX_REPORT_LENGTH: usize = 20;

/// Generated levels stay inside `[MIN_LEVEL, MAX_LEVEL]`.
pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 100;

pub const DEFAULT_INPUTS_DIR: &str = "inputs";
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
pub const DEFAULT_REPORT_COUNT: usize = 20;
/// Largest report count `generate` accepts.
pub const MAX_REPORT_COUNT: usize = 1_000_000;
pub const DEFAULT_SAFE_PROBABILITY: f64 = 0.5;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Upper bound on regeneration attempts in verified generation mode.
pub const MAX_VERIFY_ATTEMPTS: usize = 1000;
