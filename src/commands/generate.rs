use crate::domain::constants::MAX_REPORT_COUNT;
use crate::domain::models::GenerateSummary;
use crate::error::AppError;
use crate::services::generator::{format_reports, GenerationMode, ReportGenerator};
use crate::services::output::emit;
use crate::services::settings::GeneralSettings;
use crate::services::storage::write_reports;
use crate::services::validator::count_safe;
use std::path::Path;

const INVALID_COUNT: &str = "Please provide a valid positive number of reports to generate.";
const COUNT_TOO_LARGE: &str = "Report count must not exceed 1000000.";
const INVALID_PROBABILITY: &str = "Safe probability must be a number between 0 and 1.";

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub count: usize,
    pub file: String,
    pub safe_probability: f64,
}

/// Resolves `generate [COUNT] [FILE_OR_PROBABILITY] [PROBABILITY]`.
///
/// The second argument is a probability when it parses as a number in
/// `[0, 1]` and a file name otherwise. An explicit third argument wins.
pub fn resolve_request(
    count: Option<&str>,
    target: Option<&str>,
    probability: Option<&str>,
    settings: &GeneralSettings,
) -> Result<GenerateRequest, AppError> {
    let count = match count {
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => return Err(AppError::InvalidArgument(INVALID_COUNT.to_string())),
        },
        None => settings.default_count,
    };
    if count > MAX_REPORT_COUNT {
        return Err(AppError::InvalidArgument(COUNT_TOO_LARGE.to_string()));
    }

    let mut file = settings.default_input.clone();
    let mut safe_probability = settings.safe_probability;

    if let Some(raw) = target.filter(|t| !t.is_empty()) {
        match parse_probability(raw) {
            Some(p) => safe_probability = p,
            None => file = raw.to_string(),
        }
    }
    if let Some(raw) = probability.filter(|p| !p.is_empty()) {
        safe_probability = parse_probability(raw)
            .ok_or_else(|| AppError::InvalidArgument(INVALID_PROBABILITY.to_string()))?;
    }

    Ok(GenerateRequest {
        count,
        file,
        safe_probability,
    })
}

fn parse_probability(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=1.0).contains(p))
}

pub fn handle_generate(
    json: bool,
    inputs_dir: &Path,
    request: &GenerateRequest,
    seed: Option<u64>,
    verify: bool,
) -> anyhow::Result<()> {
    let mode = if verify {
        GenerationMode::Verified
    } else {
        GenerationMode::Heuristic
    };
    if !json {
        println!("Generating {} random reports...\n", request.count);
    }

    let mut generator = match seed {
        Some(seed) => ReportGenerator::seeded(seed),
        None => ReportGenerator::from_entropy(),
    }
    .with_mode(mode);
    let reports = generator.reports(request.count, request.safe_probability)?;
    let safe = count_safe(&reports);
    let path = write_reports(inputs_dir, &request.file, &format_reports(&reports))?;
    tracing::info!(
        file = %request.file,
        count = request.count,
        safe,
        mode = mode.as_str(),
        "generated reports"
    );

    let summary = GenerateSummary {
        file: request.file.clone(),
        path: path.to_string_lossy().to_string(),
        count: request.count,
        safe_probability: request.safe_probability,
        mode: mode.as_str().to_string(),
        seed,
        safe,
        unsafe_count: reports.len() - safe,
    };
    emit(json, &summary, |s| {
        format!(
            "Generated {} random reports and saved to {}\n",
            s.count, s.file
        )
    })
}
