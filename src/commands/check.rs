use crate::domain::models::{CheckSummary, ReportDetail, SourcedReport, Timing};
use crate::services::output::{emit, emit_rows};
use crate::services::parser::{parse_reports, ParseMode};
use crate::services::storage::{list_input_files, read_input};
use crate::services::validator::{check_and_report, evaluate};
use std::path::Path;
use std::time::{Duration, Instant};

pub fn handle_check(
    json: bool,
    inputs_dir: &Path,
    name: &str,
    details: bool,
    lenient: bool,
) -> anyhow::Result<()> {
    let mode = if lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };

    let parse_start = Instant::now();
    let text = read_input(inputs_dir, name)?;
    let parsed = parse_reports(&text, mode)?;
    let parse_time = parse_start.elapsed();

    let process_start = Instant::now();
    let mut counts = Vec::new();
    let safe = check_and_report(&parsed.reports, Some(name), &mut counts)?;
    let reports = if details {
        parsed.reports.iter().map(detail).collect()
    } else {
        Vec::new()
    };
    let process_time = process_start.elapsed();

    let summary = CheckSummary {
        file: name.to_string(),
        loaded: parsed.reports.len(),
        safe,
        unsafe_count: parsed.reports.len() - safe,
        skipped: parsed.skipped,
        timing: Timing {
            parse_ms: millis(parse_time),
            process_ms: millis(process_time),
            total_ms: millis(parse_time + process_time),
        },
        reports,
    };
    tracing::info!(
        file = name,
        loaded = summary.loaded,
        safe = summary.safe,
        skipped = summary.skipped,
        "check complete"
    );

    emit(json, &summary, |s| {
        let mut out = format!("Processing {}\n\n", s.file);
        out.push_str(&String::from_utf8_lossy(&counts));
        if s.skipped > 0 {
            out.push_str(&format!("Skipped {} malformed lines\n", s.skipped));
        }
        for r in &s.reports {
            match &r.reason {
                Some(reason) => out.push_str(&format!("line {}: unsafe ({})\n", r.line, reason)),
                None => out.push_str(&format!("line {}: safe\n", r.line)),
            }
        }
        out.push_str(&format!(
            "Timing: Parse {}ms | Process {}ms | Total {}ms\n",
            s.timing.parse_ms, s.timing.process_ms, s.timing.total_ms
        ));
        out
    })
}

pub fn handle_files(json: bool, inputs_dir: &Path) -> anyhow::Result<()> {
    let files = list_input_files(inputs_dir)?;
    emit_rows(json, &files, |f| f.name.clone())
}

fn detail(report: &SourcedReport) -> ReportDetail {
    let verdict = evaluate(&report.levels);
    ReportDetail {
        line: report.line,
        levels: report.levels.clone(),
        safe: verdict.is_ok(),
        violation_index: verdict.as_ref().err().map(|v| v.index()),
        reason: verdict.err().map(|v| v.to_string()),
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
