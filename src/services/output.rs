//! Result rendering for stdout: a `{"ok": true, "data": ...}` envelope in
//! `--json` mode, caller-built text otherwise.

use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

/// Renders `data` as the JSON envelope or as the text `text` builds.
pub fn render<T: Serialize>(
    json: bool,
    data: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<String> {
    if !json {
        return Ok(text(data));
    }
    let mut out = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
    out.push('\n');
    Ok(out)
}

/// Writes one rendered result to stdout.
pub fn emit<T: Serialize>(
    json: bool,
    data: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    let rendered = render(json, data, text)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Writes a list: a JSON array, or one text line per row.
pub fn emit_rows<T: Serialize>(
    json: bool,
    rows: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    emit(json, &rows, |rows| {
        rows.iter().map(|r| format!("{}\n", row(r))).collect()
    })
}
