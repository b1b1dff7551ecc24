//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — reports, violations, JSON output structs.
//! - `constants.rs` — validation bounds and CLI defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Changes in the output structs affect `--json` outputs.
//! Keep schema-impacting changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
