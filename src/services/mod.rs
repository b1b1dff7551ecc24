//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `validator.rs` — the bounded-monotonic-step rule and safe counting.
//! - `generator.rs` — seeded synthetic report generation.
//! - `parser.rs` — text to reports, strict or lenient.
//! - `storage.rs` — inputs directory listing, reads and writes.
//! - `settings.rs` — optional TOML config.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Validator and generator are pure over their inputs (the generator's
//!   randomness is injected).
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod generator;
pub mod output;
pub mod parser;
pub mod settings;
pub mod storage;
pub mod validator;
