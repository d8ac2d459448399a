//! Generic diagnostic primitives shared by every compiler phase.
//!
//! This module holds only the ambient pieces: severity levels and color
//! policy. The domain-specific diagnostic registry (codes, messages, the
//! `Reporter` that counts and renders them) belongs to the semantic
//! analyzer and lives in `glintc-sem::diagnostics`, since it is part of
//! the analyzer's own contract rather than shared infrastructure.

mod level;

pub use level::{ColorConfig, LabelStyle, Level};
