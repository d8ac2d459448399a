//! Shared foundation for the Glint compiler crates.
//!
//! `glintc-util` provides the pieces every compiler phase needs and none
//! of them owns on its own: source location tracking ([`span`]), string
//! interning ([`symbol`]), and the severity/color vocabulary that the
//! semantic analyzer's own diagnostic registry builds on
//! ([`diagnostic`]).
//!
//! This crate intentionally knows nothing about the Glint language itself,
//! no AST, no types, no checker. Those live in `glintc-ast` and
//! `glintc-sem`.

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
