//! On-disk representation of a checker input.
//!
//! The lexer and parser are out-of-scope external collaborators (spec.md
//! §1); in their place, the driver reads a JSON fixture pairing the
//! source text a run's name-spans slice into with the [`Ast`] those
//! external collaborators would have produced.

use std::path::Path;

use glintc_ast::Ast;
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fixture {
    /// The source buffer every span in `ast` is an offset into.
    pub source: String,
    pub ast: Ast,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| DriverError::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&text).map_err(|e| DriverError::Fixture(path.to_path_buf(), e))
    }
}
