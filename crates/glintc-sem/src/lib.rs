//! Semantic analysis: type system, symbol table, diagnostics, built-in
//! registry, and the AST checker that drives them.
//!
//! [`check_program`] is the crate's single entry point: run it over a
//! parsed [`glintc_ast::Ast`] and it returns a populated symbol table on
//! success, or `None` once the reporter has recorded an error.

pub mod builtins;
pub mod checker;
pub mod diagnostics;
pub mod symtab;
pub mod types;

pub use checker::check_program;
pub use diagnostics::Reporter;
pub use symtab::SymbolTable;
