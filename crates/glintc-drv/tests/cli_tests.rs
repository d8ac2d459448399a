//! End-to-end CLI tests: build a fixture in-process, write it to a
//! temp file, and drive the `glintc` binary through `assert_cmd`.

use assert_cmd::Command;
use glintc_ast::builder::NodeBuilder;
use glintc_ast::{Ast, NodeKind};
use glintc_util::span::Span;
use predicates::prelude::*;
use serde::Serialize;
use tempfile::TempDir;

#[derive(Serialize)]
struct Fixture {
    source: String,
    ast: Ast,
}

fn write_fixture(dir: &TempDir, name: &str, source: &str, ast: Ast) -> std::path::PathBuf {
    let fixture = Fixture { source: source.to_string(), ast };
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string(&fixture).unwrap()).unwrap();
    path
}

fn name_span(source: &str, name: &str) -> Span {
    let start = source.find(name).unwrap();
    Span::new(start, start + name.len(), 1, (start + 1) as u32)
}

/// A harmless non-dummy span for nodes the tests don't assert locations
/// on. Real fixtures always carry accurate spans; `filler_span()` (line 0)
/// is not something a parser ever emits, so the renderer isn't expected
/// to handle it.
fn filler_span() -> Span {
    Span::new(0, 1, 1, 1)
}

fn glintc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_glintc"))
}

#[test]
fn clean_program_exits_zero() {
    let source = "int x = 1;";
    let mut b = NodeBuilder::new();
    let lit = b.node(NodeKind::IntLit, filler_span(), vec![]);
    let decl = b.node(
        NodeKind::IntVariableDefinition { name_span: name_span(source, "x") },
        filler_span(),
        vec![lit],
    );
    let program = b.node(NodeKind::Program, filler_span(), vec![decl]);
    let ast = b.finish(program);

    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ok.json", source, ast);

    glintc().arg(&path).assert().success();
}

#[test]
fn type_mismatch_exits_one_and_prints_diagnostic() {
    let source = "int x = \"hi\";";
    let mut b = NodeBuilder::new();
    let lit = b.node(NodeKind::StringLit, filler_span(), vec![]);
    let decl = b.node(
        NodeKind::IntVariableDefinition { name_span: name_span(source, "x") },
        filler_span(),
        vec![lit],
    );
    let program = b.node(NodeKind::Program, filler_span(), vec![decl]);
    let ast = b.finish(program);

    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bad.json", source, ast);

    glintc()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("E1007"));
}

#[test]
fn emit_symbols_prints_declared_variable() {
    let source = "int x = 1;";
    let mut b = NodeBuilder::new();
    let lit = b.node(NodeKind::IntLit, filler_span(), vec![]);
    let decl = b.node(
        NodeKind::IntVariableDefinition { name_span: name_span(source, "x") },
        filler_span(),
        vec![lit],
    );
    let program = b.node(NodeKind::Program, filler_span(), vec![decl]);
    let ast = b.finish(program);

    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "ok.json", source, ast);

    glintc()
        .arg(&path)
        .arg("--emit-symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"x\""));
}

#[test]
fn missing_fixture_file_fails() {
    glintc().arg("/nonexistent/path/does-not-exist.json").assert().failure();
}

#[test]
fn help_flag_succeeds() {
    glintc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("glintc"));
}
