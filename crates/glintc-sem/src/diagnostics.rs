//! Diagnostic Registry & Reporter.
//!
//! The registry is a static catalog mapping each diagnostic code to its
//! severity, title, explanation, hint, and suggestion. The [`Reporter`]
//! formats a diagnostic against an optional source location and snippet,
//! and keeps running per-severity counts for [`Reporter::has_errors`] /
//! [`Reporter::has_fatal_errors`].
//!
//! Codes are grouped by thousands, per the language's convention:
//! 1xxx type mismatch, 2xxx variables/symbols, 3xxx syntax (produced by
//! the parser but registered here), 4xxx logic/control, 5xxx functions,
//! 6xxx internal/system.

use glintc_util::diagnostic::{ColorConfig, Level};
use glintc_util::span::{SourceMap, Span};

use crate::types::DataType;

/// An integer diagnostic code, e.g. `1007` for `STRING_TO_INT`.
pub type Code = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Header word rendered before the bracketed code (`error`/`warning`).
    /// Fatal diagnostics still read `error` in the header; the terminal
    /// "could not compile" line is what marks them as fatal.
    pub const fn word(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error | Severity::Fatal => "error",
        }
    }

    pub const fn as_level(&self) -> Level {
        match self {
            Severity::Warning => Level::Warning,
            Severity::Error | Severity::Fatal => Level::Error,
        }
    }
}

/// One registry entry: everything the reporter needs to render a code.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    pub code: Code,
    pub severity: Severity,
    pub title: &'static str,
    pub explanation: &'static str,
    pub hint: &'static str,
    pub suggestion: &'static str,
}

macro_rules! entry {
    ($code:expr, $sev:ident, $title:expr, $explanation:expr, $hint:expr, $suggestion:expr) => {
        Entry {
            code: $code,
            severity: Severity::$sev,
            title: $title,
            explanation: $explanation,
            hint: $hint,
            suggestion: $suggestion,
        }
    };
}

const UNKNOWN_ENTRY: Entry = entry!(
    0,
    Error,
    "unknown diagnostic code",
    "this code is not registered in the diagnostic catalog",
    "",
    ""
);

#[rustfmt::skip]
static REGISTRY: &[Entry] = &[
    // 1xxx - type mismatch
    entry!(TYPE_MISMATCH_FLOAT_TO_INT,    Error,   "type mismatch: float to int",    "an int-typed slot cannot hold a float value without an explicit cast", "add `as int` to truncate explicitly", "cast the value with `as int`"),
    entry!(TYPE_MISMATCH_DOUBLE_TO_FLOAT, Warning, "narrowing conversion: double to float", "assigning a double to a float may lose precision or overflow to infinity", "cast explicitly with `as float` to silence this warning", "use `as float` if the narrowing is intentional"),
    entry!(TYPE_MISMATCH_DOUBLE_TO_INT,   Error,   "type mismatch: double to int",   "an int-typed slot cannot hold a double value without an explicit cast", "add `as int` to truncate explicitly", "cast the value with `as int`"),
    entry!(TYPE_MISMATCH_BOOL_TO_INT,     Error,   "type mismatch: bool to int",     "bool and int are not implicitly convertible", "cast explicitly with `as int`", "use `as int` (true becomes 1, false becomes 0)"),
    entry!(TYPE_MISMATCH_BOOL_TO_FLOAT,   Error,   "type mismatch: bool to float",   "bool and float are not implicitly convertible", "cast explicitly with `as float`", "use `as float`"),
    entry!(TYPE_MISMATCH_BOOL_TO_DOUBLE,  Error,   "type mismatch: bool to double",  "bool and double are not implicitly convertible", "cast explicitly with `as double`", "use `as double`"),
    entry!(TYPE_MISMATCH_STRING_TO_INT,   Error,   "type mismatch: string to int",   "a string value cannot be used where an int is expected", "strings are never implicitly numeric", "use a numeric literal or parse the string at runtime"),
    entry!(TYPE_MISMATCH_STRING_TO_FLOAT, Error,   "type mismatch: string to float", "a string value cannot be used where a float is expected", "strings are never implicitly numeric", "use a numeric literal"),
    entry!(TYPE_MISMATCH_STRING_TO_DOUBLE,Error,   "type mismatch: string to double","a string value cannot be used where a double is expected", "strings are never implicitly numeric", "use a numeric literal"),
    entry!(TYPE_MISMATCH_STRING_TO_BOOL,  Error,   "type mismatch: string to bool",  "a string value cannot be used where a bool is expected", "strings are never implicitly boolean", "use `true` or `false`"),
    entry!(TYPE_MISMATCH_INT_TO_BOOL,     Error,   "type mismatch: int to bool",     "int and bool are not implicitly convertible", "cast explicitly with `as bool`", "use `as bool` (nonzero becomes true)"),
    entry!(TYPE_MISMATCH_FLOAT_TO_BOOL,   Error,   "type mismatch: float to bool",   "float and bool are not implicitly convertible", "cast explicitly with `as bool`", "use `as bool`"),
    entry!(TYPE_MISMATCH_DOUBLE_TO_BOOL,  Error,   "type mismatch: double to bool",  "double and bool are not implicitly convertible", "cast explicitly with `as bool`", "use `as bool`"),
    entry!(TYPE_MISMATCH_INT_TO_STRING,   Error,   "type mismatch: int to string",   "int and string are not implicitly convertible", "there is no implicit numeric-to-string conversion", "format the value explicitly"),
    entry!(TYPE_MISMATCH_FLOAT_TO_STRING, Error,   "type mismatch: float to string", "float and string are not implicitly convertible", "there is no implicit numeric-to-string conversion", "format the value explicitly"),
    entry!(TYPE_MISMATCH_DOUBLE_TO_STRING,Error,   "type mismatch: double to string","double and string are not implicitly convertible", "there is no implicit numeric-to-string conversion", "format the value explicitly"),
    entry!(TYPE_MISMATCH_BOOL_TO_STRING,  Error,   "type mismatch: bool to string",  "bool and string are not implicitly convertible", "there is no implicit bool-to-string conversion", "format the value explicitly"),
    entry!(INCOMPATIBLE_BINARY_OPERANDS,  Error,   "incompatible operand types",     "this pair of operand types has no defined conversion", "", ""),

    // 2xxx - variables/symbols
    entry!(VARIABLE_REDECLARED,        Error,   "name already declared in this scope", "a symbol with this name already exists in the current scope", "rename one of the declarations, or remove the duplicate", ""),
    entry!(UNDEFINED_VARIABLE,         Error,   "undefined name",                      "no symbol with this name is visible from the current scope", "check for a typo or a missing declaration", ""),
    entry!(VARIABLE_NOT_INITIALIZED,   Warning, "use of possibly uninitialized variable", "this variable was declared without an initializer and has not been assigned yet", "give it an initial value at declaration", ""),

    // 3xxx - syntax (produced by the parser, registered here for catalog completeness)
    entry!(SYNTAX_ERROR, Error, "syntax error", "the parser could not make sense of this input", "", ""),

    // 4xxx - logic/control
    entry!(INVALID_ASSIGNMENT_TARGET, Error, "invalid assignment target", "only variables and struct fields can appear on the left of an assignment", "assign to a variable or a `.field` access instead", ""),
    entry!(INVALID_EXPRESSION,        Error, "return statement outside of a function", "a `return` can only appear inside a function body", "remove the return, or move this code into a function", ""),
    entry!(UNEXPECTED_RETURN_VALUE,   Error, "unexpected return value", "this function returns void and cannot return a value", "remove the value, or give the function a return type", ""),
    entry!(MISSING_RETURN_VALUE,      Error, "missing return value", "this function has a non-void return type but returns nothing here", "return a value of the declared return type", ""),
    entry!(RETURN_TYPE_MISMATCH,      Error, "return type mismatch", "the returned value's type is not compatible with the function's declared return type", "return a value of the declared type, or change the declared return type", ""),
    entry!(INVALID_CAST_TARGET,       Error, "invalid cast target", "the right-hand side of `as` must name a recognized type", "", ""),
    entry!(FORBIDDEN_CAST,            Error, "forbidden cast",      "there is no legal conversion between these two types", "", ""),
    entry!(CAST_PRECISION_LOSS,       Warning, "cast may lose precision", "this cast narrows the value's representable range or precision", "", ""),

    // 5xxx - functions
    entry!(UNDEFINED_FUNCTION,             Error, "undefined function", "no function with this name is visible from the current scope", "check for a typo or a missing definition", ""),
    entry!(CALLING_NON_FUNCTION,            Error, "called name is not a function", "this name resolves to a symbol that is not callable", "", ""),
    entry!(FUNCTION_ARG_COUNT_MISMATCH,     Error, "wrong number of arguments", "this call does not supply the number of arguments the function declares", "", ""),
    entry!(NO_MATCHING_OVERLOAD,            Error, "no matching overload", "none of the built-in overloads for this name accept the given argument types", "", ""),

    // 6xxx - internal/system
    entry!(INTERNAL_COMPILER_ERROR, Fatal, "internal compiler error", "the analyzer reached a state it does not know how to handle", "please report this as a bug", ""),
];

macro_rules! codes {
    ($($name:ident = $value:expr;)*) => {
        $(pub const $name: Code = $value;)*
    };
}

codes! {
    TYPE_MISMATCH_FLOAT_TO_INT = 1001;
    TYPE_MISMATCH_DOUBLE_TO_FLOAT = 1002;
    TYPE_MISMATCH_DOUBLE_TO_INT = 1003;
    TYPE_MISMATCH_BOOL_TO_INT = 1004;
    TYPE_MISMATCH_BOOL_TO_FLOAT = 1005;
    TYPE_MISMATCH_BOOL_TO_DOUBLE = 1006;
    TYPE_MISMATCH_STRING_TO_INT = 1007;
    TYPE_MISMATCH_STRING_TO_FLOAT = 1008;
    TYPE_MISMATCH_STRING_TO_DOUBLE = 1009;
    TYPE_MISMATCH_STRING_TO_BOOL = 1010;
    TYPE_MISMATCH_INT_TO_BOOL = 1011;
    TYPE_MISMATCH_FLOAT_TO_BOOL = 1012;
    TYPE_MISMATCH_DOUBLE_TO_BOOL = 1013;
    TYPE_MISMATCH_INT_TO_STRING = 1014;
    TYPE_MISMATCH_FLOAT_TO_STRING = 1015;
    TYPE_MISMATCH_DOUBLE_TO_STRING = 1016;
    TYPE_MISMATCH_BOOL_TO_STRING = 1017;
    INCOMPATIBLE_BINARY_OPERANDS = 1018;

    VARIABLE_REDECLARED = 2001;
    UNDEFINED_VARIABLE = 2002;
    VARIABLE_NOT_INITIALIZED = 2003;

    SYNTAX_ERROR = 3001;

    INVALID_ASSIGNMENT_TARGET = 4001;
    INVALID_EXPRESSION = 4002;
    UNEXPECTED_RETURN_VALUE = 4003;
    MISSING_RETURN_VALUE = 4004;
    RETURN_TYPE_MISMATCH = 4005;
    INVALID_CAST_TARGET = 4006;
    FORBIDDEN_CAST = 4007;
    CAST_PRECISION_LOSS = 4008;

    UNDEFINED_FUNCTION = 5001;
    CALLING_NON_FUNCTION = 5002;
    FUNCTION_ARG_COUNT_MISMATCH = 5003;
    NO_MATCHING_OVERLOAD = 5004;

    INTERNAL_COMPILER_ERROR = 6001;
}

/// Look up a registry entry by code, falling back to a sentinel "unknown
/// diagnostic" entry if the code is not registered.
pub fn lookup(code: Code) -> &'static Entry {
    REGISTRY
        .iter()
        .find(|e| e.code == code)
        .unwrap_or(&UNKNOWN_ENTRY)
}

/// Selects the `TYPE_MISMATCH_<SRC>_TO_<DST>` code for a `(target,
/// source)` pair, falling back to [`INCOMPATIBLE_BINARY_OPERANDS`] for
/// any pair this table does not name (e.g. anything involving `Struct`
/// or `Void`).
pub fn mismatch_code(target: DataType, source: DataType) -> Code {
    use DataType::*;
    match (target, source) {
        (Int, Float) => TYPE_MISMATCH_FLOAT_TO_INT,
        (Float, Double) => TYPE_MISMATCH_DOUBLE_TO_FLOAT,
        (Int, Double) => TYPE_MISMATCH_DOUBLE_TO_INT,
        (Int, Bool) => TYPE_MISMATCH_BOOL_TO_INT,
        (Float, Bool) => TYPE_MISMATCH_BOOL_TO_FLOAT,
        (Double, Bool) => TYPE_MISMATCH_BOOL_TO_DOUBLE,
        (Int, String) => TYPE_MISMATCH_STRING_TO_INT,
        (Float, String) => TYPE_MISMATCH_STRING_TO_FLOAT,
        (Double, String) => TYPE_MISMATCH_STRING_TO_DOUBLE,
        (Bool, String) => TYPE_MISMATCH_STRING_TO_BOOL,
        (Bool, Int) => TYPE_MISMATCH_INT_TO_BOOL,
        (Bool, Float) => TYPE_MISMATCH_FLOAT_TO_BOOL,
        (Bool, Double) => TYPE_MISMATCH_DOUBLE_TO_BOOL,
        (String, Int) => TYPE_MISMATCH_INT_TO_STRING,
        (String, Float) => TYPE_MISMATCH_FLOAT_TO_STRING,
        (String, Double) => TYPE_MISMATCH_DOUBLE_TO_STRING,
        (String, Bool) => TYPE_MISMATCH_BOOL_TO_STRING,
        _ => INCOMPATIBLE_BINARY_OPERANDS,
    }
}

/// A source location attached to a reported diagnostic.
#[derive(Clone, Copy, Debug)]
pub struct Location {
    pub file: glintc_util::span::FileId,
    pub span: Span,
}

/// A fully rendered diagnostic, kept around for test introspection via
/// [`Reporter::diagnostics`].
#[derive(Clone, Debug)]
pub struct Rendered {
    pub code: Code,
    pub severity: Severity,
    pub location: Option<Location>,
    pub extra: Option<String>,
    pub text: String,
}

/// Where a [`Reporter`] sends a `Fatal` diagnostic's non-local exit.
///
/// Production code terminates the process; tests inject a sink that
/// records the call instead, per the design note in `SPEC_FULL.md` §9.
pub trait FatalSink {
    fn fatal(&mut self, code: Code);
}

/// Terminates the process with the diagnostic's numeric code, per §6's
/// exit-code policy.
pub struct ProcessExit;

impl FatalSink for ProcessExit {
    fn fatal(&mut self, code: Code) {
        std::process::exit(code as i32);
    }
}

/// A sink that records fatal calls instead of exiting, for tests.
#[derive(Default)]
pub struct RecordingSink {
    pub calls: Vec<Code>,
}

impl FatalSink for RecordingSink {
    fn fatal(&mut self, code: Code) {
        self.calls.push(code);
    }
}

/// Formats diagnostics and tracks running per-severity counts.
///
/// Counters start at zero when a `Reporter` is created; there is no
/// process-wide global, so `resetCounters()` from the original design
/// becomes "construct a new `Reporter`" (see `SPEC_FULL.md` §9).
pub struct Reporter {
    warnings: u32,
    errors: u32,
    fatals: u32,
    color: ColorConfig,
    use_color: bool,
    rendered: Vec<Rendered>,
    sink: Box<dyn FatalSink>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ColorConfig::Auto, false)
    }
}

impl Reporter {
    pub fn new(color: ColorConfig, is_tty: bool) -> Self {
        Self {
            warnings: 0,
            errors: 0,
            fatals: 0,
            color,
            use_color: color.use_color(is_tty),
            rendered: Vec::new(),
            sink: Box::new(ProcessExit),
        }
    }

    /// Build a reporter with an injectable [`FatalSink`], for tests that
    /// need to observe a `Fatal` diagnostic without exiting the process.
    pub fn with_sink(color: ColorConfig, is_tty: bool, sink: Box<dyn FatalSink>) -> Self {
        let mut reporter = Self::new(color, is_tty);
        reporter.sink = sink;
        reporter
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.errors > 0 || self.fatals > 0
    }

    #[inline]
    pub fn has_fatal_errors(&self) -> bool {
        self.fatals > 0
    }

    #[inline]
    pub fn warning_count(&self) -> u32 {
        self.warnings
    }

    #[inline]
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    #[inline]
    pub fn fatal_count(&self) -> u32 {
        self.fatals
    }

    /// All diagnostics rendered so far, for test assertions.
    pub fn diagnostics(&self) -> &[Rendered] {
        &self.rendered
    }

    /// Reset counters and the recorded diagnostic list, keeping the
    /// color policy and sink. Exposed for tests that run several checks
    /// against one `Reporter`.
    pub fn clear(&mut self) {
        self.warnings = 0;
        self.errors = 0;
        self.fatals = 0;
        self.rendered.clear();
    }

    /// Report `code` at an optional source location, with optional
    /// printable extra context (e.g. a variable's name).
    ///
    /// Increments the matching severity counter, prints the formatted
    /// diagnostic to stderr, records it for introspection, and, if the
    /// code's severity is `Fatal`, invokes the reporter's [`FatalSink`].
    pub fn report(
        &mut self,
        code: Code,
        location: Option<Location>,
        extra: Option<&str>,
        source_map: Option<&SourceMap>,
    ) {
        let entry = lookup(code);
        match entry.severity {
            Severity::Warning => self.warnings += 1,
            Severity::Error => self.errors += 1,
            Severity::Fatal => self.fatals += 1,
        }

        let text = self.render(entry, location, extra, source_map);
        eprintln!("{text}");

        self.rendered.push(Rendered {
            code,
            severity: entry.severity,
            location,
            extra: extra.map(str::to_owned),
            text,
        });

        if entry.severity == Severity::Fatal {
            eprintln!("error: could not compile due to a fatal error");
            self.sink.fatal(code);
        }
    }

    fn render(
        &self,
        entry: &Entry,
        location: Option<Location>,
        extra: Option<&str>,
        source_map: Option<&SourceMap>,
    ) -> String {
        let mut out = String::new();
        let header = format!("{}[E{:04}]: {}", entry.severity.word(), entry.code, entry.title);
        if self.use_color {
            let color = entry.severity.as_level().color_code();
            out.push_str(&format!("\x1b[{color}m{header}\x1b[0m"));
        } else {
            out.push_str(&header);
        }
        if let Some(extra) = extra {
            out.push_str(&format!(" ({extra})"));
        }

        if let Some(loc) = location {
            if let Some(map) = source_map {
                if let Some(file) = map.get(loc.file) {
                    out.push_str(&format!(
                        "\n  --> {}:{}:{}",
                        file.name(),
                        loc.span.line,
                        loc.span.column
                    ));
                    if let Some(line) = file.line_at(loc.span.line as usize) {
                        let col = loc.span.column as usize;
                        let carets = loc.span.len().max(1);
                        out.push_str(&format!("\n{:>4} | {}", loc.span.line, line));
                        out.push_str(&format!(
                            "\n     | {}{}",
                            " ".repeat(col.saturating_sub(1)),
                            "^".repeat(carets)
                        ));
                    }
                }
            }
        }

        if !entry.hint.is_empty() {
            out.push_str(&format!("\nhelp: {}", entry.hint));
        }
        if !entry.explanation.is_empty() {
            out.push_str(&format!("\nnote: {}", entry.explanation));
        }
        if !entry.suggestion.is_empty() {
            out.push_str(&format!("\nsuggestion: {}", entry.suggestion));
        }
        out
    }

    #[inline]
    pub fn color_config(&self) -> ColorConfig {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_code_resolves_to_sentinel() {
        let entry = lookup(999_999);
        assert_eq!(entry.code, UNKNOWN_ENTRY.code);
    }

    #[test]
    fn registered_code_resolves_to_itself() {
        let entry = lookup(TYPE_MISMATCH_STRING_TO_INT);
        assert_eq!(entry.code, 1007);
        assert_eq!(entry.severity, Severity::Error);
    }

    #[test]
    fn double_to_float_is_registered_as_warning() {
        let entry = lookup(TYPE_MISMATCH_DOUBLE_TO_FLOAT);
        assert_eq!(entry.code, 1002);
        assert_eq!(entry.severity, Severity::Warning);
    }

    #[test]
    fn mismatch_code_table_matches_scenario_codes() {
        assert_eq!(
            mismatch_code(DataType::Int, DataType::String),
            TYPE_MISMATCH_STRING_TO_INT
        );
        assert_eq!(
            mismatch_code(DataType::Float, DataType::Double),
            TYPE_MISMATCH_DOUBLE_TO_FLOAT
        );
    }

    #[test]
    fn mismatch_code_falls_back_for_untabled_pairs() {
        use crate::types::StructId;
        assert_eq!(
            mismatch_code(DataType::Struct(StructId(0)), DataType::Int),
            INCOMPATIBLE_BINARY_OPERANDS
        );
    }

    #[test]
    fn reporter_counts_by_severity() {
        let mut reporter = Reporter::default();
        reporter.report(TYPE_MISMATCH_STRING_TO_INT, None, None, None);
        reporter.report(TYPE_MISMATCH_DOUBLE_TO_FLOAT, None, None, None);
        assert_eq!(reporter.error_count(), 1);
        assert_eq!(reporter.warning_count(), 1);
        assert!(reporter.has_errors());
    }

    #[test]
    fn warnings_alone_do_not_count_as_errors() {
        let mut reporter = Reporter::default();
        reporter.report(TYPE_MISMATCH_DOUBLE_TO_FLOAT, None, None, None);
        assert!(!reporter.has_errors());
    }

    #[test]
    fn fatal_invokes_sink_instead_of_exiting() {
        let sink = Box::<RecordingSink>::default();
        let mut reporter = Reporter::with_sink(ColorConfig::Never, false, sink);
        reporter.report(INTERNAL_COMPILER_ERROR, None, None, None);
        assert!(reporter.has_fatal_errors());
    }

    #[test]
    fn clear_resets_counters_and_history() {
        let mut reporter = Reporter::default();
        reporter.report(TYPE_MISMATCH_STRING_TO_INT, None, None, None);
        reporter.clear();
        assert_eq!(reporter.error_count(), 0);
        assert!(reporter.diagnostics().is_empty());
    }

    #[test]
    fn report_records_extra_context_in_header() {
        let mut reporter = Reporter::default();
        reporter.report(UNDEFINED_VARIABLE, None, Some("x"), None);
        let rendered = &reporter.diagnostics()[0];
        assert!(rendered.text.contains("(x)"));
    }
}
