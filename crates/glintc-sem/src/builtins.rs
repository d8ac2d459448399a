//! Built-in Registry: the fixed table of overloaded built-in functions.
//!
//! There is no user-extensible overload resolution in Glint (method
//! dispatch and operator overloading are both non-goals); the registry
//! is a small, fixed table matched by exact name plus per-argument
//! compatibility, following spec.md §4.4's resolution algorithm exactly.

use crate::types::{compat, Compat, DataType};

/// A single built-in overload.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinEntry {
    pub name: &'static str,
    pub id: u32,
    pub return_type: DataType,
    pub parameters: &'static [DataType],
}

#[rustfmt::skip]
static BUILTINS: &[BuiltinEntry] = &[
    BuiltinEntry { name: "print", id: 0, return_type: DataType::Void, parameters: &[DataType::Int] },
    BuiltinEntry { name: "print", id: 1, return_type: DataType::Void, parameters: &[DataType::Float] },
    BuiltinEntry { name: "print", id: 2, return_type: DataType::Void, parameters: &[DataType::Double] },
    BuiltinEntry { name: "print", id: 3, return_type: DataType::Void, parameters: &[DataType::String] },
    BuiltinEntry { name: "print", id: 4, return_type: DataType::Void, parameters: &[DataType::Bool] },
    BuiltinEntry { name: "exit",  id: 5, return_type: DataType::Void, parameters: &[DataType::Int] },
];

/// Is `name` the name of at least one built-in overload?
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|e| e.name == name)
}

/// Every distinct built-in name, in registry order, for seeding one
/// function-symbol per name into the global scope at module
/// initialization (spec.md §4.4's last paragraph).
pub fn distinct_names() -> impl Iterator<Item = &'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    BUILTINS.iter().filter_map(move |e| {
        if seen.contains(&e.name) {
            None
        } else {
            seen.push(e.name);
            Some(e.name)
        }
    })
}

/// Resolve a call `name(args: argTypes)` to the overload it selects, or
/// `None` if no overload matches or the match is ambiguous.
///
/// 1. Collect candidates by exact name match.
/// 2. A candidate matches if the arity matches and every argument is
///    `compat`-accepted (`OK` or `WARN`) by its parameter.
/// 3. A unique exact-type match (every argument's type equals its
///    parameter's type) wins outright, which keeps `print(1)` from being
///    ambiguous between `print(Int)`, `print(Float)`, and `print(Double)`
///    purely because `Int` widens to the other two.
/// 4. Otherwise, a unique all-`OK` match wins.
/// 5. Otherwise, a unique match (`OK` or `WARN`) wins; if more than one
///    candidate still matches, the call is ambiguous.
pub fn resolve_overload(name: &str, arg_types: &[DataType]) -> Option<u32> {
    let named: Vec<BuiltinEntry> = BUILTINS.iter().filter(|e| e.name == name).copied().collect();
    resolve_overload_among(&named, arg_types)
}

/// The resolution algorithm parameterized over an explicit candidate
/// set, so it can be exercised against overload sets other than the
/// production registry (spec.md §8's scenario 5 reasons about a
/// hypothetical registry containing only `print(Int)`/`print(String)`).
fn resolve_overload_among(candidates: &[BuiltinEntry], arg_types: &[DataType]) -> Option<u32> {
    let matching: Vec<&BuiltinEntry> = candidates.iter().filter(|e| matches(e, arg_types)).collect();

    let exact: Vec<&&BuiltinEntry> = matching.iter().filter(|e| is_exact(e, arg_types)).collect();
    if exact.len() == 1 {
        return Some(exact[0].id);
    }

    let all_ok: Vec<&&BuiltinEntry> = matching.iter().filter(|e| is_all_ok(e, arg_types)).collect();
    if all_ok.len() == 1 {
        return Some(all_ok[0].id);
    }
    if matching.len() == 1 {
        return Some(matching[0].id);
    }
    None
}

fn matches(entry: &BuiltinEntry, arg_types: &[DataType]) -> bool {
    entry.parameters.len() == arg_types.len()
        && entry
            .parameters
            .iter()
            .zip(arg_types)
            .all(|(&param, &arg)| compat(param, arg) != Compat::Err)
}

fn is_exact(entry: &BuiltinEntry, arg_types: &[DataType]) -> bool {
    entry.parameters.iter().zip(arg_types).all(|(&param, &arg)| param == arg)
}

fn is_all_ok(entry: &BuiltinEntry, arg_types: &[DataType]) -> bool {
    entry
        .parameters
        .iter()
        .zip(arg_types)
        .all(|(&param, &arg)| compat(param, arg) == Compat::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use DataType::*;

    #[test]
    fn is_builtin_recognizes_registered_names() {
        assert!(is_builtin("print"));
        assert!(is_builtin("exit"));
        assert!(!is_builtin("printf"));
    }

    #[test]
    fn distinct_names_has_no_duplicates() {
        let names: Vec<&str> = distinct_names().collect();
        assert_eq!(names, vec!["print", "exit"]);
    }

    #[test]
    fn print_int_resolves_uniquely() {
        assert_eq!(resolve_overload("print", &[Int]), Some(0));
    }

    #[test]
    fn print_string_resolves_uniquely() {
        assert_eq!(resolve_overload("print", &[String]), Some(3));
    }

    #[test]
    fn print_bool_resolves_to_the_bool_overload() {
        assert_eq!(resolve_overload("print", &[Bool]), Some(4));
    }

    #[test]
    fn print_wrong_arity_matches_nothing() {
        assert_eq!(resolve_overload("print", &[Int, Int]), None);
    }

    #[test]
    fn unknown_name_matches_nothing() {
        assert_eq!(resolve_overload("nope", &[Int]), None);
    }

    #[test]
    fn print_float_prefers_all_ok_over_warn_widened_match() {
        // Float arg: print(Float) is OK; print(Double) would also accept
        // Float via widening but is not part of this overload set, so
        // there is exactly one OK candidate.
        assert_eq!(resolve_overload("print", &[Float]), Some(1));
    }

    /// spec.md §8 scenario 5, against the hypothetical registry it
    /// describes: only `print(Int)` and `print(String)` exist.
    #[test]
    fn scenario_print_int_and_string_only() {
        let candidates = [
            BuiltinEntry { name: "print", id: 0, return_type: Void, parameters: &[Int] },
            BuiltinEntry { name: "print", id: 1, return_type: Void, parameters: &[String] },
        ];

        assert_eq!(resolve_overload_among(&candidates, &[Int]), Some(0));
        assert_eq!(resolve_overload_among(&candidates, &[Int, Int]), None);
        // Bool -> Int is Err and there is no print(Bool) in this reduced
        // set, so the call matches no overload.
        assert_eq!(resolve_overload_among(&candidates, &[Bool]), None);
    }
}
