//! The type system: primitive and composite types, the three-valued
//! compatibility lattice, cast legality, and operator result rules.

use glintc_ast::BinOp;

pub use crate::symtab::StructId;

/// Every type a Glint expression can have.
///
/// `Unknown` is a sentinel meaning "a type error was already reported
/// along this path"; every checker routine that encounters `Unknown`
/// must propagate it upward without emitting a second diagnostic for the
/// same cause (see the module docs on [`crate::checker`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DataType {
    Int,
    Float,
    Double,
    Bool,
    String,
    Void,
    Struct(StructId),
    Unknown,
}

impl DataType {
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float | DataType::Double)
    }
}

/// Outcome of checking whether a value of type `source` may be used where
/// `target` is expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compat {
    Ok,
    Warn,
    Err,
}

impl Compat {
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Compat::Err)
    }
}

/// `compat(target, source)`: can a `source`-typed value be assigned to,
/// or bound as an argument for, a `target`-typed slot?
///
/// Numeric types widen silently (`Int -> Float`, `Int -> Double`,
/// `Float -> Double`); the single narrowing direction that is still
/// accepted is `Double -> Float`, which warns about possible precision
/// loss rather than rejecting outright. Structs are compatible only with
/// themselves.
pub fn compat(target: DataType, source: DataType) -> Compat {
    use DataType::*;
    if matches!(target, Unknown) || matches!(source, Unknown) {
        return Compat::Ok;
    }
    match (target, source) {
        (Int, Int) => Compat::Ok,
        (Int, _) => Compat::Err,

        (Float, Int) | (Float, Float) => Compat::Ok,
        (Float, Double) => Compat::Warn,
        (Float, _) => Compat::Err,

        (Double, Int) | (Double, Float) | (Double, Double) => Compat::Ok,
        (Double, _) => Compat::Err,

        (Bool, Bool) => Compat::Ok,
        (Bool, _) => Compat::Err,

        (String, String) => Compat::Ok,
        (String, _) => Compat::Err,

        (Struct(a), Struct(b)) if a == b => Compat::Ok,
        (Struct(_), _) => Compat::Err,

        (Void, _) => Compat::Err,
        (Unknown, _) => unreachable!("Unknown handled above"),
    }
}

/// `castAllowed(source, target)`: is an explicit `source as target` cast
/// legal, and if so, does it lose precision?
///
/// Any numeric-to-numeric cast is allowed; `Bool` casts to and from any
/// numeric type are allowed. Everything else (string casts, struct
/// casts) is rejected.
pub fn cast_allowed(source: DataType, target: DataType) -> Compat {
    use DataType::*;
    if matches!(source, Unknown) || matches!(target, Unknown) {
        return Compat::Ok;
    }
    match (source, target) {
        (a, b) if a == b => Compat::Ok,
        (a, b) if a.is_numeric() && b.is_numeric() => {
            if precision_loss(a, b) {
                Compat::Warn
            } else {
                Compat::Ok
            }
        }
        (a, Bool) if a.is_numeric() => {
            if precision_loss(a, Bool) {
                Compat::Warn
            } else {
                Compat::Ok
            }
        }
        (Bool, b) if b.is_numeric() => Compat::Ok,
        _ => Compat::Err,
    }
}

/// Does casting `source` to `target` lose precision or range?
///
/// `Double -> Float`, `{Float, Double} -> Int`, and `Int -> Bool` all
/// lose information; every other numeric/bool conversion is exact.
pub fn precision_loss(source: DataType, target: DataType) -> bool {
    use DataType::*;
    matches!(
        (source, target),
        (Double, Float) | (Float, Int) | (Double, Int) | (Int, Bool)
    )
}

/// Result type of a binary operator given its operand types.
///
/// Arithmetic operators widen to the widest numeric operand; comparisons
/// produce `Bool` whenever the operands are compatible in either
/// direction; logical operators require both operands to already be
/// `Bool`. Any other combination yields `Unknown`; the caller is
/// responsible for reporting a diagnostic before discarding the result.
pub fn binary_op_result(op: BinOp, lhs: DataType, rhs: DataType) -> DataType {
    use DataType::*;
    if matches!(lhs, Unknown) || matches!(rhs, Unknown) {
        return Unknown;
    }
    if op.is_arithmetic() {
        if lhs.is_numeric() && rhs.is_numeric() {
            widest_numeric(lhs, rhs)
        } else {
            Unknown
        }
    } else if op.is_comparison() {
        if !compat(lhs, rhs).is_err() || !compat(rhs, lhs).is_err() {
            Bool
        } else {
            Unknown
        }
    } else if op.is_logical() {
        if matches!(lhs, Bool) && matches!(rhs, Bool) {
            Bool
        } else {
            Unknown
        }
    } else {
        Unknown
    }
}

fn widest_numeric(a: DataType, b: DataType) -> DataType {
    use DataType::*;
    match (a, b) {
        (Double, _) | (_, Double) => Double,
        (Float, _) | (_, Float) => Float,
        _ => Int,
    }
}

/// Result type of a unary/postfix operator given its operand type.
///
/// `!` requires `Bool`; every other unary/postfix operator
/// (`+`, `-`, `++`, `--`) requires a numeric operand. `Unknown` is
/// returned, without a fresh diagnostic, when the requirement is unmet.
pub fn unary_op_result(op: glintc_ast::UnOp, operand: DataType) -> DataType {
    use DataType::*;
    if matches!(operand, Unknown) {
        return Unknown;
    }
    if op.requires_bool() {
        if matches!(operand, Bool) {
            Bool
        } else {
            Unknown
        }
    } else if operand.is_numeric() {
        operand
    } else {
        Unknown
    }
}
