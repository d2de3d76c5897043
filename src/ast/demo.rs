//! Named example programs, built directly as `AstNode` trees rather than
//! parsed from source text. Each constructor here mirrors one of the
//! scenarios used to validate this crate's two passes; the CLI binary
//! exposes them by name via `--example`.

use super::build::*;
use super::datatype::{BinOp, Type};
use super::node::AstNode;

/// S1 — smoke test. `void main(void) { }`. Expect no diagnostics; the
/// dump shows the global scope (`input`, `output`, `main`) and an inner
/// scope for `main`'s body.
pub fn smoke() -> AstNode {
    program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(vec![], vec![], 1),
        1,
    )])
}

/// S2 — undeclared identifier. `void main(void) { x = 1; }`. Expect a
/// symbol error at the use of `x`.
pub fn undeclared_identifier() -> AstNode {
    program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(vec![], vec![expr_stmt(assign("x", const_(1, 1), 1))], 1),
        1,
    )])
}

/// S3 — redeclared function. `int f(void) { return 0; } int f(void) {
/// return 1; }`. Expect a symbol error at the second `f`.
pub fn redeclared_function() -> AstNode {
    program(vec![
        fun_decl(
            "f",
            Type::Integer,
            vec![],
            compound(vec![], vec![return_stmt(Some(const_(0, 1)), 1)], 1),
            1,
        ),
        fun_decl(
            "f",
            Type::Integer,
            vec![],
            compound(vec![], vec![return_stmt(Some(const_(1, 2)), 2)], 2),
            2,
        ),
    ])
}

/// S4 — void variable. `void main(void) { void y; }`. Expect a symbol
/// error at `y`.
pub fn void_variable() -> AstNode {
    program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(vec![var_decl("y", Type::Void, 1)], vec![], 1),
        1,
    )])
}

/// S5a — return mismatch, missing value. `int f(void) { return; }`.
/// Expect a type error "expected return value".
pub fn return_missing_value() -> AstNode {
    program(vec![fun_decl(
        "f",
        Type::Integer,
        vec![],
        compound(vec![], vec![return_stmt(None, 1)], 1),
        1,
    )])
}

/// S5b — return mismatch, unexpected value. `void g(void) { return 1; }`.
/// Expect a type error "unexpected return value".
pub fn return_unexpected_value() -> AstNode {
    program(vec![fun_decl(
        "g",
        Type::Void,
        vec![],
        compound(vec![], vec![return_stmt(Some(const_(1, 1)), 1)], 1),
        1,
    )])
}

/// Shared declarations for the S6 array-misuse scenarios: `int a[10]; int
/// b[10];` plus a statement using them, wrapped in a function body so the
/// two are in scope together.
fn array_scope_with(stmt: AstNode) -> AstNode {
    program(vec![fun_decl(
        "main",
        Type::Void,
        vec![],
        compound(
            vec![var_decl("a", Type::Array, 1), var_decl("b", Type::Array, 1)],
            vec![expr_stmt(stmt)],
            1,
        ),
        1,
    )])
}

/// S6a — `a * b` where both operands are whole arrays. Expect "operands
/// must not both be arrays".
pub fn array_both_operands() -> AstNode {
    array_scope_with(binop(BinOp::Mult, id("a", 2), id("b", 2), 2))
}

/// S6b — `1 - a`, one operand a bare array. Expect "invalid operands".
pub fn array_minus_int() -> AstNode {
    array_scope_with(binop(BinOp::Minus, const_(1, 2), id("a", 2), 2))
}

/// S6c — `a * 2`, one operand a bare array. Expect "invalid operands".
pub fn array_times_int() -> AstNode {
    array_scope_with(binop(BinOp::Mult, id("a", 2), const_(2, 2), 2))
}

/// S6d — `a[0] + 1`, a subscripted array element used as `Integer`.
/// Expect no diagnostics; the expression's type is `Integer`.
pub fn array_indexed_ok() -> AstNode {
    array_scope_with(binop(
        BinOp::Plus,
        id_indexed("a", const_(0, 2), 2),
        const_(1, 2),
        2,
    ))
}

/// Shared declaration for the S7 call-arity scenarios: `int f(int x) {
/// return x; }` plus a call to it.
fn call_scope_with(call_expr: AstNode) -> AstNode {
    program(vec![
        fun_decl(
            "f",
            Type::Integer,
            vec![param("x", Type::Integer, 1)],
            compound(vec![], vec![return_stmt(Some(id("x", 1)), 1)], 1),
            1,
        ),
        fun_decl(
            "main",
            Type::Void,
            vec![],
            compound(vec![], vec![expr_stmt(call_expr)], 2),
            2,
        ),
    ])
}

/// S7a — `f()` against `int f(int x)`. Expect "wrong number of
/// parameters".
pub fn call_too_few_args() -> AstNode {
    call_scope_with(call("f", vec![], 2))
}

/// S7b — `f(1,2)` against `int f(int x)`. Expect "wrong number of
/// parameters".
pub fn call_too_many_args() -> AstNode {
    call_scope_with(call("f", vec![const_(1, 2), const_(2, 2)], 2))
}

/// S7c — `f(1)` against `int f(int x)`. Expect no diagnostics; the call's
/// type is `Integer`.
pub fn call_arity_ok() -> AstNode {
    call_scope_with(call("f", vec![const_(1, 2)], 2))
}

/// A larger composite program exercising declarations, control flow, and
/// both built-ins together: a function computing the sum of the first
/// `n` outputs of `input()`, driven from `main`.
pub fn composite_sum_loop() -> AstNode {
    program(vec![
        fun_decl(
            "sum_to",
            Type::Integer,
            vec![param("n", Type::Integer, 1)],
            compound(
                vec![var_decl("i", Type::Integer, 2), var_decl("total", Type::Integer, 2)],
                vec![
                    expr_stmt(assign("i", const_(0, 3), 3)),
                    expr_stmt(assign("total", const_(0, 3), 3)),
                    while_stmt(
                        binop(BinOp::Lt, id("i", 4), id("n", 4), 4),
                        compound(
                            vec![],
                            vec![
                                expr_stmt(assign(
                                    "total",
                                    binop(BinOp::Plus, id("total", 5), call("input", vec![], 5), 5),
                                    5,
                                )),
                                expr_stmt(assign("i", binop(BinOp::Plus, id("i", 6), const_(1, 6), 6), 6)),
                            ],
                            4,
                        ),
                        4,
                    ),
                    return_stmt(Some(id("total", 7)), 7),
                ],
                2,
            ),
            1,
        ),
        fun_decl(
            "main",
            Type::Void,
            vec![],
            compound(
                vec![],
                vec![expr_stmt(call(
                    "output",
                    vec![call("sum_to", vec![const_(5, 9)], 9)],
                    9,
                ))],
                8,
            ),
            8,
        ),
    ])
}

/// Look up a named example by the identifier used on the CLI.
pub fn by_name(name: &str) -> Option<AstNode> {
    Some(match name {
        "smoke" => smoke(),
        "undeclared" => undeclared_identifier(),
        "redeclared-function" => redeclared_function(),
        "void-variable" => void_variable(),
        "return-missing-value" => return_missing_value(),
        "return-unexpected-value" => return_unexpected_value(),
        "array-both-operands" => array_both_operands(),
        "array-minus-int" => array_minus_int(),
        "array-times-int" => array_times_int(),
        "array-indexed-ok" => array_indexed_ok(),
        "call-too-few-args" => call_too_few_args(),
        "call-too-many-args" => call_too_many_args(),
        "call-arity-ok" => call_arity_ok(),
        "composite-sum-loop" => composite_sum_loop(),
        _ => return None,
    })
}

/// The full list of example names, in the order the CLI lists them.
pub const NAMES: &[&str] = &[
    "smoke",
    "undeclared",
    "redeclared-function",
    "void-variable",
    "return-missing-value",
    "return-unexpected-value",
    "array-both-operands",
    "array-minus-int",
    "array-times-int",
    "array-indexed-ok",
    "call-too-few-args",
    "call-too-many-args",
    "call-arity-ok",
    "composite-sum-loop",
];
