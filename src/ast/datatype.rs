//! The C− type lattice. Deliberately tiny — spec.md's Non-goals rule out
//! inferring anything beyond this fixed set.

use std::fmt;

/// A C− type. There is no `(unset)` variant here: nodes that haven't been
/// typed yet hold `Cell<Option<Type>>::new(None)` instead, so "unset" is
/// represented once, at the `Option` level, rather than folded into this
/// enum the way the C reference does with an implicit zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Void,
    Integer,
    Array,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Void => "Void",
            Type::Integer => "Integer",
            Type::Array => "Array",
        };
        write!(f, "{}", name)
    }
}

/// Binary operators, including comparisons and assignment — in the
/// original grammar these all reduce through the same `OpK` node kind
/// (spec.md §3: "op (one of the binary operators, including MINUS, MULT,
/// DIVIDE, plus comparison/assignment)").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Assign,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    Plus,
    Minus,
    Mult,
    Divide,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            BinOp::Assign => "=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Plus => "+",
            BinOp::Minus => "-",
            BinOp::Mult => "*",
            BinOp::Divide => "/",
        };
        write!(f, "{}", sym)
    }
}
