//! The C− abstract syntax tree.
//!
//! Modelled as a single discriminated union per the tagged-variants note in
//! spec.md §9, with named fields in place of the reference implementation's
//! positional `child[i]` slots and sibling links — sibling chains (a
//! statement list, a parameter list, an argument list) become `Vec<AstNode>`
//! fields instead.

use std::cell::Cell;

use crate::ast::datatype::{BinOp, Type};
use crate::scope::ScopeId;

#[derive(Debug)]
pub enum AstNode {
    /// The whole translation unit: a sequence of top-level `VarDecl`/
    /// `FunDecl` siblings.
    Program(Vec<AstNode>),

    /// `int x;` / `int x[10];` at global or local scope. `marker` is the
    /// declared type; `ty` is filled in by pass 1 once the declaration is
    /// accepted (kept `Void` on a rejected declaration, matching spec.md
    /// §7's "the declaration is skipped").
    VarDecl {
        name: String,
        marker: Type,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A single function parameter.
    Param {
        name: String,
        marker: Type,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A function declaration. `params` replaces the reference
    /// implementation's parameter sibling-chain; `body` is always a
    /// `Compound`.
    FunDecl {
        name: String,
        return_marker: Type,
        params: Vec<AstNode>,
        body: Box<AstNode>,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A compound (`{ ... }`) statement: local declarations followed by a
    /// statement list. `scope` is unset until pass 1 visits this node, and
    /// is read back (never recomputed) by pass 2.
    Compound {
        locals: Vec<AstNode>,
        stmts: Vec<AstNode>,
        line: u32,
        scope: Cell<Option<ScopeId>>,
    },

    /// `if (cond) then_branch (else else_branch)?`. Not given an explicit
    /// type rule in spec.md §4.5; see SPEC_FULL.md §11 — mirrors the
    /// reference implementation's silence on this node.
    If {
        cond: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
        line: u32,
    },

    /// `while (cond) body`.
    While {
        cond: Box<AstNode>,
        body: Box<AstNode>,
        line: u32,
    },

    /// `return (expr)? ;`
    Return {
        expr: Option<Box<AstNode>>,
        line: u32,
    },

    /// An expression used as a statement (a bare assignment or call).
    ExprStmt(Box<AstNode>),

    /// An integer literal.
    Const {
        value: i64,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A use of an identifier. `index` is `Some(expr)` exactly when the use
    /// is subscripted — the explicit-field alternative spec.md §9 Open
    /// Question 2 names in place of a pre-set `type == Array` sentinel.
    Id {
        name: String,
        index: Option<Box<AstNode>>,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A function call.
    Call {
        name: String,
        args: Vec<AstNode>,
        line: u32,
        ty: Cell<Option<Type>>,
    },

    /// A binary (or assignment) operator application.
    BinOp {
        op: BinOp,
        lhs: Box<AstNode>,
        rhs: Box<AstNode>,
        line: u32,
        ty: Cell<Option<Type>>,
    },
}

impl AstNode {
    /// Source line this node was parsed from. Synthetic (built-in) nodes
    /// use `0`, matching `analyze.c`'s `insertIO`'s `fun->lineno = 0;`.
    pub fn line(&self) -> u32 {
        match self {
            AstNode::Program(_) => 0,
            AstNode::VarDecl { line, .. }
            | AstNode::Param { line, .. }
            | AstNode::FunDecl { line, .. }
            | AstNode::Compound { line, .. }
            | AstNode::If { line, .. }
            | AstNode::While { line, .. }
            | AstNode::Return { line, .. }
            | AstNode::Const { line, .. }
            | AstNode::Id { line, .. }
            | AstNode::Call { line, .. }
            | AstNode::BinOp { line, .. } => *line,
            AstNode::ExprStmt(inner) => inner.line(),
        }
    }

    /// The node's annotated type after pass 2, if it carries one at all.
    /// `None` for statement/declaration nodes that are never typed
    /// themselves (only expressions, plus `VarDecl`/`Param`/`FunDecl` which
    /// record their own declared type for lookup purposes).
    pub fn get_type(&self) -> Option<Type> {
        match self {
            AstNode::VarDecl { ty, .. }
            | AstNode::Param { ty, .. }
            | AstNode::FunDecl { ty, .. }
            | AstNode::Const { ty, .. }
            | AstNode::Id { ty, .. }
            | AstNode::Call { ty, .. }
            | AstNode::BinOp { ty, .. } => ty.get(),
            AstNode::ExprStmt(inner) => inner.get_type(),
            _ => None,
        }
    }

    /// Overwrite the node's annotated type. Panics if called on a node kind
    /// with no `ty` field — an internal invariant violation, not a
    /// reportable diagnostic.
    pub fn set_type(&self, new_type: Type) {
        match self {
            AstNode::VarDecl { ty, .. }
            | AstNode::Param { ty, .. }
            | AstNode::FunDecl { ty, .. }
            | AstNode::Const { ty, .. }
            | AstNode::Id { ty, .. }
            | AstNode::Call { ty, .. }
            | AstNode::BinOp { ty, .. } => ty.set(Some(new_type)),
            AstNode::ExprStmt(inner) => inner.set_type(new_type),
            other => panic!("Malformed AST! set_type called on untyped node {:?}", other),
        }
    }
}
