//! Convenience constructors for building `AstNode` trees without a textual
//! front end. Used by the demo binary's built-in example programs and by
//! this crate's own tests — see SPEC_FULL.md §10 for why there's no
//! textual parser in this crate at all.

use std::cell::Cell;

use super::datatype::{BinOp, Type};
use super::node::AstNode;

pub fn program(decls: Vec<AstNode>) -> AstNode {
    AstNode::Program(decls)
}

pub fn var_decl(name: &str, marker: Type, line: u32) -> AstNode {
    AstNode::VarDecl {
        name: name.to_string(),
        marker,
        line,
        ty: Cell::new(None),
    }
}

pub fn param(name: &str, marker: Type, line: u32) -> AstNode {
    AstNode::Param {
        name: name.to_string(),
        marker,
        line,
        ty: Cell::new(None),
    }
}

pub fn fun_decl(name: &str, return_marker: Type, params: Vec<AstNode>, body: AstNode, line: u32) -> AstNode {
    AstNode::FunDecl {
        name: name.to_string(),
        return_marker,
        params,
        body: Box::new(body),
        line,
        ty: Cell::new(None),
    }
}

pub fn compound(locals: Vec<AstNode>, stmts: Vec<AstNode>, line: u32) -> AstNode {
    AstNode::Compound {
        locals,
        stmts,
        line,
        scope: Cell::new(None),
    }
}

pub fn if_stmt(cond: AstNode, then_branch: AstNode, else_branch: Option<AstNode>, line: u32) -> AstNode {
    AstNode::If {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch: else_branch.map(Box::new),
        line,
    }
}

pub fn while_stmt(cond: AstNode, body: AstNode, line: u32) -> AstNode {
    AstNode::While {
        cond: Box::new(cond),
        body: Box::new(body),
        line,
    }
}

pub fn return_stmt(expr: Option<AstNode>, line: u32) -> AstNode {
    AstNode::Return {
        expr: expr.map(Box::new),
        line,
    }
}

pub fn expr_stmt(expr: AstNode) -> AstNode {
    AstNode::ExprStmt(Box::new(expr))
}

pub fn const_(value: i64, line: u32) -> AstNode {
    AstNode::Const {
        value,
        line,
        ty: Cell::new(None),
    }
}

pub fn id(name: &str, line: u32) -> AstNode {
    AstNode::Id {
        name: name.to_string(),
        index: None,
        line,
        ty: Cell::new(None),
    }
}

pub fn id_indexed(name: &str, index: AstNode, line: u32) -> AstNode {
    AstNode::Id {
        name: name.to_string(),
        index: Some(Box::new(index)),
        line,
        ty: Cell::new(None),
    }
}

pub fn call(name: &str, args: Vec<AstNode>, line: u32) -> AstNode {
    AstNode::Call {
        name: name.to_string(),
        args,
        line,
        ty: Cell::new(None),
    }
}

pub fn binop(op: BinOp, lhs: AstNode, rhs: AstNode, line: u32) -> AstNode {
    AstNode::BinOp {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        line,
        ty: Cell::new(None),
    }
}

pub fn assign(name: &str, value: AstNode, line: u32) -> AstNode {
    binop(BinOp::Assign, id(name, line), value, line)
}
