//! Pass 2: re-walk the tree built by pass 1, re-entering the scopes it
//! recorded, propagating expression types bottom-up and flagging every
//! type rule violation. Never creates a scope; only pushes/pops the ones
//! `build_symtab` already created.

use crate::ast::{AstNode, BinOp, Type};
use crate::symtab::BucketKind;
use crate::walker::traverse;

use super::Analyzer;

impl Analyzer {
    /// Type-check `ast` against the symbol table and scope tree built by a
    /// prior [`Analyzer::build_symtab`] call on the same tree. Idempotent:
    /// running this twice on an already-annotated tree reproduces the same
    /// diagnostics and the same final `type` fields, since every check
    /// here only reads types that were themselves set deterministically by
    /// an earlier run.
    pub fn type_check(&mut self, ast: &AstNode) {
        let global = self.global_scope.expect("build_symtab must run before type_check");
        self.scopes.scope_push(global).expect("global scope always fits");
        traverse(
            ast,
            self,
            &mut |analyzer, node| analyzer.type_check_pre(node),
            &mut |analyzer, node| analyzer.type_check_post(node),
        );
        self.scopes.scope_pop();
    }

    fn type_check_pre(&mut self, node: &AstNode) -> bool {
        match node {
            AstNode::FunDecl { name, ty, .. } => {
                // A duplicate declaration was never assigned a `type` in
                // pass 1 (and pass 1 never descended into its body), so
                // its compound statement has no recorded scope either —
                // mirror pass 1's skip rather than panic re-entering it.
                if ty.get().is_none() {
                    return false;
                }
                self.current_function_name = Some(name.clone());
            }
            AstNode::Compound { scope, .. } => {
                let scope_id = scope.get().expect("build_symtab must have annotated every compound with its scope");
                self.scopes.scope_push(scope_id).expect("scope manager implementation limit exceeded");
            }
            _ => {}
        }
        true
    }

    fn type_check_post(&mut self, node: &AstNode) {
        match node {
            AstNode::Compound { .. } => {
                self.scopes.scope_pop();
            }
            AstNode::While { cond, line, .. } => {
                if cond.get_type() == Some(Type::Void) {
                    self.report_type(*line, "while test should not have void value");
                }
            }
            AstNode::Return { expr, line, .. } => self.check_return(expr.as_deref(), *line),
            AstNode::Const { ty, .. } => ty.set(Some(Type::Integer)),
            AstNode::Id { name, index, line, ty, .. } => self.check_id(name, index.as_deref(), *line, ty),
            AstNode::BinOp { op, lhs, rhs, line, ty, .. } => self.check_binop(*op, lhs, rhs, *line, ty),
            AstNode::Call { name, args, line, ty, .. } => self.check_call(name, args, *line, ty),
            // `If` has no type rule in this language's reference
            // implementation — see SPEC_FULL.md §11 — so its condition is
            // deliberately left unchecked here.
            _ => {}
        }
    }

    fn check_return(&mut self, expr: Option<&AstNode>, line: u32) {
        let fun_name = match &self.current_function_name {
            Some(name) => name.clone(),
            None => return,
        };
        let global = self.global_scope.expect("global scope exists once build_symtab has run");
        let fun_type = match self.table.st_bucket(&self.scopes, global, &fun_name).map(|b| b.kind()) {
            Some(BucketKind::Function { return_type, .. }) => *return_type,
            _ => return,
        };
        let expr_type = expr.and_then(AstNode::get_type);
        match (fun_type, expr_type) {
            (Type::Void, Some(t)) if t != Type::Void => self.report_type(line, "unexpected return value"),
            (Type::Integer, None) | (Type::Integer, Some(Type::Void)) => {
                self.report_type(line, "expected return value")
            }
            _ => {}
        }
    }

    fn check_id(&mut self, name: &str, index: Option<&AstNode>, line: u32, ty: &std::cell::Cell<Option<Type>>) {
        let top = self.scopes.scope_top().expect("some scope is always active while type-checking expressions");
        let decl_type = match self.table.st_bucket(&self.scopes, top, name).map(|b| b.kind()) {
            Some(BucketKind::Variable(t)) => *t,
            Some(BucketKind::Function { return_type, .. }) => *return_type,
            None => return,
        };
        match index {
            Some(index_expr) => {
                if decl_type != Type::Array {
                    self.report_type(line, "expected array");
                } else if index_expr.get_type() != Some(Type::Integer) {
                    self.report_type(line, "indexed expression must be of type integer");
                } else {
                    ty.set(Some(Type::Integer));
                }
            }
            None => ty.set(Some(decl_type)),
        }
    }

    fn check_binop(&mut self, op: BinOp, lhs: &AstNode, rhs: &AstNode, line: u32, ty: &std::cell::Cell<Option<Type>>) {
        let t1 = lhs.get_type();
        let t2 = rhs.get_type();
        if t1 == Some(Type::Void) || t2 == Some(Type::Void) {
            self.report_type(line, "operands must not have void type");
        } else if t1 == Some(Type::Array) && t2 == Some(Type::Array) {
            self.report_type(line, "operands must not both be arrays");
        } else if op == BinOp::Minus && t1 == Some(Type::Integer) && t2 == Some(Type::Array) {
            self.report_type(line, "invalid operands");
        } else if matches!(op, BinOp::Mult | BinOp::Divide) && (t1 == Some(Type::Array) || t2 == Some(Type::Array)) {
            self.report_type(line, "invalid operands");
        } else {
            ty.set(Some(Type::Integer));
        }
    }

    fn check_call(&mut self, name: &str, args: &[AstNode], line: u32, ty: &std::cell::Cell<Option<Type>>) {
        let top = self.scopes.scope_top().expect("some scope is always active while type-checking expressions");
        let (return_type, params) = match self.table.st_bucket(&self.scopes, top, name).map(|b| b.kind().clone()) {
            Some(BucketKind::Function { return_type, params }) => (return_type, params),
            Some(BucketKind::Variable(_)) => {
                self.report_type(line, "expected function");
                return;
            }
            None => return,
        };

        if args.len() != params.len() {
            // Reported against the first extra argument when there are too
            // many, or against the first argument (the call's own line if
            // there are none at all) when there are too few.
            let report_line = if args.len() > params.len() {
                args[params.len()].line()
            } else {
                args.first().map(AstNode::line).unwrap_or(line)
            };
            self.report_type(report_line, "wrong number of parameters");
        }
        for arg in args {
            if arg.get_type() == Some(Type::Void) {
                self.report_type(arg.line(), "cannot pass void value");
            }
        }
        ty.set(Some(return_type));
    }
}
