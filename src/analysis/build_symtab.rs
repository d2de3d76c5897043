//! Pass 1: walk the AST once, creating and popping scopes, inserting
//! declarations, and resolving uses against the scopes built so far.

use crate::ast::{AstNode, Type};
use crate::symtab::BucketKind;
use crate::walker::traverse;

use super::{Analyzer, BUILTIN_LINE};

impl Analyzer {
    /// Insert `input : () -> Integer` and `output : (Integer) -> Void`
    /// into the (already pushed) global scope. `input` is registered
    /// before `output`, matching the reference `insertIO`'s order, so the
    /// two land at memlocs 0 and 1 respectively.
    fn insert_builtins(&mut self) {
        let global = self.scopes.scope_top().expect("global scope must be pushed before builtins");
        let loc = self.scopes.add_loc();
        self.table.st_insert(
            global,
            "input",
            BUILTIN_LINE,
            loc,
            BucketKind::Function { return_type: Type::Integer, params: vec![] },
        );
        let loc = self.scopes.add_loc();
        self.table.st_insert(
            global,
            "output",
            BUILTIN_LINE,
            loc,
            BucketKind::Function { return_type: Type::Void, params: vec![Type::Integer] },
        );
    }

    /// Build the symbol table and scope tree for `ast`. Idempotent to call
    /// only once per `Analyzer`; a second call would re-create the global
    /// scope and built-ins, which is not a supported use.
    pub fn build_symtab(&mut self, ast: &AstNode) {
        let global = self.scopes.scope_create(None).expect("global scope is always creatable");
        self.scopes.scope_push(global).expect("global scope is always pushable");
        self.global_scope = Some(global);
        self.insert_builtins();

        traverse(
            ast,
            self,
            &mut |analyzer, node| analyzer.build_symtab_pre(node),
            &mut |analyzer, node| analyzer.build_symtab_post(node),
        );

        self.scopes.scope_pop();

        if self.trace_analyze {
            let mut listing = String::new();
            let _ = self.print_sym_tab(&mut listing);
            print!("{listing}");
        }
    }

    /// Returns whether the walker should descend into `node`'s children.
    /// Only a duplicate function declaration says no — a direct
    /// implementation of "do not recurse further into this declaration's
    /// bindings" (spec.md §4.4).
    fn build_symtab_pre(&mut self, node: &AstNode) -> bool {
        match node {
            AstNode::Compound { scope, .. } => {
                let top = if self.preserve_scope {
                    self.preserve_scope = false;
                    self.scopes.scope_top().expect("function entry must have pushed a scope")
                } else {
                    let owner = self.current_function_name.clone();
                    let created = self.scopes.scope_create(owner).expect("scope manager implementation limit exceeded");
                    self.scopes.scope_push(created).expect("scope manager implementation limit exceeded");
                    created
                };
                scope.set(Some(top));
            }

            AstNode::Id { name, line, .. } => self.resolve_use(name, *line),
            AstNode::Call { name, line, .. } => self.resolve_use(name, *line),

            AstNode::FunDecl { name, return_marker, params, line, ty, .. } => {
                self.current_function_name = Some(name.clone());
                let top = self.scopes.scope_top().expect("global scope is always active");
                if self.table.st_lookup_top(top, name).is_some() {
                    self.report_symbol(*line, "function already declared");
                    return false;
                }
                let loc = self.scopes.add_loc();
                let param_types: Vec<Type> = params
                    .iter()
                    .map(|p| match p {
                        AstNode::Param { marker, .. } => *marker,
                        other => unreachable!("FunDecl.params must only contain Param nodes, found {other:?}"),
                    })
                    .collect();
                let return_type = if *return_marker == Type::Integer { Type::Integer } else { Type::Void };
                self.table.st_insert(
                    top,
                    name,
                    *line as i64,
                    loc,
                    BucketKind::Function { return_type, params: param_types },
                );
                ty.set(Some(return_type));

                let fun_scope = self
                    .scopes
                    .scope_create(Some(name.clone()))
                    .expect("scope manager implementation limit exceeded");
                self.scopes.scope_push(fun_scope).expect("scope manager implementation limit exceeded");
                self.preserve_scope = true;
            }

            AstNode::VarDecl { name, marker, line, ty, .. } => {
                if *marker == Type::Void {
                    self.report_symbol(*line, "type should not be void");
                    return true;
                }
                ty.set(Some(Type::Integer));
                let top = self.scopes.scope_top().expect("some scope is always active during build_symtab");
                if self.table.st_lookup_top(top, name).is_some() {
                    self.report_symbol(*line, "symbol already declared in current scope");
                    return true;
                }
                let loc = self.scopes.add_loc();
                self.table.st_insert(top, name, *line as i64, loc, BucketKind::Variable(*marker));
            }

            AstNode::Param { name, marker, line, ty, .. } => {
                if *marker == Type::Void {
                    self.report_symbol(*line, "invalid parameter type");
                    return true;
                }
                let top = self.scopes.scope_top().expect("function scope is active while visiting its parameters");
                // Per spec.md §9 Open Question 1: insert into the function
                // scope unconditionally unless duplicated *within that
                // scope* — not a full scope-chain visibility check.
                if self.table.st_lookup_top(top, name).is_none() {
                    let loc = self.scopes.add_loc();
                    self.table.st_insert(top, name, *line as i64, loc, BucketKind::Variable(*marker));
                    ty.set(Some(Type::Integer));
                } else {
                    self.report_symbol(*line, "parameter already declared");
                }
            }

            _ => {}
        }
        true
    }

    fn build_symtab_post(&mut self, node: &AstNode) {
        if let AstNode::Compound { .. } = node {
            self.scopes.scope_pop();
        }
    }

    fn resolve_use(&mut self, name: &str, line: u32) {
        let top = self.scopes.scope_top().expect("some scope is always active while visiting expressions");
        if self.table.st_bucket(&self.scopes, top, name).is_none() {
            self.report_symbol(line, "undeclared symbol");
        } else {
            self.table.st_add_lineno(&self.scopes, top, name, line as i64);
        }
    }
}
