//! Hashed name → binding lookup, scope-chain resolution, line-use
//! tracking, and the human-readable dump. Cooperates with
//! [`crate::scope::ScopeManager`] but owns no scope-lifetime state of its
//! own: every lookup here is parameterized over a `ScopeManager` borrow.

use std::collections::HashMap;
use std::fmt;

use crate::ast::Type;
use crate::scope::{ScopeId, ScopeManager};

mod test;

/// What a bucket binds a name to. Grounded on the teacher's own
/// `SymbolType` enum — an indexed/owned projection of the declaring node
/// rather than a pointer or reference to it, so buckets outlive any
/// particular borrow of the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketKind {
    Variable(Type),
    Function { return_type: Type, params: Vec<Type> },
}

impl BucketKind {
    fn type_tag(&self) -> Type {
        match self {
            BucketKind::Variable(ty) => *ty,
            BucketKind::Function { return_type, .. } => *return_type,
        }
    }
}

/// One symbol-table entry: a name bound within a single scope to its
/// declaration, storage index, and use lines. Immutable after insertion
/// except for `lines`, which only ever grows.
#[derive(Debug, Clone)]
pub struct Bucket {
    name: String,
    kind: BucketKind,
    memloc: usize,
    lines: Vec<i64>,
    declaration_order: usize,
}

impl Bucket {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &BucketKind {
        &self.kind
    }

    pub fn memloc(&self) -> usize {
        self.memloc
    }

    /// Line numbers in insertion order; the first element is always the
    /// declaration line (or `-1` for a built-in).
    pub fn lines(&self) -> &[i64] {
        &self.lines
    }
}

#[derive(Default)]
struct ScopeBuckets {
    by_name: HashMap<String, Bucket>,
}

/// The symbol table. Owns neither names (they live in the AST) nor
/// declaring nodes, only its buckets and their line lists, for the
/// lifetime of analysis.
#[derive(Default)]
pub struct SymbolTable {
    scopes: HashMap<ScopeId, ScopeBuckets>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` into `scope`'s bucket chain. A no-op, returning
    /// `false`, if the name already exists in that exact scope — callers
    /// are expected to have already diagnosed the duplication via
    /// [`SymbolTable::st_lookup_top`]. `lineno` may be negative for
    /// synthetic (built-in) bindings and is preserved verbatim.
    pub fn st_insert(&mut self, scope: ScopeId, name: &str, lineno: i64, loc: usize, kind: BucketKind) -> bool {
        let entry = self.scopes.entry(scope).or_default();
        if entry.by_name.contains_key(name) {
            return false;
        }
        let declaration_order = entry.by_name.len();
        entry.by_name.insert(
            name.to_string(),
            Bucket {
                name: name.to_string(),
                kind,
                memloc: loc,
                lines: vec![lineno],
                declaration_order,
            },
        );
        true
    }

    /// Scope-chain lookup: `scope`, then each ancestor via `mgr`, in
    /// order. Returns the first matching bucket.
    pub fn st_bucket(&self, mgr: &ScopeManager, scope: ScopeId, name: &str) -> Option<&Bucket> {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(bucket) = self.scopes.get(&id).and_then(|s| s.by_name.get(name)) {
                return Some(bucket);
            }
            current = mgr.parent_of(id);
        }
        None
    }

    /// Convenience wrapping [`SymbolTable::st_bucket`]: the bucket's
    /// `memloc`, or `None` if the name isn't visible from `scope`. Unlike
    /// the reference implementation's `-1` sentinel, this can't be
    /// confused with a legitimately-zero memloc.
    pub fn st_lookup(&self, mgr: &ScopeManager, scope: ScopeId, name: &str) -> Option<usize> {
        self.st_bucket(mgr, scope, name).map(Bucket::memloc)
    }

    /// Like [`SymbolTable::st_lookup`] but restricted to `scope` itself —
    /// used to detect redeclarations.
    pub fn st_lookup_top(&self, scope: ScopeId, name: &str) -> Option<usize> {
        self.scopes.get(&scope).and_then(|s| s.by_name.get(name)).map(Bucket::memloc)
    }

    /// Resolve `name` via the scope chain rooted at `scope` and append
    /// `lineno` to its bucket's line list. Panics if the name isn't
    /// visible anywhere on that chain — callers must only call this after
    /// a successful `st_bucket`.
    pub fn st_add_lineno(&mut self, mgr: &ScopeManager, scope: ScopeId, name: &str, lineno: i64) {
        let mut current = Some(scope);
        while let Some(id) = current {
            if let Some(scope_buckets) = self.scopes.get_mut(&id) {
                if let Some(bucket) = scope_buckets.by_name.get_mut(name) {
                    bucket.lines.push(lineno);
                    return;
                }
            }
            current = mgr.parent_of(id);
        }
        panic!("st_add_lineno: {name:?} not found on any scope reachable from {scope}");
    }

    /// Emit the dump format: one block per scope in creation order, each
    /// bucket listed in declaration order, column widths matching the
    /// reference layout exactly.
    pub fn print_sym_tab<W: fmt::Write>(&self, mgr: &ScopeManager, sink: &mut W) -> fmt::Result {
        for scope in mgr.scopes_in_creation_order() {
            writeln!(sink, "Scope Level : {}", scope.depth())?;
            writeln!(sink, "Variable Name   Type    Line Numbers")?;
            writeln!(sink, "-------------   ----    ------------")?;
            if let Some(buckets) = self.scopes.get(&scope.id()) {
                let mut ordered: Vec<&Bucket> = buckets.by_name.values().collect();
                ordered.sort_by_key(|b| b.declaration_order);
                for bucket in ordered {
                    let lines: Vec<String> = bucket.lines.iter().map(i64::to_string).collect();
                    writeln!(
                        sink,
                        "{:<15} {:<7} {}",
                        bucket.name,
                        bucket.kind.type_tag(),
                        lines.join(" ")
                    )?;
                }
            }
            writeln!(sink)?;
        }
        Ok(())
    }
}
