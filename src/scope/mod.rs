//! Scope Manager: lifetime and stacking of lexical scopes, and the
//! per-scope location counter used to hand out memory-location indices.
//!
//! Mirrors the separation of concerns in `symtab.c`'s `scope_*`/`add_loc`
//! functions, but kept apart from bucket storage (owned by `crate::symtab`)
//! the way `spec.md` §2 describes the Scope Manager and Symbol Table as
//! distinct, cooperating components.

mod test;

use std::fmt;

/// Upper bound on the number of scopes ever created, and on stack depth.
/// Mirrors `symtab.c`'s `#define MAX_SCOPE 1000`.
pub const MAX_SCOPES: usize = 1000;

/// Unique identifier for a scope, stable for the lifetime of an analysis.
/// A thin newtype over an index into the Scope Manager's registry, per the
/// "indexed handles instead of pointers" guidance in `spec.md` §9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the scope tree. Holds only scope metadata; bucket storage
/// lives in `crate::symtab::SymbolTable`, keyed by `ScopeId`.
#[derive(Debug, Clone)]
pub struct Scope {
    id: ScopeId,
    /// Owning function name, or `None` for the global scope and for
    /// non-function compound statements (spec.md §3's "owning function
    /// name or null").
    owner: Option<String>,
    depth: usize,
    parent: Option<ScopeId>,
}

impl Scope {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }
}

/// Raised when the Scope Manager's fixed capacity is exceeded. Per
/// spec.md §7 this is an implementation limit, not a diagnostic: analysis
/// cannot meaningfully continue once it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeLimitExceeded {
    pub limit: usize,
}

impl fmt::Display for ScopeLimitExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope manager implementation limit exceeded ({} scopes)", self.limit)
    }
}

impl std::error::Error for ScopeLimitExceeded {}

/// Scope Manager: the active scope stack, per-scope location counters, and
/// the insertion-ordered registry of every scope ever created.
pub struct ScopeManager {
    /// Insertion-ordered list of every scope ever created (for the dump).
    registry: Vec<Scope>,
    /// Currently-active scope stack; last element is `top`.
    stack: Vec<ScopeId>,
    /// Parallel stack of per-scope location counters.
    locs: Vec<usize>,
}

impl ScopeManager {
    pub fn new() -> Self {
        ScopeManager {
            registry: Vec::new(),
            stack: Vec::new(),
            locs: Vec::new(),
        }
    }

    /// Allocate a new scope whose parent is the current top (or `None` if
    /// the stack is empty) and whose nesting depth is the current stack
    /// height. The scope is appended to the registry but not pushed.
    pub fn scope_create(&mut self, owner: Option<String>) -> Result<ScopeId, ScopeLimitExceeded> {
        if self.registry.len() >= MAX_SCOPES {
            return Err(ScopeLimitExceeded { limit: MAX_SCOPES });
        }
        let id = ScopeId(self.registry.len() as u32);
        let scope = Scope {
            id,
            owner,
            depth: self.stack.len(),
            parent: self.stack.last().copied(),
        };
        self.registry.push(scope);
        Ok(id)
    }

    /// Push a scope onto the stack; its location counter starts at 0.
    pub fn scope_push(&mut self, scope: ScopeId) -> Result<(), ScopeLimitExceeded> {
        if self.stack.len() >= MAX_SCOPES {
            return Err(ScopeLimitExceeded { limit: MAX_SCOPES });
        }
        self.stack.push(scope);
        self.locs.push(0);
        Ok(())
    }

    /// Pop the top scope. The location counter is discarded; the scope
    /// itself persists in the registry.
    pub fn scope_pop(&mut self) -> Option<ScopeId> {
        self.locs.pop();
        self.stack.pop()
    }

    /// Peek the top scope, or `None` for an empty stack.
    pub fn scope_top(&self) -> Option<ScopeId> {
        self.stack.last().copied()
    }

    /// Post-increment the top scope's location counter, returning its
    /// prior value. Panics if the stack is empty — callers must only ever
    /// insert while a scope is active.
    pub fn add_loc(&mut self) -> usize {
        let loc = self.locs.last_mut().expect("add_loc called with no active scope");
        let prior = *loc;
        *loc += 1;
        prior
    }

    pub fn lookup(&self, id: ScopeId) -> &Scope {
        &self.registry[id.0 as usize]
    }

    /// Parent of `id`, or `None` if `id` is the root (global) scope.
    pub fn parent_of(&self, id: ScopeId) -> Option<ScopeId> {
        self.registry[id.0 as usize].parent
    }

    /// All scopes ever created, in creation order — used by the symbol
    /// table dump.
    pub fn scopes_in_creation_order(&self) -> impl Iterator<Item = &Scope> {
        self.registry.iter()
    }
}

impl Default for ScopeManager {
    fn default() -> Self {
        Self::new()
    }
}
