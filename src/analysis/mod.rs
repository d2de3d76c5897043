//! The Analyzer: the two passes (build-symtab, type-check) that drive the
//! generic walker and own the contextual state the reference compiler
//! keeps in file-scope globals — reworked per spec.md §9's redesign note
//! into an explicit context object so nothing here is process-global.

pub mod build_symtab;
pub mod diagnostics;
pub mod type_check;
mod test;

use crate::scope::{ScopeId, ScopeManager};
use crate::symtab::SymbolTable;
use diagnostics::Diagnostic;

/// Synthetic line number stamped on the two built-in bindings at
/// initialization (the reference implementation's `insertIO` uses `0`
/// instead; see SPEC_FULL.md §11 for why this crate follows spec.md's
/// `-1` instead).
pub(crate) const BUILTIN_LINE: i64 = -1;

/// Drives both passes over an already-parsed AST, accumulating
/// diagnostics instead of aborting on the first one found.
pub struct Analyzer {
    scopes: ScopeManager,
    table: SymbolTable,
    diagnostics: Vec<Diagnostic>,
    error: bool,
    trace_analyze: bool,
    global_scope: Option<ScopeId>,
    current_function_name: Option<String>,
    preserve_scope: bool,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            scopes: ScopeManager::new(),
            table: SymbolTable::new(),
            diagnostics: Vec::new(),
            error: false,
            trace_analyze: false,
            global_scope: None,
            current_function_name: None,
            preserve_scope: false,
        }
    }

    /// Whether `printSymTab` should run at the end of pass 1.
    pub fn set_trace_analyze(&mut self, trace: bool) {
        self.trace_analyze = trace;
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// The global scope, once pass 1 has run. Exposed for subsequent
    /// compiler phases per spec.md §6.
    pub fn global_scope(&self) -> Option<ScopeId> {
        self.global_scope
    }

    pub fn scopes(&self) -> &ScopeManager {
        &self.scopes
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.table
    }

    /// Dump the symbol table to `sink` in the reference listing format.
    pub fn print_sym_tab<W: std::fmt::Write>(&self, sink: &mut W) -> std::fmt::Result {
        self.table.print_sym_tab(&self.scopes, sink)
    }

    fn report_symbol(&mut self, line: u32, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::symbol(line, message));
        self.error = true;
    }

    fn report_type(&mut self, line: u32, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::type_error(line, message));
        self.error = true;
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
