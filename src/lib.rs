//! Semantic analysis core for a small C− compiler: given an already-parsed
//! abstract syntax tree, build its hierarchical symbol table (pass 1) and
//! check it against the language's type rules (pass 2).

pub mod analysis;
pub mod ast;
pub mod scope;
pub mod symtab;
pub mod walker;

pub use analysis::Analyzer;
pub use ast::AstNode;
