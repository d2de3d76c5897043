//! The C− abstract syntax tree and the hand-built example programs used in
//! place of a textual front end (see SPEC_FULL.md §10).

pub mod build;
pub mod datatype;
pub mod demo;
pub mod node;

pub use datatype::{BinOp, Type};
pub use node::AstNode;
