//! Diagnostics as accumulated data rather than abort-on-first-error:
//! both passes keep walking after reporting a problem, matching spec's
//! "errors are accumulated; analysis continues" non-goal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Symbol,
    Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn symbol(line: u32, message: impl Into<String>) -> Self {
        Diagnostic { kind: DiagnosticKind::Symbol, line, message: message.into() }
    }

    pub fn type_error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic { kind: DiagnosticKind::Type, line, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            DiagnosticKind::Symbol => "Symbol error",
            DiagnosticKind::Type => "Type error",
        };
        write!(f, "{} at line {}: {}", prefix, self.line, self.message)
    }
}
