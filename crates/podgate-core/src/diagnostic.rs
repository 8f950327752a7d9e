//! Validation diagnostics
//!
//! A diagnostic is a value, not a fault: the schema walk never aborts on one.
//! Rendering follows the gate's report format:
//! - `<source>:<line> <path> <problem>` when a line is known,
//! - `<path> <problem>` for the few required-field checks performed before
//!   descending into the offending subtree,
//! - `<source>: empty document` for the empty-input precondition.

use std::fmt;

/// The failure category carried by a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Field absent entirely (or present but empty where emptiness counts
    /// as absence).
    Required,
    /// Field present but not one of a fixed allowed set.
    Unsupported { value: String },
    /// Field present but fails a pattern check.
    InvalidFormat { value: String },
    /// Scalar expected to be integer-parseable is not.
    NotAnInteger,
    /// Integer parses but falls outside the allowed bounds.
    OutOfRange,
    /// Field expected to be a sequence is some other kind.
    NotAList,
    /// Image reference carries no `:` tag separator.
    MissingTag,
    /// Input had no top-level node at all.
    EmptyDocument,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Required => write!(f, "is required"),
            Problem::Unsupported { value } => write!(f, "has unsupported value '{}'", value),
            Problem::InvalidFormat { value } => write!(f, "has invalid format '{}'", value),
            Problem::NotAnInteger => write!(f, "must be int"),
            Problem::OutOfRange => write!(f, "value out of range"),
            Problem::NotAList => write!(f, "must be a list"),
            Problem::MissingTag => write!(f, "must include tag"),
            Problem::EmptyDocument => write!(f, "empty document"),
        }
    }
}

/// A single validation failure, attributed to a source label, a field path
/// and, where available, a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    source: String,
    line: Option<usize>,
    path: String,
    problem: Problem,
}

impl Diagnostic {
    pub fn new(
        source: impl Into<String>,
        line: Option<usize>,
        path: impl Into<String>,
        problem: Problem,
    ) -> Self {
        Self {
            source: source.into(),
            line,
            path: path.into(),
            problem,
        }
    }

    /// The single diagnostic reported for an input with no top-level node.
    pub fn empty_document(source: impl Into<String>) -> Self {
        Self::new(source, None, "", Problem::EmptyDocument)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Field path the problem is attributed to; empty for the
    /// empty-document diagnostic.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// The problem description alone, without source or path.
    pub fn message(&self) -> String {
        self.problem.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.problem, self.line) {
            (Problem::EmptyDocument, _) => write!(f, "{}: {}", self.source, self.problem),
            (_, Some(line)) => {
                write!(f, "{}:{} {} {}", self.source, line, self.path, self.problem)
            }
            (_, None) => write!(f, "{} {}", self.path, self.problem),
        }
    }
}
