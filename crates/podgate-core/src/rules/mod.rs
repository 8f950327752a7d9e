//! The fixed Pod schema walk
//!
//! One module per schema area. Each walker accumulates diagnostics through a
//! shared [`Walk`] collector and keeps going after a failed check; only a
//! structural dead end (containers not a list, httpGet absent) makes a walker
//! return early, with just the one structural diagnostic.

mod container;
mod document;
mod port;
mod probe;
mod resources;
mod spec;

use crate::diagnostic::{Diagnostic, Problem};
use crate::node::Node;

/// Validate a parsed manifest tree against the Pod schema.
///
/// `source` labels every line-qualified diagnostic (typically the file
/// path); `None` for `root` means the input had no top-level node and yields
/// the single empty-document diagnostic. An empty result is a valid
/// manifest. The walk is a pure function of its input: running it twice
/// produces identical lists.
pub fn validate(source: &str, root: Option<&Node>) -> Vec<Diagnostic> {
    let Some(root) = root else {
        return vec![Diagnostic::empty_document(source)];
    };

    let mut walk = Walk::new(source);
    walk.document(root);
    walk.diagnostics
}

/// Diagnostic collector threaded through the walkers.
struct Walk<'a> {
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Walk<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Report a problem attributed to a source line.
    fn report_at(&mut self, line: usize, path: impl Into<String>, problem: Problem) {
        self.diagnostics
            .push(Diagnostic::new(self.source, Some(line), path, problem));
    }

    /// Report a problem with no line attribution. Used only by the
    /// required-field checks that fire before descending into the offending
    /// subtree, where no node location is at hand.
    fn report(&mut self, path: impl Into<String>, problem: Problem) {
        self.diagnostics
            .push(Diagnostic::new(self.source, None, path, problem));
    }
}
