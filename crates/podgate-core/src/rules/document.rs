//! Top-level manifest and metadata checks

use super::Walk;
use crate::diagnostic::Problem;
use crate::node::Node;

impl Walk<'_> {
    /// Entry point of the schema walk: apiVersion, kind, then delegation
    /// into metadata and spec. Every check runs; nothing here gates anything
    /// except descending into sub-blocks that exist.
    pub(super) fn document(&mut self, root: &Node) {
        let fields = root.fields();

        match fields.get("apiVersion") {
            Some(node) if node.value() != "v1" => self.report_at(
                node.line(),
                "apiVersion",
                Problem::Unsupported {
                    value: node.value().to_string(),
                },
            ),
            Some(_) => {}
            None => self.report("apiVersion", Problem::Required),
        }

        match fields.get("kind") {
            Some(node) if node.value() != "Pod" => self.report_at(
                node.line(),
                "kind",
                Problem::Unsupported {
                    value: node.value().to_string(),
                },
            ),
            Some(_) => {}
            None => self.report("kind", Problem::Required),
        }

        match fields.get("metadata") {
            Some(node) => self.metadata(node),
            None => self.report("metadata", Problem::Required),
        }

        match fields.get("spec") {
            Some(node) => self.spec(node),
            None => self.report("spec", Problem::Required),
        }
    }

    /// Only `name` matters here; namespace, labels and anything else pass
    /// through unchecked.
    fn metadata(&mut self, metadata: &Node) {
        match metadata.fields().get("name") {
            Some(node) if !node.value().is_empty() => {}
            _ => self.report("metadata.name", Problem::Required),
        }
    }
}
