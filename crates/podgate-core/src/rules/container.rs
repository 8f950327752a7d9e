//! Per-container checks
//!
//! Every check in here is independent; a container with a bad name still
//! gets its image, ports, probes and resources looked at.

use super::Walk;
use crate::checks;
use crate::diagnostic::Problem;
use crate::node::Node;

impl Walk<'_> {
    pub(super) fn container(&mut self, container: &Node) {
        let fields = container.fields();

        match fields.get("name") {
            Some(node) if !node.value().is_empty() => {
                if !checks::is_valid_name(node.value()) {
                    self.report_at(
                        node.line(),
                        "containers.name",
                        Problem::InvalidFormat {
                            value: node.value().to_string(),
                        },
                    );
                }
            }
            _ => self.report("containers.name", Problem::Required),
        }

        match fields.get("image") {
            Some(node) if !node.value().is_empty() => {
                // Both image checks can fire for the same value.
                if !node.value().starts_with(checks::IMAGE_PREFIX) {
                    self.report_at(
                        node.line(),
                        "containers.image",
                        Problem::Unsupported {
                            value: node.value().to_string(),
                        },
                    );
                }
                if !node.value().contains(':') {
                    self.report_at(node.line(), "containers.image", Problem::MissingTag);
                }
            }
            _ => self.report("containers.image", Problem::Required),
        }

        // Optional, and silently skipped when not a sequence.
        if let Some(Node::Sequence { items, .. }) = fields.get("ports") {
            for port in items {
                self.port(port);
            }
        }

        for probe_name in ["readinessProbe", "livenessProbe"] {
            if let Some(probe) = fields.get(probe_name) {
                self.probe(probe, probe_name);
            }
        }

        match fields.get("resources") {
            Some(node) => self.resources(node),
            None => self.report("containers.resources", Problem::Required),
        }
    }
}
