//! Resource quantity checks
//!
//! Group entries are walked in document order, so diagnostic order is stable
//! across runs even when both cpu and memory are bad.

use super::Walk;
use crate::checks;
use crate::diagnostic::Problem;
use crate::node::Node;

const GROUPS: [&str; 2] = ["limits", "requests"];

impl Walk<'_> {
    pub(super) fn resources(&mut self, resources: &Node) {
        let fields = resources.fields();

        for group in GROUPS {
            let Some(node) = fields.get(group) else {
                continue;
            };
            for (key, entry) in node.fields().iter() {
                match key {
                    "cpu" => {
                        if checks::parse_int(entry.value()).is_none() {
                            self.report_at(
                                entry.line(),
                                format!("{group}.cpu"),
                                Problem::NotAnInteger,
                            );
                        }
                    }
                    "memory" => {
                        if !checks::is_valid_memory(entry.value()) {
                            self.report_at(
                                entry.line(),
                                format!("{group}.memory"),
                                Problem::InvalidFormat {
                                    value: entry.value().to_string(),
                                },
                            );
                        }
                    }
                    // Anything else in a group passes through unchecked.
                    _ => {}
                }
            }
        }
    }
}
