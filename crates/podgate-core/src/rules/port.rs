//! Per-port checks

use super::Walk;
use crate::checks;
use crate::diagnostic::Problem;
use crate::node::Node;

impl Walk<'_> {
    pub(super) fn port(&mut self, port: &Node) {
        let fields = port.fields();

        match fields.get("containerPort") {
            // A missing containerPort is attributed to the port entry itself.
            None => self.report_at(port.line(), "containerPort", Problem::Required),
            Some(node) => match checks::parse_int(node.value()) {
                None => self.report_at(node.line(), "containerPort", Problem::NotAnInteger),
                Some(value) if !checks::port_in_range(value) => {
                    self.report_at(node.line(), "containerPort", Problem::OutOfRange)
                }
                Some(_) => {}
            },
        }

        if let Some(node) = fields.get("protocol") {
            if !checks::is_one_of(node.value(), &["TCP", "UDP"]) {
                self.report_at(
                    node.line(),
                    "protocol",
                    Problem::Unsupported {
                        value: node.value().to_string(),
                    },
                );
            }
        }
    }
}
