//! Health-probe checks
//!
//! One walker serves both probe fields; `name` is the field the probe hangs
//! off (`readinessProbe` or `livenessProbe`) and prefixes every path.

use super::Walk;
use crate::checks;
use crate::diagnostic::Problem;
use crate::node::Node;

impl Walk<'_> {
    pub(super) fn probe(&mut self, probe: &Node, name: &str) {
        let Some(http_get) = probe.fields().get("httpGet") else {
            self.report_at(probe.line(), format!("{name}.httpGet"), Problem::Required);
            return;
        };
        let fields = http_get.fields();

        match fields.get("path") {
            Some(node) if !node.value().is_empty() => {
                if !node.value().starts_with('/') {
                    self.report_at(
                        node.line(),
                        format!("{name}.httpGet.path"),
                        Problem::InvalidFormat {
                            value: node.value().to_string(),
                        },
                    );
                }
            }
            _ => self.report_at(
                http_get.line(),
                format!("{name}.httpGet.path"),
                Problem::Required,
            ),
        }

        match fields.get("port") {
            None => self.report_at(
                http_get.line(),
                format!("{name}.httpGet.port"),
                Problem::Required,
            ),
            Some(node) => match checks::parse_int(node.value()) {
                None => self.report_at(
                    node.line(),
                    format!("{name}.httpGet.port"),
                    Problem::NotAnInteger,
                ),
                Some(value) if !checks::port_in_range(value) => self.report_at(
                    node.line(),
                    format!("{name}.httpGet.port"),
                    Problem::OutOfRange,
                ),
                Some(_) => {}
            },
        }
    }
}
