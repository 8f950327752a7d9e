//! Workload spec checks

use super::Walk;
use crate::checks;
use crate::diagnostic::Problem;
use crate::node::Node;

impl Walk<'_> {
    pub(super) fn spec(&mut self, spec: &Node) {
        let fields = spec.fields();

        // A non-scalar os is not validated at all.
        if let Some(os) = fields.get("os") {
            if os.is_scalar() && !checks::is_one_of(os.value(), &["linux", "windows"]) {
                self.report_at(
                    os.line(),
                    "spec.os",
                    Problem::Unsupported {
                        value: os.value().to_string(),
                    },
                );
            }
        }

        let Some(containers) = fields.get("containers") else {
            self.report("spec.containers", Problem::Required);
            return;
        };
        let Node::Sequence { items, .. } = containers else {
            self.report_at(containers.line(), "spec.containers", Problem::NotAList);
            return;
        };

        for container in items {
            self.container(container);
        }
    }
}
