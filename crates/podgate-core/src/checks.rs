//! Leaf value checks shared by the schema walk
//!
//! Stateless helpers over scalar content: format regexes, integer parsing
//! and the port range bound. The walkers decide which field path and line a
//! failing check is attributed to.

use regex::Regex;
use std::sync::LazyLock;

/// Container names: lowercase letters, digits and underscores only.
static NAME_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid regex"));

/// Memory quantities: a whole number with exactly one binary unit suffix.
static MEMORY_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(Gi|Mi|Ki)$").expect("valid regex"));

/// Registry all images must come from.
pub const IMAGE_PREFIX: &str = "registry.bigbrother.io/";

pub fn is_valid_name(value: &str) -> bool {
    NAME_FORMAT.is_match(value)
}

pub fn is_valid_memory(value: &str) -> bool {
    MEMORY_FORMAT.is_match(value)
}

/// Base-10 integer parse; millicpu notation like `500m` and fractions are
/// rejected by construction.
pub fn parse_int(value: &str) -> Option<i64> {
    value.parse().ok()
}

/// Exclusive port bounds shared by `containerPort` and probe ports.
pub fn port_in_range(value: i64) -> bool {
    value > 0 && value < 65536
}

pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}
