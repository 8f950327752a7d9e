//! Podgate YAML - position-preserving YAML front-end
//!
//! Turns manifest text into the generic `podgate_core::Node` tree the
//! validators walk. Built on `marked-yaml` so every node keeps the 1-based
//! line of its span start; line attribution is the point of the gate, and
//! plain serde deserialization throws positions away.

pub mod error;

pub use error::ParseError;

use marked_yaml::Span;
use podgate_core::Node;

/// Parse one manifest into a node tree.
///
/// Blank input (every line empty or a `#` comment) yields `Ok(None)`:
/// there is no top-level node, and the caller reports it as an empty
/// document. Malformed YAML, a non-mapping top level, anchors and tags all
/// surface as [`ParseError`].
pub fn parse_document(text: &str) -> Result<Option<Node>, ParseError> {
    if is_blank(text) {
        return Ok(None);
    }

    let root = marked_yaml::parse_yaml(0, text)?;
    Ok(Some(convert(&root)))
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn convert(node: &marked_yaml::Node) -> Node {
    match node {
        marked_yaml::Node::Scalar(scalar) => {
            Node::scalar(scalar.as_str(), line_of(scalar.span()))
        }
        marked_yaml::Node::Mapping(mapping) => Node::mapping(
            mapping
                .iter()
                .map(|(key, value)| (key.as_str().to_string(), convert(value)))
                .collect(),
            line_of(mapping.span()),
        ),
        marked_yaml::Node::Sequence(sequence) => Node::sequence(
            sequence.iter().map(convert).collect(),
            line_of(sequence.span()),
        ),
    }
}

/// Line of the span start; 0 when the parser supplied no marker.
fn line_of(span: &Span) -> usize {
    span.start().map(|marker| marker.line()).unwrap_or(0)
}
