//! Generic parsed-document tree
//!
//! The validators never see a parser's own object model; they see this closed
//! tagged node type. Mappings carry (key, value) pairs rather than a flat
//! alternating child list, so "keys are scalars" holds by construction.

use indexmap::IndexMap;

/// One element of a parsed document tree.
///
/// Every node carries the 1-based source line of its span start (0 when the
/// parser supplied no position), used for diagnostic attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar {
        value: String,
        line: usize,
    },
    Mapping {
        entries: Vec<(String, Node)>,
        line: usize,
    },
    Sequence {
        items: Vec<Node>,
        line: usize,
    },
}

impl Node {
    pub fn scalar(value: impl Into<String>, line: usize) -> Self {
        Node::Scalar {
            value: value.into(),
            line,
        }
    }

    pub fn mapping(entries: Vec<(String, Node)>, line: usize) -> Self {
        Node::Mapping { entries, line }
    }

    pub fn sequence(items: Vec<Node>, line: usize) -> Self {
        Node::Sequence { items, line }
    }

    /// Source line of this node.
    pub fn line(&self) -> usize {
        match self {
            Node::Scalar { line, .. } | Node::Mapping { line, .. } | Node::Sequence { line, .. } => {
                *line
            }
        }
    }

    /// Scalar content of this node, or the empty string for mappings and
    /// sequences. Format and enum checks read non-scalar fields as `""`,
    /// which fails them the same way an empty scalar does.
    pub fn value(&self) -> &str {
        match self {
            Node::Scalar { value, .. } => value,
            _ => "",
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar { .. })
    }

    /// Ordered field lookup over this node.
    ///
    /// For a mapping, maps field name to value node in document order; a
    /// duplicated key keeps its first position but takes its last value. For
    /// any other kind the view is empty, so a missing field and a missing
    /// mapping shape both read as "not found".
    pub fn fields(&self) -> Fields<'_> {
        let mut map = IndexMap::new();
        if let Node::Mapping { entries, .. } = self {
            for (key, value) in entries {
                map.insert(key.as_str(), value);
            }
        }
        Fields(map)
    }
}

/// Ordered name-to-node view over a mapping, built by [`Node::fields`].
#[derive(Debug)]
pub struct Fields<'a>(IndexMap<&'a str, &'a Node>);

impl<'a> Fields<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Node> {
        self.0.get(name).copied()
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Node)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
