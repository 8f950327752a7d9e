//! Podgate Core - Pod manifest schema validation
//!
//! This crate provides the foundational pieces of the validation gate:
//! - `Node`: A generic parsed-document tree (scalar/mapping/sequence) with
//!   per-node source lines
//! - `Diagnostic`: A single validation failure, optionally line-qualified
//! - `validate`: The fixed Pod schema walk producing all diagnostics for a tree
//!
//! The core is parser-agnostic: it consumes an already-built `Node` tree
//! (see `podgate-yaml` for the YAML front-end) and never performs I/O.

pub mod checks;
pub mod diagnostic;
pub mod node;
pub mod rules;

pub use diagnostic::{Diagnostic, Problem};
pub use node::{Fields, Node};
pub use rules::validate;
