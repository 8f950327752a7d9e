//! Parse errors for the YAML front-end

use thiserror::Error;

/// Failure to turn manifest text into a node tree.
///
/// Parse errors are hard errors, distinct from validation diagnostics: the
/// gate refuses the file instead of reporting on its content.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] marked_yaml::LoadError),
}
