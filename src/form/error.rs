use std::fmt;

/// Malformed component or component-list problem. Raised at add/update
/// time by the session and per component at import time by the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Component has an empty `id` (label given as the best available identity)
    EmptyId { label: String },

    /// Component has an empty `label`
    EmptyLabel { id: String },

    /// Select/radio component with no `options`
    MissingOptions { id: String },

    /// Another component in the form already uses this id
    DuplicateId { id: String },

    /// Remove/update target does not exist in the form
    UnknownId { id: String },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::EmptyId { label } => {
                write!(f, "Component '{}' has an empty id", label)
            }
            ModelError::EmptyLabel { id } => {
                write!(f, "Component '{}' has an empty label", id)
            }
            ModelError::MissingOptions { id } => {
                write!(f, "Select/radio component '{}' has no options", id)
            }
            ModelError::DuplicateId { id } => {
                write!(f, "Component id '{}' is already in use", id)
            }
            ModelError::UnknownId { id } => {
                write!(f, "No component with id '{}'", id)
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Whole-document export/import failure. Only structurally invalid
/// JSON fails the document; malformed components are rejected
/// individually (see `codec::ImportReport`).
#[derive(Debug)]
pub enum CodecError {
    /// Document is not valid JSON
    Parse { source: serde_json::Error },

    /// Document parsed but the top level is not an array
    NotAnArray,

    /// Serialization failed (should not happen for well-formed components)
    Serialize { source: serde_json::Error },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Parse { source } => {
                write!(f, "Form document is not valid JSON: {}", source)
            }
            CodecError::NotAnArray => {
                write!(f, "Form document must be a JSON array of components")
            }
            CodecError::Serialize { source } => {
                write!(f, "Failed to serialize form document: {}", source)
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Parse { source } => Some(source),
            CodecError::Serialize { source } => Some(source),
            CodecError::NotAnArray => None,
        }
    }
}
