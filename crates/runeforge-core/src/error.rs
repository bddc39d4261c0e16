//! Error types
//!
//! Drawing never fails: unknown identifiers degrade to no-ops. Errors only
//! appear at the edges, when parsing colors, loading profiles or writing frames.

use thiserror::Error;

/// Errors raised at the sprite system boundary
#[derive(Debug, Error)]
pub enum SpriteError {
    /// A color string could not be parsed as `#RRGGBB` / `#RRGGBBAA`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An identifier did not match any entry of its table
    #[error("Unknown {kind} id: {id}")]
    UnknownId { kind: &'static str, id: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Image encoding failed
    #[error("Image export failed: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpriteError {
    /// Shorthand for an unknown identifier error
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownId {
            kind,
            id: id.into(),
        }
    }
}

/// Result type for sprite operations
pub type Result<T> = std::result::Result<T, SpriteError>;
