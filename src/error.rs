//! Error types for markup-to-element.
//!
//! Parser and emitter faults bubble up unmodified and are wrapped exactly once,
//! at the conversion entry point, into a [`ConvertError`].

use thiserror::Error;

/// Errors raised by a [`MarkupParser`](crate::convert::MarkupParser).
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input contained no markup at all (empty or whitespace only)
    #[error("no markup to convert")]
    Empty,

    /// The underlying reader failed
    #[error("failed to read markup: {0}")]
    Read(#[from] std::io::Error),

    /// The parser refused the input
    #[error("markup rejected: {0}")]
    Rejected(String),
}

impl ParseError {
    /// Create a rejection error with a message.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}

/// Errors raised while walking the tree and emitting source text.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Tree nesting exceeded the configured maximum depth
    #[error("element nesting exceeds maximum depth of {max}")]
    TooDeep {
        /// Configured limit
        max: usize,
    },

    /// An attribute cannot be expressed as an object property
    #[error("invalid attribute {name:?} on <{tag}>")]
    InvalidAttribute {
        /// Tag of the element carrying the attribute
        tag: String,
        /// Offending attribute name
        name: String,
    },
}

/// The single error surfaced by a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Parsing the markup failed
    #[error("conversion failed: {0}")]
    Parse(#[from] ParseError),

    /// Emitting the element tree failed
    #[error("conversion failed: {0}")]
    Emit(#[from] EmitError),
}

/// Result type alias for conversions.
pub type ConvertResult<T> = Result<T, ConvertError>;
