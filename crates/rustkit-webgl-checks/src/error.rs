//! Error types for WebGL parameter checks.

use thiserror::Error;

/// The contract a rejected value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Not a WebGL rendering context.
    Context,
    /// Not a WebGL 2 rendering context.
    WebGL2Context,
    IndexType,
    DrawMode,
    BufferTarget,
    BufferUsage,
    /// Array element type differs from the declared GL type.
    ArrayType,
}

/// Errors raised by the WebGL checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebGLCheckError {
    /// A value failed an enumeration or capability check.
    #[error("{message}")]
    Validation { kind: Violation, message: String },

    /// No mapping exists for the requested conversion.
    #[error("{0}")]
    UnsupportedType(String),
}

impl WebGLCheckError {
    /// Create a validation error.
    pub fn validation(kind: Violation, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }

    /// Create an unsupported type error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedType(message.into())
    }

    /// The violated contract, for validation errors.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            WebGLCheckError::Validation { kind, .. } => Some(*kind),
            WebGLCheckError::UnsupportedType(_) => None,
        }
    }

    /// The diagnostic text.
    pub fn message(&self) -> &str {
        match self {
            WebGLCheckError::Validation { message, .. } => message,
            WebGLCheckError::UnsupportedType(message) => message,
        }
    }

    /// Get the error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            WebGLCheckError::Validation { .. } => "validation",
            WebGLCheckError::UnsupportedType(_) => "unsupported_type",
        }
    }
}

/// Result type alias for WebGL checks.
pub type Result<T> = std::result::Result<T, WebGLCheckError>;
