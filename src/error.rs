//! Error types for acemask
//!
//! This module defines the error hierarchy used throughout the crate.
//! Every mask error is a rejected-input error: it is raised where a value is
//! resolved and is never retried or clamped.

use std::fmt;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mask error: {0}")]
    Mask(#[from] MaskError),
}

/// Identifies which concrete mask produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// ACE type (allow, deny, audit, alarm)
    Type,
    /// ACE access permissions
    Access,
    /// ACE flags (inheritance or audit)
    Flag,
}

impl MaskKind {
    /// Get the human-readable mask name
    pub const fn as_str(&self) -> &'static str {
        match self {
            MaskKind::Type => "ACE type mask",
            MaskKind::Access => "ACE access mask",
            MaskKind::Flag => "ACE flag mask",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while resolving or validating a mask value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error("{kind} value must be an integer, got {value}")]
    MaskNotInteger { kind: MaskKind, value: String },

    #[error("The {kind} value {value} is not supported")]
    UnsupportedMask { kind: MaskKind, value: String },

    #[error("Unsupported ACE type {value}")]
    UnsupportedTypeMask { value: String },
}

impl MaskError {
    /// Build the "unsupported" error appropriate for a mask kind.
    ///
    /// Type masks report [`MaskError::UnsupportedTypeMask`]; the others carry
    /// their kind in [`MaskError::UnsupportedMask`].
    pub fn unsupported(kind: MaskKind, value: impl Into<String>) -> Self {
        match kind {
            MaskKind::Type => MaskError::UnsupportedTypeMask {
                value: value.into(),
            },
            kind => MaskError::UnsupportedMask {
                kind,
                value: value.into(),
            },
        }
    }

    pub fn not_integer(kind: MaskKind, value: impl Into<String>) -> Self {
        MaskError::MaskNotInteger {
            kind,
            value: value.into(),
        }
    }

    /// Check if this error rejects a value outside the valid set
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            MaskError::UnsupportedMask { .. } | MaskError::UnsupportedTypeMask { .. }
        )
    }

    /// Get the offending value as it was rendered for diagnostics
    pub fn value(&self) -> &str {
        match self {
            MaskError::MaskNotInteger { value, .. }
            | MaskError::UnsupportedMask { value, .. }
            | MaskError::UnsupportedTypeMask { value } => value,
        }
    }
}

/// Render an integer candidate as fixed-width hex
pub(crate) fn format_bits(value: i64) -> String {
    if value < 0 {
        format!("-0x{:08x}", value.unsigned_abs())
    } else {
        format!("0x{:08x}", value)
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Invalid ACE in entries[{index}]: {source}")]
    Entry {
        index: usize,
        #[source]
        source: MaskError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for mask operations
pub type MaskResult<T> = std::result::Result<T, MaskError>;
