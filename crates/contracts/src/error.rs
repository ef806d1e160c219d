//! Layered error definitions
//!
//! Categorized by source: sensor construction / negotiation / config

use thiserror::Error;

use crate::PixelFormat;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Construction Errors =====
    /// The raw input pixel format has no Bayer layout
    #[error("pixel format {format} has no bayer mapping")]
    UnmappablePixelFormat { format: PixelFormat },

    // ===== Negotiation Errors =====
    /// The request differs from what the sensor can produce
    #[error("{operation} not permitted: {reason}")]
    NotPermitted {
        operation: &'static str,
        reason: String,
    },

    /// The capability is never offered by this sensor
    #[error("unsupported capability: {capability}")]
    Unsupported { capability: &'static str },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl ContractError {
    /// Create not-permitted error
    pub fn not_permitted(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::NotPermitted {
            operation,
            reason: reason.into(),
        }
    }

    /// Create unsupported-capability error
    pub fn unsupported(capability: &'static str) -> Self {
        Self::Unsupported { capability }
    }

    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether the caller may retry with different parameters
    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::NotPermitted { .. })
    }

    /// Whether the capability is permanently unavailable
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
