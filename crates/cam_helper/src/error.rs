//! Camera helper error types

use thiserror::Error;

/// Camera helper registry error
#[derive(Debug, Error)]
pub enum CamHelperError {
    /// No helper registered under this name
    #[error("unknown sensor name '{name}'")]
    UnknownSensor { name: String },

    /// A helper is already registered under this name
    #[error("camera helper '{name}' is already registered")]
    DuplicateRegistration { name: String },
}

impl CamHelperError {
    pub fn unknown_sensor(name: impl Into<String>) -> Self {
        Self::UnknownSensor { name: name.into() }
    }

    pub fn duplicate_registration(name: impl Into<String>) -> Self {
        Self::DuplicateRegistration { name: name.into() }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, CamHelperError>;
