//! SensorProfile - Config Loader output
//!
//! Describes a memory-backed sensor: the raw buffer it exposes and the camera
//! helper used to translate gains for it.

use serde::{Deserialize, Serialize};

use crate::{RawStreamConfig, SensorModel};

/// Name of the always-available fallback helper
pub const DEFAULT_HELPER_NAME: &str = "default";

/// Profile version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProfileVersion {
    #[default]
    V1,
}

/// Complete memory sensor profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorProfile {
    #[serde(default)]
    pub version: ProfileVersion,

    /// Raw buffer description
    pub raw_input: RawStreamConfig,

    /// Gain translation helper
    #[serde(default)]
    pub helper: HelperSelection,
}

/// Which camera helper to instantiate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperSelection {
    #[serde(default = "default_helper_name")]
    pub name: SensorModel,
}

fn default_helper_name() -> SensorModel {
    SensorModel::new(DEFAULT_HELPER_NAME)
}

impl Default for HelperSelection {
    fn default() -> Self {
        Self {
            name: default_helper_name(),
        }
    }
}
