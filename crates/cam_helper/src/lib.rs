//! # Camera Helpers
//!
//! Sensor-model specific gain encoding, looked up by model name.
//!
//! Responsibilities:
//! - `CamHelper` contract: gain <-> gain code translation
//! - `DefaultCamHelper`: inert fallback for unidentified sensors
//! - `HelperRegistry`: name -> factory map, populated once then frozen
//!
//! ## Usage Example
//!
//! ```
//! use cam_helper::{register_builtin_helpers, HelperRegistryBuilder};
//!
//! let builder = HelperRegistryBuilder::new();
//! register_builtin_helpers(&builder).unwrap();
//! let registry = builder.freeze();
//!
//! let helper = registry.create("default").unwrap();
//! assert_eq!(helper.gain_code(4.0), 0);
//! assert_eq!(helper.gain(17), 1.0);
//! ```

mod error;
mod helper;
mod registry;

pub use contracts::DEFAULT_HELPER_NAME;
pub use error::{CamHelperError, Result};
pub use helper::{CamHelper, DefaultCamHelper, Imx219CamHelper, Imx477CamHelper};
pub use registry::{register_builtin_helpers, HelperFactory, HelperRegistry, HelperRegistryBuilder};
