//! # Contracts
//!
//! Frozen interface contracts (ICD) between camera pipelines and sensors.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Format Model
//! - A raw buffer is described by a `PixelFormat` and a `Size`
//! - The `PixelFormat` implies a `BayerFormat`, which implies one `MbusCode`
//! - Sensors negotiate `SubdeviceFormat`s (code + size + colour space)

mod bayer;
mod controls;
mod error;
mod format;
mod geometry;
mod pixel_format;
mod profile;
mod sensor;
mod sensor_config;
mod sensor_info;
mod sensor_model;
mod stream;
mod transform;

pub use bayer::*;
pub use controls::*;
pub use error::*;
pub use format::*;
pub use geometry::*;
pub use pixel_format::PixelFormat;
pub use profile::*;
pub use sensor::*;
pub use sensor_config::*;
pub use sensor_info::*;
pub use sensor_model::SensorModel;
pub use stream::{RawStreamConfig, StreamHandle};
pub use transform::*;
