//! # Memory Sensor
//!
//! A camera sensor backed by a raw buffer already sitting in memory.
//!
//! Responsibilities:
//! - Present a `RawStreamConfig` through the `CameraSensor` contract
//! - Report the single media-bus code and size the buffer provides
//! - Reject every request that would need a different format, transform,
//!   control value or test pattern
//!
//! Pipelines construct it explicitly; it is never matched against media
//! graph entities.
//!
//! ## Usage Example
//!
//! ```
//! use contracts::{CameraSensor, PixelFormat, RawStreamConfig, Size};
//! use memory_sensor::MemorySensor;
//!
//! let raw = RawStreamConfig::new(PixelFormat::Srggb10_Csi2p, Size::new(1920, 1080));
//! let sensor = MemorySensor::new(&raw).unwrap();
//!
//! let code = sensor.mbus_codes()[0];
//! assert_eq!(sensor.sizes(code), vec![Size::new(1920, 1080)]);
//! ```

mod sensor;

pub use sensor::{MemorySensor, MEMORY_SENSOR_MODEL};
