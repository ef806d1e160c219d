//! Static sensor metadata handed to image processing algorithms.

use serde::{Deserialize, Serialize};

use crate::{Rectangle, Size};

/// Colour filter array pattern reported to algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CfaPattern {
    Rggb,
    Grbg,
    Gbrg,
    Bggr,
    /// No specific mosaic, treated as full RGB
    #[default]
    Rgb,
    Mono,
}

/// Geometry and timing description of the current sensor mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraSensorInfo {
    pub model: String,

    pub bits_per_pixel: u32,
    pub cfa_pattern: CfaPattern,

    /// Readable pixel array
    pub active_area_size: Size,
    /// Crop applied on the pixel array
    pub analog_crop: Rectangle,
    /// Frame size leaving the sensor
    pub output_size: Size,

    /// Pixels per second
    pub pixel_rate: u64,
    /// Line length in pixels (including blanking)
    pub min_line_length: u32,
    pub max_line_length: u32,
    /// Frame length in lines (including blanking)
    pub min_frame_length: u32,
    pub max_frame_length: u32,
}

/// Frames between issuing a control and seeing its effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDelays {
    pub exposure_delay: u8,
    pub gain_delay: u8,
    pub vblank_delay: u8,
    pub hblank_delay: u8,
}
