//! SensorConfiguration - full-mode request a pipeline hands to a sensor
//!
//! Describes bit depth, analog crop, sub-sampling and output size in one go,
//! as opposed to the code/size pair of a `SubdeviceFormat`.

use serde::{Deserialize, Serialize};

use crate::{Rectangle, Size};

/// Binning factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binning {
    pub bin_x: u32,
    pub bin_y: u32,
}

impl Default for Binning {
    fn default() -> Self {
        Self { bin_x: 1, bin_y: 1 }
    }
}

impl Binning {
    /// True for 1:1 (no binning)
    pub fn is_unity(&self) -> bool {
        self.bin_x == 1 && self.bin_y == 1
    }
}

/// Skipping increments for odd/even rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipping {
    pub x_odd_inc: u32,
    pub x_even_inc: u32,
    pub y_odd_inc: u32,
    pub y_even_inc: u32,
}

impl Default for Skipping {
    fn default() -> Self {
        Self {
            x_odd_inc: 1,
            x_even_inc: 1,
            y_odd_inc: 1,
            y_even_inc: 1,
        }
    }
}

impl Skipping {
    /// True when no pixels are skipped
    pub fn is_unity(&self) -> bool {
        self.x_odd_inc == 1 && self.x_even_inc == 1 && self.y_odd_inc == 1 && self.y_even_inc == 1
    }
}

/// Sensor mode request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfiguration {
    /// Bits per sample
    pub bit_depth: u8,

    /// Crop on the pixel array before sub-sampling
    #[serde(default)]
    pub analog_crop: Rectangle,

    #[serde(default)]
    pub binning: Binning,

    #[serde(default)]
    pub skipping: Skipping,

    /// Size of the frames leaving the sensor
    pub output_size: Size,
}

impl SensorConfiguration {
    /// Full-resolution, no sub-sampling request
    pub fn full_frame(bit_depth: u8, output_size: Size) -> Self {
        Self {
            bit_depth,
            analog_crop: Rectangle::from(output_size),
            binning: Binning::default(),
            skipping: Skipping::default(),
            output_size,
        }
    }
}
