//! Transform and orientation
//!
//! A `Transform` is a combination of horizontal flip, vertical flip and
//! transposition applied by the sensor. An `Orientation` is what the image
//! looks like to a viewer once the transform has been applied.

use serde::{Deserialize, Serialize};

/// Geometric transform applied to captured frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    #[default]
    Identity,
    HFlip,
    VFlip,
    Rot180,
    Transpose,
    Rot270,
    Rot90,
    Rot180Transpose,
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        *self == Self::Identity
    }
}

/// Image orientation as seen by a viewer (EXIF numbering)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Rotate0,
    Rotate0Mirror,
    Rotate180,
    Rotate180Mirror,
    Rotate90Mirror,
    Rotate270,
    Rotate270Mirror,
    Rotate90,
}
