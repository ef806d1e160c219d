//! Subdevice formats - what a sensor puts on the media bus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{MbusCode, Size};

/// Colour space of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    /// Unprocessed sensor data
    Raw,
    Srgb,
    Sycc,
    Smpte170m,
    Rec709,
    Rec2020,
}

/// Media-bus format of one sensor stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubdeviceFormat {
    pub code: MbusCode,
    pub size: Size,
    #[serde(default)]
    pub color_space: Option<ColorSpace>,
}

impl fmt::Display for SubdeviceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.size, self.code)?;
        if let Some(color_space) = self.color_space {
            write!(f, "/{color_space:?}")?;
        }
        Ok(())
    }
}

/// (pad, stream) pair addressing a subdevice stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubdeviceStream {
    pub pad: u32,
    pub stream: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let format = SubdeviceFormat {
            code: MbusCode::SRGGB10_1X10,
            size: Size::new(1920, 1080),
            color_space: Some(ColorSpace::Raw),
        };
        assert_eq!(format.to_string(), "1920x1080-0x300f/Raw");
    }

    #[test]
    fn test_equality_covers_color_space() {
        let raw = SubdeviceFormat {
            code: MbusCode::SBGGR12_1X12,
            size: Size::new(640, 480),
            color_space: Some(ColorSpace::Raw),
        };
        let srgb = SubdeviceFormat {
            color_space: Some(ColorSpace::Srgb),
            ..raw
        };
        assert_ne!(raw, srgb);
    }
}
