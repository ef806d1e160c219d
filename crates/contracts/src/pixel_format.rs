//! PixelFormat - memory layout of a stream's pixels
//!
//! Names follow the DRM fourcc naming used by camera pipelines
//! (`SRGGB10_CSI2P`, `YUV420`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ContractError;

/// Stream pixel format
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    // Bayer, one sample per 8/16-bit container
    Sbggr8,
    Sgbrg8,
    Sgrbg8,
    Srggb8,
    Sbggr10,
    Sgbrg10,
    Sgrbg10,
    Srggb10,
    Sbggr12,
    Sgbrg12,
    Sgrbg12,
    Srggb12,
    Sbggr14,
    Sgbrg14,
    Sgrbg14,
    Srggb14,
    Sbggr16,
    Sgbrg16,
    Sgrbg16,
    Srggb16,

    // Bayer, MIPI CSI-2 packed
    Sbggr10_Csi2p,
    Sgbrg10_Csi2p,
    Sgrbg10_Csi2p,
    Srggb10_Csi2p,
    Sbggr12_Csi2p,
    Sgbrg12_Csi2p,
    Sgrbg12_Csi2p,
    Srggb12_Csi2p,
    Sbggr14_Csi2p,
    Sgbrg14_Csi2p,
    Sgrbg14_Csi2p,
    Srggb14_Csi2p,

    // Monochrome raw
    R8,
    R10,
    R12,
    R16,
    R10_Csi2p,
    R12_Csi2p,

    // Processed formats
    Rgb888,
    Bgr888,
    Xrgb8888,
    Yuv420,
    Nv12,
    Yuyv,
}

const NAMES: &[(PixelFormat, &str)] = &[
    (PixelFormat::Sbggr8, "SBGGR8"),
    (PixelFormat::Sgbrg8, "SGBRG8"),
    (PixelFormat::Sgrbg8, "SGRBG8"),
    (PixelFormat::Srggb8, "SRGGB8"),
    (PixelFormat::Sbggr10, "SBGGR10"),
    (PixelFormat::Sgbrg10, "SGBRG10"),
    (PixelFormat::Sgrbg10, "SGRBG10"),
    (PixelFormat::Srggb10, "SRGGB10"),
    (PixelFormat::Sbggr12, "SBGGR12"),
    (PixelFormat::Sgbrg12, "SGBRG12"),
    (PixelFormat::Sgrbg12, "SGRBG12"),
    (PixelFormat::Srggb12, "SRGGB12"),
    (PixelFormat::Sbggr14, "SBGGR14"),
    (PixelFormat::Sgbrg14, "SGBRG14"),
    (PixelFormat::Sgrbg14, "SGRBG14"),
    (PixelFormat::Srggb14, "SRGGB14"),
    (PixelFormat::Sbggr16, "SBGGR16"),
    (PixelFormat::Sgbrg16, "SGBRG16"),
    (PixelFormat::Sgrbg16, "SGRBG16"),
    (PixelFormat::Srggb16, "SRGGB16"),
    (PixelFormat::Sbggr10_Csi2p, "SBGGR10_CSI2P"),
    (PixelFormat::Sgbrg10_Csi2p, "SGBRG10_CSI2P"),
    (PixelFormat::Sgrbg10_Csi2p, "SGRBG10_CSI2P"),
    (PixelFormat::Srggb10_Csi2p, "SRGGB10_CSI2P"),
    (PixelFormat::Sbggr12_Csi2p, "SBGGR12_CSI2P"),
    (PixelFormat::Sgbrg12_Csi2p, "SGBRG12_CSI2P"),
    (PixelFormat::Sgrbg12_Csi2p, "SGRBG12_CSI2P"),
    (PixelFormat::Srggb12_Csi2p, "SRGGB12_CSI2P"),
    (PixelFormat::Sbggr14_Csi2p, "SBGGR14_CSI2P"),
    (PixelFormat::Sgbrg14_Csi2p, "SGBRG14_CSI2P"),
    (PixelFormat::Sgrbg14_Csi2p, "SGRBG14_CSI2P"),
    (PixelFormat::Srggb14_Csi2p, "SRGGB14_CSI2P"),
    (PixelFormat::R8, "R8"),
    (PixelFormat::R10, "R10"),
    (PixelFormat::R12, "R12"),
    (PixelFormat::R16, "R16"),
    (PixelFormat::R10_Csi2p, "R10_CSI2P"),
    (PixelFormat::R12_Csi2p, "R12_CSI2P"),
    (PixelFormat::Rgb888, "RGB888"),
    (PixelFormat::Bgr888, "BGR888"),
    (PixelFormat::Xrgb8888, "XRGB8888"),
    (PixelFormat::Yuv420, "YUV420"),
    (PixelFormat::Nv12, "NV12"),
    (PixelFormat::Yuyv, "YUYV"),
];

impl PixelFormat {
    /// Canonical upper-case name
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(format, _)| *format == self)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }

    /// Every known pixel format, in declaration order
    pub fn all() -> impl Iterator<Item = PixelFormat> {
        NAMES.iter().map(|(format, _)| *format)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NAMES
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(wanted))
            .map(|(format, _)| *format)
            .ok_or_else(|| ContractError::config_parse(format!("unknown pixel format '{s}'")))
    }
}

impl Serialize for PixelFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PixelFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
