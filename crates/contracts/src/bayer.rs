//! Bayer layout and media-bus codes
//!
//! A raw pixel format implies a colour-filter order, a bit depth and a
//! packing. The media-bus code that a sensor would put on the wire depends
//! only on the order and the bit depth.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PixelFormat as P;
use crate::{ContractError, PixelFormat};
use BayerOrder::{Bggr, Gbrg, Grbg, Mono, Rggb};
use Packing::{Csi2, None as Unpacked};

/// Media-bus code (V4L2 `MEDIA_BUS_FMT_*` value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MbusCode(pub u32);

impl MbusCode {
    pub const Y8_1X8: Self = Self(0x2001);
    pub const Y10_1X10: Self = Self(0x200a);
    pub const Y12_1X12: Self = Self(0x2013);
    pub const Y16_1X16: Self = Self(0x202e);
    pub const SBGGR8_1X8: Self = Self(0x3001);
    pub const SGRBG8_1X8: Self = Self(0x3002);
    pub const SBGGR10_1X10: Self = Self(0x3007);
    pub const SBGGR12_1X12: Self = Self(0x3008);
    pub const SGRBG10_1X10: Self = Self(0x300a);
    pub const SGBRG10_1X10: Self = Self(0x300e);
    pub const SRGGB10_1X10: Self = Self(0x300f);
    pub const SGBRG12_1X12: Self = Self(0x3010);
    pub const SGRBG12_1X12: Self = Self(0x3011);
    pub const SRGGB12_1X12: Self = Self(0x3012);
    pub const SGBRG8_1X8: Self = Self(0x3013);
    pub const SRGGB8_1X8: Self = Self(0x3014);
    pub const SBGGR14_1X14: Self = Self(0x3019);
    pub const SGBRG14_1X14: Self = Self(0x301a);
    pub const SGRBG14_1X14: Self = Self(0x301b);
    pub const SRGGB14_1X14: Self = Self(0x301c);
    pub const SBGGR16_1X16: Self = Self(0x301d);
    pub const SGBRG16_1X16: Self = Self(0x301e);
    pub const SGRBG16_1X16: Self = Self(0x301f);
    pub const SRGGB16_1X16: Self = Self(0x3020);
}

impl fmt::Display for MbusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Colour-filter order of the top-left 2x2 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BayerOrder {
    Bggr,
    Gbrg,
    Grbg,
    Rggb,
    /// No colour filter
    Mono,
}

/// How samples are laid out in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Packing {
    /// One sample per 8 or 16-bit container
    #[default]
    None,
    /// MIPI CSI-2 packing (4 samples in 5 bytes for 10-bit, ...)
    Csi2,
}

/// Bayer layout of a raw pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BayerFormat {
    pub order: BayerOrder,
    pub bit_depth: u8,
    pub packing: Packing,
}

const fn bayer(order: BayerOrder, bit_depth: u8, packing: Packing) -> BayerFormat {
    BayerFormat {
        order,
        bit_depth,
        packing,
    }
}

const PIXEL_FORMAT_TO_BAYER: &[(PixelFormat, BayerFormat)] = &[
    (P::Sbggr8, bayer(Bggr, 8, Unpacked)),
    (P::Sgbrg8, bayer(Gbrg, 8, Unpacked)),
    (P::Sgrbg8, bayer(Grbg, 8, Unpacked)),
    (P::Srggb8, bayer(Rggb, 8, Unpacked)),
    (P::Sbggr10, bayer(Bggr, 10, Unpacked)),
    (P::Sgbrg10, bayer(Gbrg, 10, Unpacked)),
    (P::Sgrbg10, bayer(Grbg, 10, Unpacked)),
    (P::Srggb10, bayer(Rggb, 10, Unpacked)),
    (P::Sbggr12, bayer(Bggr, 12, Unpacked)),
    (P::Sgbrg12, bayer(Gbrg, 12, Unpacked)),
    (P::Sgrbg12, bayer(Grbg, 12, Unpacked)),
    (P::Srggb12, bayer(Rggb, 12, Unpacked)),
    (P::Sbggr14, bayer(Bggr, 14, Unpacked)),
    (P::Sgbrg14, bayer(Gbrg, 14, Unpacked)),
    (P::Sgrbg14, bayer(Grbg, 14, Unpacked)),
    (P::Srggb14, bayer(Rggb, 14, Unpacked)),
    (P::Sbggr16, bayer(Bggr, 16, Unpacked)),
    (P::Sgbrg16, bayer(Gbrg, 16, Unpacked)),
    (P::Sgrbg16, bayer(Grbg, 16, Unpacked)),
    (P::Srggb16, bayer(Rggb, 16, Unpacked)),
    (P::Sbggr10_Csi2p, bayer(Bggr, 10, Csi2)),
    (P::Sgbrg10_Csi2p, bayer(Gbrg, 10, Csi2)),
    (P::Sgrbg10_Csi2p, bayer(Grbg, 10, Csi2)),
    (P::Srggb10_Csi2p, bayer(Rggb, 10, Csi2)),
    (P::Sbggr12_Csi2p, bayer(Bggr, 12, Csi2)),
    (P::Sgbrg12_Csi2p, bayer(Gbrg, 12, Csi2)),
    (P::Sgrbg12_Csi2p, bayer(Grbg, 12, Csi2)),
    (P::Srggb12_Csi2p, bayer(Rggb, 12, Csi2)),
    (P::Sbggr14_Csi2p, bayer(Bggr, 14, Csi2)),
    (P::Sgbrg14_Csi2p, bayer(Gbrg, 14, Csi2)),
    (P::Sgrbg14_Csi2p, bayer(Grbg, 14, Csi2)),
    (P::Srggb14_Csi2p, bayer(Rggb, 14, Csi2)),
    (P::R8, bayer(Mono, 8, Unpacked)),
    (P::R10, bayer(Mono, 10, Unpacked)),
    (P::R12, bayer(Mono, 12, Unpacked)),
    (P::R16, bayer(Mono, 16, Unpacked)),
    (P::R10_Csi2p, bayer(Mono, 10, Csi2)),
    (P::R12_Csi2p, bayer(Mono, 12, Csi2)),
];

const BAYER_TO_MBUS_CODE: &[(BayerOrder, u8, MbusCode)] = &[
    (Bggr, 8, MbusCode::SBGGR8_1X8),
    (Gbrg, 8, MbusCode::SGBRG8_1X8),
    (Grbg, 8, MbusCode::SGRBG8_1X8),
    (Rggb, 8, MbusCode::SRGGB8_1X8),
    (Bggr, 10, MbusCode::SBGGR10_1X10),
    (Gbrg, 10, MbusCode::SGBRG10_1X10),
    (Grbg, 10, MbusCode::SGRBG10_1X10),
    (Rggb, 10, MbusCode::SRGGB10_1X10),
    (Bggr, 12, MbusCode::SBGGR12_1X12),
    (Gbrg, 12, MbusCode::SGBRG12_1X12),
    (Grbg, 12, MbusCode::SGRBG12_1X12),
    (Rggb, 12, MbusCode::SRGGB12_1X12),
    (Bggr, 14, MbusCode::SBGGR14_1X14),
    (Gbrg, 14, MbusCode::SGBRG14_1X14),
    (Grbg, 14, MbusCode::SGRBG14_1X14),
    (Rggb, 14, MbusCode::SRGGB14_1X14),
    (Bggr, 16, MbusCode::SBGGR16_1X16),
    (Gbrg, 16, MbusCode::SGBRG16_1X16),
    (Grbg, 16, MbusCode::SGRBG16_1X16),
    (Rggb, 16, MbusCode::SRGGB16_1X16),
    (Mono, 8, MbusCode::Y8_1X8),
    (Mono, 10, MbusCode::Y10_1X10),
    (Mono, 12, MbusCode::Y12_1X12),
    (Mono, 16, MbusCode::Y16_1X16),
];

impl BayerFormat {
    /// Bayer layout implied by a raw pixel format
    ///
    /// # Errors
    /// `UnmappablePixelFormat` for processed (RGB/YUV) formats.
    pub fn from_pixel_format(format: PixelFormat) -> Result<Self, ContractError> {
        PIXEL_FORMAT_TO_BAYER
            .iter()
            .find(|(candidate, _)| *candidate == format)
            .map(|(_, bayer)| *bayer)
            .ok_or(ContractError::UnmappablePixelFormat { format })
    }

    /// Media-bus code for this layout; packing is irrelevant on the bus
    pub fn to_mbus_code(&self) -> Option<MbusCode> {
        BAYER_TO_MBUS_CODE
            .iter()
            .find(|(order, depth, _)| *order == self.order && *depth == self.bit_depth)
            .map(|(_, _, code)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csi2_packed_maps_to_unpacked_code() {
        let packed = BayerFormat::from_pixel_format(PixelFormat::Srggb10_Csi2p).unwrap();
        let unpacked = BayerFormat::from_pixel_format(PixelFormat::Srggb10).unwrap();

        assert_eq!(packed.packing, Packing::Csi2);
        assert_eq!(unpacked.packing, Packing::None);
        assert_eq!(packed.to_mbus_code(), Some(MbusCode::SRGGB10_1X10));
        assert_eq!(packed.to_mbus_code(), unpacked.to_mbus_code());
    }

    #[test]
    fn test_every_raw_format_has_a_code() {
        for (format, bayer) in PIXEL_FORMAT_TO_BAYER {
            assert!(
                bayer.to_mbus_code().is_some(),
                "{format} has no media-bus code"
            );
        }
    }

    #[test]
    fn test_mono() {
        let bayer = BayerFormat::from_pixel_format(PixelFormat::R12_Csi2p).unwrap();
        assert_eq!(bayer.order, BayerOrder::Mono);
        assert_eq!(bayer.bit_depth, 12);
        assert_eq!(bayer.to_mbus_code(), Some(MbusCode::Y12_1X12));
    }

    #[test]
    fn test_processed_formats_are_unmappable() {
        for format in [PixelFormat::Rgb888, PixelFormat::Yuv420, PixelFormat::Nv12] {
            let err = BayerFormat::from_pixel_format(format).unwrap_err();
            assert!(matches!(err, ContractError::UnmappablePixelFormat { .. }));
        }
    }

    #[test]
    fn test_mbus_code_display() {
        assert_eq!(MbusCode::SRGGB10_1X10.to_string(), "0x300f");
    }
}
