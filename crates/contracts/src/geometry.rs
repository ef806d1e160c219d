//! Frame geometry: sizes and rectangles in pixels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Frame size in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero
    pub fn is_null(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `self` fits inside `bound` in both dimensions
    pub fn fits_within(&self, bound: Size) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Rectangle anchored at (x, y)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Rectangle at the origin covering `size`
impl From<Size> for Rectangle {
    fn from(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})/{}x{}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within_boundary() {
        let size = Size::new(1920, 1080);
        assert!(size.fits_within(Size::new(1920, 1080)));
        assert!(size.fits_within(Size::new(4096, 2160)));
        assert!(!size.fits_within(Size::new(1919, 1080)));
        assert!(!size.fits_within(Size::new(1920, 1079)));
    }

    #[test]
    fn test_rectangle_from_size() {
        let rect = Rectangle::from(Size::new(640, 480));
        assert_eq!(rect, Rectangle::new(0, 0, 640, 480));
        assert_eq!(rect.size(), Size::new(640, 480));
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(1920, 1080).to_string(), "1920x1080");
        assert!(Size::new(0, 1080).is_null());
    }
}
