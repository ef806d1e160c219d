//! RawStreamConfig - description of a raw buffer held in memory
//!
//! Each description carries a process-unique `StreamHandle` so that objects
//! built on top of it (such as a memory-backed sensor) can derive a stable
//! identity from it.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::{PixelFormat, Size};

static NEXT_STREAM_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a raw stream description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreamHandle(u64);

impl StreamHandle {
    /// Allocate a fresh handle
    pub fn next() -> Self {
        Self(NEXT_STREAM_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for StreamHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

/// Raw input stream description
///
/// Clones keep the handle of the original: a clone describes the same stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStreamConfig {
    /// Pixel format of the buffer
    pub pixel_format: PixelFormat,

    /// Frame width in pixels
    pub width: u32,

    /// Frame height in pixels
    pub height: u32,

    #[serde(skip, default = "StreamHandle::next")]
    handle: StreamHandle,
}

impl RawStreamConfig {
    pub fn new(pixel_format: PixelFormat, size: Size) -> Self {
        Self {
            pixel_format,
            width: size.width,
            height: size.height,
            handle: StreamHandle::next(),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn handle(&self) -> StreamHandle {
        self.handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = RawStreamConfig::new(PixelFormat::Srggb10, Size::new(64, 48));
        let b = RawStreamConfig::new(PixelFormat::Srggb10, Size::new(64, 48));
        assert_ne!(a.handle(), b.handle());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_keeps_handle() {
        let a = RawStreamConfig::new(PixelFormat::Sbggr8, Size::new(64, 48));
        let b = a.clone();
        assert_eq!(a.handle(), b.handle());
        assert_eq!(a, b);
    }

    #[test]
    fn test_deserialize_allocates_handle() {
        let json = r#"{"pixel_format":"SGRBG12","width":4056,"height":3040}"#;
        let a: RawStreamConfig = serde_json::from_str(json).unwrap();
        let b: RawStreamConfig = serde_json::from_str(json).unwrap();

        assert_eq!(a.size(), Size::new(4056, 3040));
        assert_eq!(a.pixel_format, PixelFormat::Sgrbg12);
        assert_ne!(a.handle(), b.handle());
    }
}
