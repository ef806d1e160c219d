//! SensorModel - name a camera helper is registered under
//!
//! Registry keys are written once at start-up and cloned into every
//! `names()` listing, so the name is shared through an `Arc<str>`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sensor model name ("imx219", "default", ...)
///
/// Hashes, compares and orders exactly like the `str` it holds, so maps keyed
/// by `SensorModel` can be queried with a plain `&str`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SensorModel(Arc<str>);

impl SensorModel {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or whitespace only; such a name can never select a helper
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Borrow<str> for SensorModel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Ord for SensorModel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for SensorModel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for SensorModel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SensorModel {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl fmt::Display for SensorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SensorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl Serialize for SensorModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SensorModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
