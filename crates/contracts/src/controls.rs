//! Controls and properties
//!
//! A `ControlInfoMap` enumerates what can be set and within which limits;
//! a `ControlList` carries actual values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Numeric control identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(pub u32);

impl ControlId {
    pub const EXPOSURE: Self = Self(0x0098_0911);
    pub const ANALOGUE_GAIN: Self = Self(0x009e_0903);
    pub const VBLANK: Self = Self(0x009e_0901);
    pub const HBLANK: Self = Self(0x009e_0902);
    pub const TEST_PATTERN: Self = Self(0x009f_0903);
}

/// Control value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Float(f32),
    String(String),
}

/// Limits and default of one control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlInfo {
    pub min: ControlValue,
    pub max: ControlValue,
    pub default: ControlValue,
}

/// Enumeration of the controls a device exposes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInfoMap(BTreeMap<ControlId, ControlInfo>);

impl ControlInfoMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ControlId, info: ControlInfo) {
        self.0.insert(id, info);
    }

    pub fn get(&self, id: ControlId) -> Option<&ControlInfo> {
        self.0.get(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.0.keys().copied()
    }
}

/// Set of control values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlList(BTreeMap<ControlId, ControlValue>);

impl ControlList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: ControlId, value: ControlValue) {
        self.0.insert(id, value);
    }

    pub fn get(&self, id: ControlId) -> Option<&ControlValue> {
        self.0.get(&id)
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ControlId, &ControlValue)> {
        self.0.iter()
    }
}

/// Sensor test pattern modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestPatternMode {
    Off,
    SolidColor,
    ColorBars,
    ColorBarsFadeToGray,
    Pn9,
    Custom1,
}
