//! CameraSensor trait - sensor abstraction consumed by camera pipelines
//!
//! A pipeline configures its sensor exclusively through this trait: it
//! enumerates media-bus codes and sizes, negotiates a format, reads static
//! metadata for its algorithms and drives controls. Hardware sensors and
//! memory-backed stand-ins implement the same surface.

use crate::{
    BayerOrder, CameraSensorInfo, ContractError, ControlId, ControlInfoMap, ControlList, MbusCode,
    Orientation, SensorConfiguration, SensorDelays, Size, SubdeviceFormat, SubdeviceStream,
    TestPatternMode, Transform,
};

/// Media graph entity backing a sensor
pub trait MediaEntity: Send + Sync {
    fn name(&self) -> &str;
}

/// Kernel subdevice controlling a sensor
pub trait SensorSubdevice: Send + Sync {
    fn device_node(&self) -> &str;
}

/// Voice-coil or similar focus lens attached to a sensor
pub trait FocusLens: Send + Sync {
    fn model(&self) -> &str;
}

/// Camera sensor contract
///
/// Query methods take `&self`; anything that would reprogram a device takes
/// `&mut self`. Rejections use `ContractError::NotPermitted` when the caller
/// may retry with other parameters and `ContractError::Unsupported` when the
/// capability does not exist at all.
pub trait CameraSensor: Send + Sync {
    /// Sensor model name
    fn model(&self) -> &str;

    /// Identifier unique among the sensors of the process
    fn id(&self) -> &str;

    fn entity(&self) -> Option<&dyn MediaEntity>;

    fn device(&mut self) -> Option<&mut dyn SensorSubdevice>;

    fn focus_lens(&mut self) -> Option<&mut dyn FocusLens>;

    /// Media-bus codes the sensor can produce
    fn mbus_codes(&self) -> &[MbusCode];

    /// Frame sizes available for `code`; empty for unsupported codes
    fn sizes(&self, code: MbusCode) -> Vec<Size>;

    /// Full pixel array size
    fn resolution(&self) -> Size;

    /// Pick the best format among `codes` for `size`, bounded by `max_size`
    ///
    /// Returns `None` when nothing satisfies the request.
    fn get_format(&self, codes: &[MbusCode], size: Size, max_size: Size)
        -> Option<SubdeviceFormat>;

    /// Program `format` with `transform`
    fn set_format(
        &mut self,
        format: &SubdeviceFormat,
        transform: Transform,
    ) -> Result<(), ContractError>;

    /// Check whether `format` would be accepted, without side effects
    fn try_format(&self, format: &SubdeviceFormat) -> Result<(), ContractError>;

    /// Program a complete sensor mode and return the resulting format
    fn apply_configuration(
        &mut self,
        config: &SensorConfiguration,
        transform: Transform,
    ) -> Result<SubdeviceFormat, ContractError>;

    /// Stream carrying image data
    fn image_stream(&self) -> SubdeviceStream;

    /// Stream carrying embedded metadata lines, if any
    fn embedded_data_stream(&self) -> Option<SubdeviceStream>;

    fn embedded_data_format(&self) -> Option<SubdeviceFormat>;

    fn set_embedded_data_enabled(&mut self, enable: bool) -> Result<(), ContractError>;

    /// Static properties (location, rotation, ...)
    fn properties(&self) -> &ControlList;

    /// Metadata describing the current mode
    fn sensor_info(&self) -> Result<CameraSensorInfo, ContractError>;

    /// Transform achieving `orientation`
    ///
    /// `orientation` is updated to what the sensor can actually deliver.
    fn compute_transform(&self, orientation: &mut Orientation) -> Transform;

    /// Bayer order of frames captured with `transform`
    fn bayer_order(&self, transform: Transform) -> BayerOrder;

    fn controls(&self) -> &ControlInfoMap;

    fn get_controls(&self, ids: &[ControlId]) -> ControlList;

    fn set_controls(&mut self, controls: &ControlList) -> Result<(), ContractError>;

    fn test_pattern_modes(&self) -> &[TestPatternMode];

    fn set_test_pattern_mode(&mut self, mode: TestPatternMode) -> Result<(), ContractError>;

    /// Control latencies, in frames
    fn sensor_delays(&self) -> &SensorDelays;
}
