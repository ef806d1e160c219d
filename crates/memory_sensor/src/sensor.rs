//! MemorySensor - `CameraSensor` over an in-memory raw buffer
//!
//! Everything is derived once from the raw stream description at
//! construction. Every "set" entry point is an equality check against that
//! fixed state; nothing is ever reprogrammed.

use contracts::{
    BayerFormat, BayerOrder, CameraSensor, CameraSensorInfo, CfaPattern, ColorSpace,
    ContractError, ControlId, ControlInfoMap, ControlList, FocusLens, MbusCode, MediaEntity,
    Orientation, RawStreamConfig, Rectangle, SensorConfiguration, SensorDelays, SensorSubdevice,
    Size, SubdeviceFormat, SubdeviceStream, TestPatternMode, Transform,
};
use tracing::debug;

/// Model name reported by every memory sensor
pub const MEMORY_SENSOR_MODEL: &str = "memory";

/// Placeholder delays. They carry no meaning for a memory buffer but
/// consumers expect non-zero values.
const SENSOR_DELAYS: SensorDelays = SensorDelays {
    exposure_delay: 2,
    gain_delay: 1,
    vblank_delay: 2,
    hblank_delay: 2,
};

/// Memory-backed camera sensor
///
/// Built from a `RawStreamConfig`; answers the whole `CameraSensor` query
/// surface with the single format that configuration describes.
#[derive(Debug)]
pub struct MemorySensor {
    raw_input: RawStreamConfig,
    model: String,
    id: String,
    bayer_format: BayerFormat,
    /// Always exactly one entry
    mbus_codes: Vec<MbusCode>,
    format: SubdeviceFormat,
    properties: ControlList,
    controls: ControlInfoMap,
    test_pattern_modes: Vec<TestPatternMode>,
}

impl MemorySensor {
    /// Create a sensor presenting `raw_input`
    ///
    /// # Errors
    /// `UnmappablePixelFormat` if the pixel format is not a raw Bayer or
    /// monochrome format.
    pub fn new(raw_input: &RawStreamConfig) -> Result<Self, ContractError> {
        let bayer_format = BayerFormat::from_pixel_format(raw_input.pixel_format)?;
        let code = bayer_format
            .to_mbus_code()
            .ok_or(ContractError::UnmappablePixelFormat {
                format: raw_input.pixel_format,
            })?;

        let id = format!("{MEMORY_SENSOR_MODEL}:{}", raw_input.handle());
        let format = SubdeviceFormat {
            code,
            size: raw_input.size(),
            color_space: Some(ColorSpace::Raw),
        };

        debug!(
            sensor_id = %id,
            pixel_format = %raw_input.pixel_format,
            format = %format,
            "memory sensor created"
        );

        Ok(Self {
            raw_input: raw_input.clone(),
            model: MEMORY_SENSOR_MODEL.to_string(),
            id,
            bayer_format,
            mbus_codes: vec![code],
            format,
            properties: ControlList::new(),
            controls: ControlInfoMap::new(),
            test_pattern_modes: Vec::new(),
        })
    }

    /// Raw stream this sensor presents
    pub fn raw_input(&self) -> &RawStreamConfig {
        &self.raw_input
    }

    pub fn bayer_format(&self) -> BayerFormat {
        self.bayer_format
    }

    /// The one format this sensor produces
    pub fn format(&self) -> SubdeviceFormat {
        self.format
    }

    fn code(&self) -> MbusCode {
        self.mbus_codes[0]
    }

    /// Log, count and build a not-permitted rejection
    fn reject(&self, operation: &'static str, reason: String) -> ContractError {
        debug!(sensor_id = %self.id, operation, reason = %reason, "request rejected");
        observability::record_request_rejected(&self.id, operation);
        ContractError::not_permitted(operation, reason)
    }

    fn check_format(
        &self,
        operation: &'static str,
        format: &SubdeviceFormat,
    ) -> Result<(), ContractError> {
        if *format == self.format {
            Ok(())
        } else {
            Err(self.reject(
                operation,
                format!("format {format} differs from {}", self.format),
            ))
        }
    }

    fn check_transform(
        &self,
        operation: &'static str,
        transform: Transform,
    ) -> Result<(), ContractError> {
        if transform.is_identity() {
            Ok(())
        } else {
            Err(self.reject(
                operation,
                format!("transform {transform:?} is not identity"),
            ))
        }
    }

    /// First difference between `config` and what the buffer provides
    fn configuration_mismatch(&self, config: &SensorConfiguration) -> Option<String> {
        if config.bit_depth != self.bayer_format.bit_depth {
            return Some(format!(
                "bit depth {} differs from {}",
                config.bit_depth, self.bayer_format.bit_depth
            ));
        }
        if config.output_size != self.format.size {
            return Some(format!(
                "output size {} differs from {}",
                config.output_size, self.format.size
            ));
        }
        if !config.binning.is_unity() {
            return Some(format!(
                "binning {}x{} requested, only 1x1 available",
                config.binning.bin_x, config.binning.bin_y
            ));
        }
        if !config.skipping.is_unity() {
            return Some("skipping requested, only unity increments available".to_string());
        }
        None
    }
}

impl CameraSensor for MemorySensor {
    fn model(&self) -> &str {
        &self.model
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn entity(&self) -> Option<&dyn MediaEntity> {
        None
    }

    fn device(&mut self) -> Option<&mut dyn SensorSubdevice> {
        None
    }

    fn focus_lens(&mut self) -> Option<&mut dyn FocusLens> {
        None
    }

    fn mbus_codes(&self) -> &[MbusCode] {
        &self.mbus_codes
    }

    fn sizes(&self, code: MbusCode) -> Vec<Size> {
        if code == self.code() {
            vec![self.raw_input.size()]
        } else {
            Vec::new()
        }
    }

    fn resolution(&self) -> Size {
        self.raw_input.size()
    }

    fn get_format(
        &self,
        codes: &[MbusCode],
        _size: Size,
        max_size: Size,
    ) -> Option<SubdeviceFormat> {
        if !codes.contains(&self.code()) {
            debug!(sensor_id = %self.id, wanted = ?codes, "no acceptable media-bus code");
            return None;
        }

        if !self.format.size.fits_within(max_size) {
            debug!(
                sensor_id = %self.id,
                max_size = %max_size,
                size = %self.format.size,
                "raw size exceeds the maximum"
            );
            return None;
        }

        Some(self.format)
    }

    fn set_format(
        &mut self,
        format: &SubdeviceFormat,
        transform: Transform,
    ) -> Result<(), ContractError> {
        self.check_format("set_format", format)?;
        self.check_transform("set_format", transform)
    }

    fn try_format(&self, format: &SubdeviceFormat) -> Result<(), ContractError> {
        self.check_format("try_format", format)
    }

    fn apply_configuration(
        &mut self,
        config: &SensorConfiguration,
        transform: Transform,
    ) -> Result<SubdeviceFormat, ContractError> {
        if let Some(reason) = self.configuration_mismatch(config) {
            return Err(self.reject("apply_configuration", reason));
        }
        self.check_transform("apply_configuration", transform)?;

        observability::record_format_applied(&self.id);
        Ok(self.format)
    }

    fn image_stream(&self) -> SubdeviceStream {
        SubdeviceStream::default()
    }

    fn embedded_data_stream(&self) -> Option<SubdeviceStream> {
        None
    }

    fn embedded_data_format(&self) -> Option<SubdeviceFormat> {
        None
    }

    fn set_embedded_data_enabled(&mut self, enable: bool) -> Result<(), ContractError> {
        if enable {
            debug!(sensor_id = %self.id, "embedded data requested but not available");
            observability::record_request_rejected(&self.id, "set_embedded_data_enabled");
            return Err(ContractError::unsupported("embedded data"));
        }
        Ok(())
    }

    fn properties(&self) -> &ControlList {
        &self.properties
    }

    fn sensor_info(&self) -> Result<CameraSensorInfo, ContractError> {
        let size = self.raw_input.size();

        // Timing fields have no meaning here. They are 1 rather than 0
        // because consumers divide by them.
        Ok(CameraSensorInfo {
            model: self.model.clone(),
            bits_per_pixel: u32::from(self.bayer_format.bit_depth),
            cfa_pattern: CfaPattern::Rgb,
            active_area_size: size,
            analog_crop: Rectangle::from(size),
            output_size: size,
            pixel_rate: 1,
            min_line_length: 1,
            max_line_length: 1,
            min_frame_length: 1,
            max_frame_length: 1,
        })
    }

    fn compute_transform(&self, orientation: &mut Orientation) -> Transform {
        *orientation = Orientation::Rotate0;
        Transform::Identity
    }

    fn bayer_order(&self, _transform: Transform) -> BayerOrder {
        self.bayer_format.order
    }

    fn controls(&self) -> &ControlInfoMap {
        &self.controls
    }

    fn get_controls(&self, _ids: &[ControlId]) -> ControlList {
        ControlList::new()
    }

    fn set_controls(&mut self, controls: &ControlList) -> Result<(), ContractError> {
        Err(self.reject(
            "set_controls",
            format!("{} control(s) given, none are writable", controls.len()),
        ))
    }

    fn test_pattern_modes(&self) -> &[TestPatternMode] {
        &self.test_pattern_modes
    }

    fn set_test_pattern_mode(&mut self, mode: TestPatternMode) -> Result<(), ContractError> {
        Err(self.reject(
            "set_test_pattern_mode",
            format!("test pattern {mode:?} cannot be generated"),
        ))
    }

    fn sensor_delays(&self) -> &SensorDelays {
        &SENSOR_DELAYS
    }
}
