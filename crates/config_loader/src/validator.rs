//! Profile validation
//!
//! Rules:
//! - raw input width and height > 0
//! - raw input pixel format has a Bayer layout
//! - helper name not blank

use contracts::{BayerFormat, ContractError, SensorProfile};

/// Validate a parsed profile
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(profile: &SensorProfile) -> Result<(), ContractError> {
    validate_raw_size(profile)?;
    validate_raw_pixel_format(profile)?;
    validate_helper(profile)?;
    Ok(())
}

fn validate_raw_size(profile: &SensorProfile) -> Result<(), ContractError> {
    let raw = &profile.raw_input;
    if raw.width == 0 {
        return Err(ContractError::config_validation(
            "raw_input.width",
            "width must be > 0",
        ));
    }
    if raw.height == 0 {
        return Err(ContractError::config_validation(
            "raw_input.height",
            "height must be > 0",
        ));
    }
    Ok(())
}

/// A memory sensor can only be built over a Bayer or mono buffer
fn validate_raw_pixel_format(profile: &SensorProfile) -> Result<(), ContractError> {
    let format = profile.raw_input.pixel_format;
    BayerFormat::from_pixel_format(format)
        .map(|_| ())
        .map_err(|_| {
            ContractError::config_validation(
                "raw_input.pixel_format",
                format!("{format} has no bayer mapping"),
            )
        })
}

fn validate_helper(profile: &SensorProfile) -> Result<(), ContractError> {
    if profile.helper.name.is_blank() {
        return Err(ContractError::config_validation(
            "helper.name",
            "helper name must not be empty",
        ));
    }
    Ok(())
}
