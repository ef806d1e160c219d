//! `validate` command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use cam_helper::HelperRegistry;
use contracts::{CameraSensor, SensorProfile};
use memory_sensor::MemorySensor;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ProfileSummary>,
}

#[derive(Serialize)]
struct ProfileSummary {
    version: String,
    sensor_id: String,
    pixel_format: String,
    format: String,
    helper: String,
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    info!(config = %args.config.display(), "Validating sensor profile");

    let result = validate_profile(&args.config);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Profile validation failed")
    }
}

fn validate_profile(path: &Path) -> ValidationResult {
    let config_path = path.display().to_string();
    let invalid = |error: String| ValidationResult {
        valid: false,
        config_path: config_path.clone(),
        error: Some(error),
        warnings: None,
        summary: None,
    };

    if !path.exists() {
        return invalid(format!("File not found: {}", path.display()));
    }

    let profile = match config_loader::ConfigLoader::load_from_path(path) {
        Ok(profile) => profile,
        Err(e) => return invalid(e.to_string()),
    };

    // Also catches formats with a Bayer layout but no media bus code
    let sensor = match MemorySensor::new(&profile.raw_input) {
        Ok(sensor) => sensor,
        Err(e) => return invalid(e.to_string()),
    };

    let warnings = match HelperRegistry::builtin() {
        Ok(registry) => collect_warnings(&profile, &registry),
        Err(e) => return invalid(e.to_string()),
    };

    ValidationResult {
        valid: true,
        config_path: config_path.clone(),
        error: None,
        warnings: if warnings.is_empty() {
            None
        } else {
            Some(warnings)
        },
        summary: Some(ProfileSummary {
            version: format!("{:?}", profile.version),
            sensor_id: sensor.id().to_string(),
            pixel_format: profile.raw_input.pixel_format.to_string(),
            format: sensor.format().to_string(),
            helper: profile.helper.name.to_string(),
        }),
    }
}

/// Non-fatal issues
fn collect_warnings(profile: &SensorProfile, registry: &HelperRegistry) -> Vec<String> {
    let mut warnings = Vec::new();

    let helper = profile.helper.name.as_str();
    if !registry.contains(helper) {
        warnings.push(format!(
            "Camera helper '{helper}' is not registered - the default helper will be used"
        ));
    }

    warnings
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Profile is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Version: {}", summary.version);
            println!("  Sensor: {}", summary.sensor_id);
            println!("  Pixel format: {}", summary.pixel_format);
            println!("  Format: {}", summary.format);
            println!("  Helper: {}", summary.helper);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Profile is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
