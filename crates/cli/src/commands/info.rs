//! `info` command implementation.

use anyhow::{Context, Result};
use cam_helper::{CamHelper, HelperRegistry};
use contracts::{
    CameraSensor, CameraSensorInfo, SensorDelays, SensorProfile, Size, SubdeviceFormat,
};
use memory_sensor::MemorySensor;
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Gains shown in the helper mapping table
const SAMPLE_GAINS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];

/// Sensor report for JSON output
#[derive(Serialize)]
struct SensorReport {
    id: String,
    model: String,
    mbus_codes: Vec<String>,
    sizes: Vec<Size>,
    format: SubdeviceFormat,
    sensor_info: CameraSensorInfo,
    sensor_delays: SensorDelays,
    helper: HelperReport,
}

#[derive(Serialize)]
struct HelperReport {
    requested: String,
    /// Whether the requested helper was missing and the default was used
    fallback: bool,
    gain_codes: Vec<GainSample>,
}

#[derive(Serialize)]
pub(crate) struct GainSample {
    pub(crate) gain: f64,
    pub(crate) code: u32,
    /// Gain read back from the code
    pub(crate) applied_gain: f64,
}

impl GainSample {
    pub(crate) fn measure(helper: &dyn CamHelper, gain: f64) -> Self {
        let code = helper.gain_code(gain);
        Self {
            gain,
            code,
            applied_gain: helper.gain(code),
        }
    }
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    info!(config = %args.config.display(), "Loading sensor profile");

    if !args.config.exists() {
        anyhow::bail!("Profile not found: {}", args.config.display());
    }

    let profile = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load profile from {}", args.config.display()))?;

    let report = build_report(&profile)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(profile: &SensorProfile) -> Result<SensorReport> {
    let sensor =
        MemorySensor::new(&profile.raw_input).context("Failed to build memory sensor")?;
    let registry = HelperRegistry::builtin().context("Failed to register camera helpers")?;

    let requested = profile.helper.name.as_str();
    let helper = registry.create_or_default(requested);

    Ok(SensorReport {
        id: sensor.id().to_string(),
        model: sensor.model().to_string(),
        mbus_codes: sensor
            .mbus_codes()
            .iter()
            .map(ToString::to_string)
            .collect(),
        sizes: sensor
            .mbus_codes()
            .iter()
            .flat_map(|&code| sensor.sizes(code))
            .collect(),
        format: sensor.format(),
        sensor_info: sensor
            .sensor_info()
            .context("Failed to query sensor info")?,
        sensor_delays: *sensor.sensor_delays(),
        helper: HelperReport {
            requested: requested.to_string(),
            fallback: !registry.contains(requested),
            gain_codes: SAMPLE_GAINS
                .iter()
                .map(|&gain| GainSample::measure(helper.as_ref(), gain))
                .collect(),
        },
    })
}

fn print_report(report: &SensorReport) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Memory Sensor                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("📷 Sensor");
    println!("   ├─ Id: {}", report.id);
    println!("   ├─ Model: {}", report.model);
    println!("   ├─ Media bus codes: {}", report.mbus_codes.join(", "));
    let sizes: Vec<String> = report.sizes.iter().map(ToString::to_string).collect();
    println!("   ├─ Sizes: {}", sizes.join(", "));
    println!("   └─ Format: {}", report.format);

    let info = &report.sensor_info;
    println!("\n📐 Sensor Info");
    println!("   ├─ Bits per pixel: {}", info.bits_per_pixel);
    println!("   ├─ CFA pattern: {:?}", info.cfa_pattern);
    println!("   ├─ Active area: {}", info.active_area_size);
    println!("   ├─ Analog crop: {}", info.analog_crop);
    println!("   ├─ Output size: {}", info.output_size);
    println!("   ├─ Pixel rate: {}", info.pixel_rate);
    println!(
        "   ├─ Line length: {}..{}",
        info.min_line_length, info.max_line_length
    );
    println!(
        "   └─ Frame length: {}..{}",
        info.min_frame_length, info.max_frame_length
    );

    let delays = &report.sensor_delays;
    println!("\n⏱  Sensor Delays (frames)");
    println!("   ├─ Exposure: {}", delays.exposure_delay);
    println!("   ├─ Gain: {}", delays.gain_delay);
    println!("   ├─ VBlank: {}", delays.vblank_delay);
    println!("   └─ HBlank: {}", delays.hblank_delay);

    let helper = &report.helper;
    if helper.fallback {
        println!("\n🎚  Camera Helper: {} (not registered, using default)", helper.requested);
    } else {
        println!("\n🎚  Camera Helper: {}", helper.requested);
    }
    for (i, sample) in helper.gain_codes.iter().enumerate() {
        let prefix = if i == helper.gain_codes.len() - 1 { "└─" } else { "├─" };
        println!(
            "   {} gain {:>5.2} -> code {:>5} -> {:.3}",
            prefix, sample.gain, sample.code, sample.applied_gain
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{HelperSelection, PixelFormat, ProfileVersion, RawStreamConfig};

    fn profile(helper: &str) -> SensorProfile {
        SensorProfile {
            version: ProfileVersion::V1,
            raw_input: RawStreamConfig::new(PixelFormat::Srggb10_Csi2p, Size::new(1920, 1080)),
            helper: HelperSelection {
                name: helper.into(),
            },
        }
    }

    #[test]
    fn test_report_for_registered_helper() {
        let report = build_report(&profile("imx219")).unwrap();

        assert!(report.id.starts_with("memory:"));
        assert_eq!(report.mbus_codes, vec!["0x300f".to_string()]);
        assert_eq!(report.sizes, vec![Size::new(1920, 1080)]);
        assert!(!report.helper.fallback);
        assert_eq!(report.helper.gain_codes[1].code, 128);
    }

    #[test]
    fn test_report_falls_back_to_default_helper() {
        let report = build_report(&profile("ov9999")).unwrap();

        assert!(report.helper.fallback);
        assert!(report.helper.gain_codes.iter().all(|s| s.code == 0));
        assert!(report.helper.gain_codes.iter().all(|s| s.applied_gain == 1.0));
    }

    #[test]
    fn test_report_serializes() {
        let report = build_report(&profile("default")).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sensor_info"]["bits_per_pixel"], 10);
        assert_eq!(json["sensor_delays"]["exposure_delay"], 2);
    }
}
