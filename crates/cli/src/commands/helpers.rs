//! `helpers` command implementation.

use anyhow::{Context, Result};
use cam_helper::HelperRegistry;
use serde::Serialize;

use super::info::GainSample;
use crate::cli::HelpersArgs;

#[derive(Serialize)]
struct HelperEntry {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    encoded: Option<GainSample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decoded: Option<DecodedCode>,
}

#[derive(Serialize)]
struct DecodedCode {
    code: u32,
    gain: f64,
}

/// Execute the `helpers` command
pub fn run_helpers(args: &HelpersArgs) -> Result<()> {
    let registry = HelperRegistry::builtin().context("Failed to register camera helpers")?;
    let entries = build_entries(&registry, args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize helper list")?;
        println!("{}", json);
    } else {
        print_entries(&entries);
    }

    Ok(())
}

fn build_entries(registry: &HelperRegistry, args: &HelpersArgs) -> Result<Vec<HelperEntry>> {
    registry
        .names()
        .into_iter()
        .map(|name| {
            let helper = registry
                .create(name.as_str())
                .with_context(|| format!("Failed to create helper '{name}'"))?;

            Ok(HelperEntry {
                name: name.to_string(),
                encoded: args
                    .gain
                    .map(|gain| GainSample::measure(helper.as_ref(), gain)),
                decoded: args.code.map(|code| DecodedCode {
                    code,
                    gain: helper.gain(code),
                }),
            })
        })
        .collect()
}

fn print_entries(entries: &[HelperEntry]) {
    println!("🎚  Camera Helpers ({})", entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == entries.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };

        println!("   {} {}", prefix, entry.name);
        if let Some(ref sample) = entry.encoded {
            println!(
                "   {}  gain {} -> code {} (applied {:.3})",
                child_prefix, sample.gain, sample.code, sample.applied_gain
            );
        }
        if let Some(ref decoded) = entry.decoded {
            println!(
                "   {}  code {} -> gain {:.3}",
                child_prefix, decoded.code, decoded.gain
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(gain: Option<f64>, code: Option<u32>) -> HelpersArgs {
        HelpersArgs {
            gain,
            code,
            json: false,
        }
    }

    #[test]
    fn test_lists_builtin_helpers() {
        let registry = HelperRegistry::builtin().unwrap();
        let entries = build_entries(&registry, &args(None, None)).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["default", "imx219", "imx477"]);
        assert!(entries.iter().all(|e| e.encoded.is_none() && e.decoded.is_none()));
    }

    #[test]
    fn test_encodes_and_decodes_through_each_helper() {
        let registry = HelperRegistry::builtin().unwrap();
        let entries = build_entries(&registry, &args(Some(2.0), Some(0))).unwrap();

        let default = &entries[0];
        assert_eq!(default.encoded.as_ref().unwrap().code, 0);
        assert_eq!(default.decoded.as_ref().unwrap().gain, 1.0);

        let imx477 = &entries[2];
        assert_eq!(imx477.encoded.as_ref().unwrap().code, 512);
        assert_eq!(imx477.decoded.as_ref().unwrap().gain, 1.0);
    }
}
