//! # Integration Tests
//!
//! Cross-crate and end-to-end tests.
//!
//! Covers:
//! - profile -> loader -> memory sensor -> negotiation
//! - memory sensor format negotiation boundaries
//! - camera helper registry lifecycle under concurrency

#[cfg(test)]
mod e2e_tests {
    use cam_helper::HelperRegistry;
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{CameraSensor, ControlList, Orientation, SensorConfiguration, Size, Transform};
    use memory_sensor::MemorySensor;

    const PROFILE: &str = r#"
[raw_input]
pixel_format = "SRGGB10_CSI2P"
width = 1920
height = 1080

[helper]
name = "imx219"
"#;

    /// End-to-end: profile text -> SensorProfile -> MemorySensor -> pipeline calls
    #[test]
    fn test_e2e_profile_to_negotiated_sensor() {
        let profile = ConfigLoader::load_from_str(PROFILE, ConfigFormat::Toml).unwrap();
        let mut sensor = MemorySensor::new(&profile.raw_input).unwrap();

        assert_eq!(sensor.resolution(), Size::new(1920, 1080));

        // Pipeline negotiation, as a camera manager would do it
        let codes = sensor.mbus_codes().to_vec();
        let format = sensor
            .get_format(&codes, Size::new(1280, 720), Size::new(4096, 4096))
            .expect("format within bounds");
        sensor.try_format(&format).unwrap();
        sensor.set_format(&format, Transform::Identity).unwrap();

        let mut orientation = Orientation::Rotate180;
        let transform = sensor.compute_transform(&mut orientation);
        assert_eq!(orientation, Orientation::Rotate0);

        let applied = sensor
            .apply_configuration(
                &SensorConfiguration::full_frame(10, Size::new(1920, 1080)),
                transform,
            )
            .unwrap();
        assert_eq!(applied, format);

        let info = sensor.sensor_info().unwrap();
        assert_eq!(info.output_size, Size::new(1920, 1080));
        assert_eq!(info.pixel_rate, 1);
        assert_eq!(info.min_line_length, 1);
        assert_eq!(info.max_line_length, 1);
        assert_eq!(info.min_frame_length, 1);
        assert_eq!(info.max_frame_length, 1);

        let registry = HelperRegistry::builtin().unwrap();
        let helper = registry.create(profile.helper.name.as_str()).unwrap();
        assert_eq!(helper.gain_code(2.0), 128);
    }

    #[test]
    fn test_e2e_sensor_is_read_only() {
        let profile = ConfigLoader::load_from_str(PROFILE, ConfigFormat::Toml).unwrap();
        let mut sensor = MemorySensor::new(&profile.raw_input).unwrap();
        let before = sensor.format();

        assert!(sensor
            .set_format(&before, Transform::HFlip)
            .unwrap_err()
            .is_not_permitted());
        assert!(sensor
            .set_controls(&ControlList::new())
            .unwrap_err()
            .is_not_permitted());
        assert!(sensor
            .set_embedded_data_enabled(true)
            .unwrap_err()
            .is_unsupported());
        sensor.set_embedded_data_enabled(false).unwrap();

        assert_eq!(sensor.format(), before);
        assert!(sensor.get_controls(&[]).is_empty());
    }

    #[test]
    fn test_e2e_every_raw_format_yields_one_code() {
        use contracts::{BayerFormat, PixelFormat};

        let size = Size::new(640, 480);
        for format in PixelFormat::all() {
            if BayerFormat::from_pixel_format(format).is_err() {
                continue;
            }
            let sensor =
                MemorySensor::new(&contracts::RawStreamConfig::new(format, size)).unwrap();
            assert_eq!(sensor.mbus_codes().len(), 1, "{format}");

            let code = sensor.mbus_codes()[0];
            assert_eq!(sensor.sizes(code), vec![size], "{format}");
            assert!(sensor.sizes(contracts::MbusCode(code.0 + 1)).is_empty());
        }
    }
}

#[cfg(test)]
mod negotiation_tests {
    use contracts::{
        Binning, CameraSensor, ColorSpace, MbusCode, PixelFormat, RawStreamConfig,
        SensorConfiguration, Size, Skipping, SubdeviceFormat, TestPatternMode, Transform,
    };
    use memory_sensor::MemorySensor;

    fn sensor() -> MemorySensor {
        MemorySensor::new(&RawStreamConfig::new(
            PixelFormat::Sgbrg12,
            Size::new(1920, 1080),
        ))
        .unwrap()
    }

    #[test]
    fn test_max_size_boundary() {
        let sensor = sensor();
        let codes = [MbusCode::SGBRG12_1X12];
        let any = Size::new(1, 1);

        assert!(sensor
            .get_format(&codes, any, Size::new(1920, 1080))
            .is_some());
        assert!(sensor
            .get_format(&codes, any, Size::new(1919, 1080))
            .is_none());
        assert!(sensor
            .get_format(&codes, any, Size::new(1920, 1079))
            .is_none());
        assert!(sensor
            .get_format(&[MbusCode::SRGGB12_1X12], any, Size::new(8192, 8192))
            .is_none());
    }

    #[test]
    fn test_single_field_mismatches_fail() {
        let mut sensor = sensor();
        let exact = sensor.format();

        let variants = [
            SubdeviceFormat {
                code: MbusCode::SGRBG12_1X12,
                ..exact
            },
            SubdeviceFormat {
                size: Size::new(1920, 1081),
                ..exact
            },
            SubdeviceFormat {
                color_space: Some(ColorSpace::Srgb),
                ..exact
            },
            SubdeviceFormat {
                color_space: None,
                ..exact
            },
        ];

        for variant in variants {
            assert!(sensor.try_format(&variant).unwrap_err().is_not_permitted());
            assert!(sensor
                .set_format(&variant, Transform::Identity)
                .unwrap_err()
                .is_not_permitted());
        }
        sensor.try_format(&exact).unwrap();
    }

    #[test]
    fn test_configuration_deviations_fail() {
        let mut sensor = sensor();
        let base = SensorConfiguration::full_frame(12, Size::new(1920, 1080));

        let deviations = [
            SensorConfiguration {
                binning: Binning { bin_x: 2, bin_y: 1 },
                ..base
            },
            SensorConfiguration {
                skipping: Skipping {
                    y_odd_inc: 3,
                    ..Skipping::default()
                },
                ..base
            },
            SensorConfiguration {
                bit_depth: 10,
                ..base
            },
            SensorConfiguration {
                output_size: Size::new(960, 540),
                ..base
            },
        ];

        for config in deviations {
            let err = sensor
                .apply_configuration(&config, Transform::Identity)
                .unwrap_err();
            assert!(err.is_not_permitted(), "{config:?}");
        }

        assert!(sensor
            .apply_configuration(&base, Transform::Rot180)
            .unwrap_err()
            .is_not_permitted());
        assert!(sensor
            .apply_configuration(&base, Transform::Identity)
            .is_ok());
    }

    #[test]
    fn test_test_patterns_always_fail() {
        let mut sensor = sensor();
        for mode in [TestPatternMode::Off, TestPatternMode::ColorBars] {
            assert!(sensor.set_test_pattern_mode(mode).is_err());
        }
    }
}

#[cfg(test)]
mod registry_tests {
    use std::thread;

    use cam_helper::{
        register_builtin_helpers, CamHelper, CamHelperError, DefaultCamHelper,
        HelperRegistryBuilder, DEFAULT_HELPER_NAME,
    };

    #[test]
    fn test_default_helper_through_registry() {
        let builder = HelperRegistryBuilder::new();
        register_builtin_helpers(&builder).unwrap();
        let registry = builder.freeze();

        let helper = registry.create(DEFAULT_HELPER_NAME).unwrap();
        for gain in [0.0, 1.0, -5.0, 1e9] {
            assert_eq!(helper.gain_code(gain), 0);
        }
        for code in [0, 1, 4_294_967_295] {
            assert_eq!(helper.gain(code), 1.0);
        }

        assert!(matches!(
            registry.create("unregistered-name"),
            Err(CamHelperError::UnknownSensor { .. })
        ));
    }

    #[test]
    fn test_concurrent_registration_then_lookup() {
        let builder = HelperRegistryBuilder::new();

        thread::scope(|scope| {
            scope.spawn(|| register_builtin_helpers(&builder).unwrap());
            for i in 0..8 {
                let builder = &builder;
                scope.spawn(move || {
                    builder
                        .register(format!("sensor{i}"), || {
                            Box::new(DefaultCamHelper) as Box<dyn CamHelper>
                        })
                        .unwrap();
                });
            }
        });

        let registry = builder.freeze();
        assert_eq!(registry.len(), 11);

        thread::scope(|scope| {
            for i in 0..8 {
                let registry = &registry;
                scope.spawn(move || {
                    let helper = registry.create(&format!("sensor{i}")).unwrap();
                    assert_eq!(helper.gain(7), 1.0);
                    assert_eq!(registry.create("imx477").unwrap().gain_code(2.0), 512);
                });
            }
        });
    }

    #[test]
    fn test_concurrent_duplicate_registration_keeps_one() {
        let builder = HelperRegistryBuilder::new();

        let accepted: usize = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        builder
                            .register("shared", || Box::new(DefaultCamHelper))
                            .is_ok()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| usize::from(handle.join().unwrap()))
                .sum()
        });

        assert_eq!(accepted, 1);
        assert_eq!(builder.freeze().len(), 1);
    }
}
