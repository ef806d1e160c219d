//! CamHelper trait and the helpers shipped with this crate.

/// Sensor-specific gain translation
///
/// Maps a linear analogue gain (1.0 = unity) to the integer code a sensor
/// register expects, and back. Helpers are stateless.
pub trait CamHelper: Send + Sync {
    /// Register code for `gain`
    fn gain_code(&self, gain: f64) -> u32;

    /// Linear gain programmed by `gain_code`
    fn gain(&self, gain_code: u32) -> f64;
}

/// Fallback for sensors without a dedicated helper
///
/// Every gain encodes to code 0 and every code decodes to unity gain. Total
/// over its inputs: negative, NaN or huge gains are not errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCamHelper;

impl CamHelper for DefaultCamHelper {
    fn gain_code(&self, _gain: f64) -> u32 {
        0
    }

    fn gain(&self, _gain_code: u32) -> f64 {
        1.0
    }
}

/// `code = scale - scale / gain`, clamped to `[0, scale - 1]`
fn reciprocal_gain_code(gain: f64, scale: f64) -> u32 {
    if gain.is_nan() || gain <= 0.0 {
        return 0;
    }
    (scale - scale / gain).clamp(0.0, scale - 1.0) as u32
}

/// `gain = scale / (scale - code)`, code clamped to `scale - 1`
fn reciprocal_gain(gain_code: u32, scale: f64) -> f64 {
    let code = f64::from(gain_code).min(scale - 1.0);
    scale / (scale - code)
}

/// Sony IMX219 analogue gain
#[derive(Debug, Clone, Copy, Default)]
pub struct Imx219CamHelper;

impl Imx219CamHelper {
    const SCALE: f64 = 256.0;
}

impl CamHelper for Imx219CamHelper {
    fn gain_code(&self, gain: f64) -> u32 {
        reciprocal_gain_code(gain, Self::SCALE)
    }

    fn gain(&self, gain_code: u32) -> f64 {
        reciprocal_gain(gain_code, Self::SCALE)
    }
}

/// Sony IMX477 analogue gain
#[derive(Debug, Clone, Copy, Default)]
pub struct Imx477CamHelper;

impl Imx477CamHelper {
    const SCALE: f64 = 1024.0;
}

impl CamHelper for Imx477CamHelper {
    fn gain_code(&self, gain: f64) -> u32 {
        reciprocal_gain_code(gain, Self::SCALE)
    }

    fn gain(&self, gain_code: u32) -> f64 {
        reciprocal_gain(gain_code, Self::SCALE)
    }
}
