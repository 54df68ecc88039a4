use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::{DEFAULT_ENCODER_RESOLUTION, DEFAULT_WHEEL_DIAMETER_CM, DEFAULT_WHEEL_SEPARATION_CM};
use crate::utils::config::ConfigError;

/// Raw wheel geometry as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometryParams {
    /// Left wheel diameter (cm)
    pub left_wheel_diameter_cm: f64,
    /// Right wheel diameter (cm)
    pub right_wheel_diameter_cm: f64,
    /// Distance between wheel contact points (cm)
    pub wheel_separation_cm: f64,
    /// Encoder pulses per full wheel revolution
    pub encoder_resolution: u32,
}

impl Default for WheelGeometryParams {
    fn default() -> Self {
        Self {
            left_wheel_diameter_cm: DEFAULT_WHEEL_DIAMETER_CM,
            right_wheel_diameter_cm: DEFAULT_WHEEL_DIAMETER_CM,
            wheel_separation_cm: DEFAULT_WHEEL_SEPARATION_CM,
            encoder_resolution: DEFAULT_ENCODER_RESOLUTION,
        }
    }
}

/// Validated wheel geometry with its per-pulse travel constants.
///
/// The conversion constants are computed once at construction and never
/// change afterwards. A geometry with a non-positive dimension cannot be
/// built, so the engine never divides by a zero separation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WheelGeometryParams", into = "WheelGeometryParams")]
pub struct WheelGeometry {
    params: WheelGeometryParams,
    cm_per_pulse_left: f64,
    cm_per_pulse_right: f64,
}

impl WheelGeometry {
    pub fn new(
        left_wheel_diameter_cm: f64,
        right_wheel_diameter_cm: f64,
        wheel_separation_cm: f64,
        encoder_resolution: u32,
    ) -> Result<Self, ConfigError> {
        Self::from_params(WheelGeometryParams {
            left_wheel_diameter_cm,
            right_wheel_diameter_cm,
            wheel_separation_cm,
            encoder_resolution,
        })
    }

    pub fn from_params(params: WheelGeometryParams) -> Result<Self, ConfigError> {
        require_positive("left_wheel_diameter_cm", params.left_wheel_diameter_cm)?;
        require_positive("right_wheel_diameter_cm", params.right_wheel_diameter_cm)?;
        require_positive("wheel_separation_cm", params.wheel_separation_cm)?;
        if params.encoder_resolution == 0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "encoder_resolution".to_string(),
                value: "0".to_string(),
                reason: "Encoder resolution must be at least one pulse per revolution".to_string(),
            });
        }

        Ok(Self::with_pulse_constants(params))
    }

    fn with_pulse_constants(params: WheelGeometryParams) -> Self {
        let resolution = params.encoder_resolution as f64;
        Self {
            params,
            cm_per_pulse_left: PI * params.left_wheel_diameter_cm / resolution,
            cm_per_pulse_right: PI * params.right_wheel_diameter_cm / resolution,
        }
    }

    pub fn params(&self) -> &WheelGeometryParams {
        &self.params
    }

    #[inline]
    pub fn cm_per_pulse_left(&self) -> f64 {
        self.cm_per_pulse_left
    }

    #[inline]
    pub fn cm_per_pulse_right(&self) -> f64 {
        self.cm_per_pulse_right
    }

    #[inline]
    pub fn wheel_separation_cm(&self) -> f64 {
        self.params.wheel_separation_cm
    }

    /// Linear travel of each wheel for the given tick counts, before any slip
    pub fn wheel_travel(&self, left_ticks: i32, right_ticks: i32) -> (f64, f64) {
        (
            left_ticks as f64 * self.cm_per_pulse_left,
            right_ticks as f64 * self.cm_per_pulse_right,
        )
    }
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self::with_pulse_constants(WheelGeometryParams::default())
    }
}

impl TryFrom<WheelGeometryParams> for WheelGeometry {
    type Error = ConfigError;

    fn try_from(params: WheelGeometryParams) -> Result<Self, Self::Error> {
        Self::from_params(params)
    }
}

impl From<WheelGeometry> for WheelGeometryParams {
    fn from(geometry: WheelGeometry) -> Self {
        geometry.params
    }
}

fn require_positive(parameter: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: "Must be a finite value greater than zero".to_string(),
        })
    }
}
