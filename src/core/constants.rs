//! Physical constants and default simulator parameters

/// Fraction of right-wheel travel that survives a simulated traction fault
pub const SLIP_FACTOR: f64 = 0.7;

/// Default wheel diameters (cm)
pub const DEFAULT_WHEEL_DIAMETER_CM: f64 = 6.5;

/// Default distance between wheel contact points (cm)
pub const DEFAULT_WHEEL_SEPARATION_CM: f64 = 13.0;

/// Default encoder resolution (pulses per wheel revolution)
pub const DEFAULT_ENCODER_RESOLUTION: u32 = 360;

/// Default workspace extents (planar units)
pub const DEFAULT_WORKSPACE_WIDTH: f64 = 500.0;
pub const DEFAULT_WORKSPACE_HEIGHT: f64 = 500.0;

/// Default starting position and heading
pub const DEFAULT_ORIGIN_X: f64 = 40.0;
pub const DEFAULT_ORIGIN_Y: f64 = 450.0;
pub const DEFAULT_ORIGIN_HEADING_DEG: f64 = 0.0;
