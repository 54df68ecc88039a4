use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::control::session::DistancePolicy;
use crate::core::{Pose, Workspace};
use crate::kinematics::geometry::WheelGeometry;

/// Simulator configuration: robot geometry, operating area and start pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Wheel diameters, separation and encoder resolution
    pub geometry: WheelGeometry,
    /// Rectangular area the robot must stay strictly inside
    pub workspace: Workspace,
    /// Pose restored on every reset
    pub initial_pose: Pose,
    /// How traveled distance accrues per accepted move
    pub distance_policy: DistancePolicy,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            geometry: WheelGeometry::default(),
            workspace: Workspace::default(),
            initial_pose: Pose::default(),
            distance_policy: DistancePolicy::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },
    /// Configuration file I/O error
    #[error("I/O error: {message}")]
    Io { message: String },
    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SimulatorConfig {
    /// Check cross-field constraints. Geometry is validated on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_placement(&self.workspace, &self.initial_pose)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config = Self::from_json(&content).map_err(|e| match e {
            ConfigError::Serialization { message } => ConfigError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, message),
            },
            other => other,
        })?;

        info!("Loaded simulator configuration from {}", path_str);
        Ok(config)
    }

    /// Parse and validate a configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let mut config: SimulatorConfig = serde_json::from_str(content).map_err(|e| ConfigError::Serialization {
            message: e.to_string(),
        })?;
        config.validate()?;

        let pose = config.initial_pose;
        config.initial_pose = Pose::new(pose.x, pose.y, pose.heading_deg);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Write the configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let content = self.to_json()?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    pub fn with_workspace(mut self, width: f64, height: f64) -> Self {
        self.workspace = Workspace::new(width, height);
        self
    }

    pub fn with_initial_pose(mut self, x: f64, y: f64, heading_deg: f64) -> Self {
        self.initial_pose = Pose::new(x, y, heading_deg);
        self
    }

    pub fn with_geometry(mut self, geometry: WheelGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_distance_policy(mut self, policy: DistancePolicy) -> Self {
        self.distance_policy = policy;
        self
    }
}

/// Check that the workspace has positive extents and the pose lies
/// strictly inside it.
pub fn validate_placement(workspace: &Workspace, pose: &Pose) -> Result<(), ConfigError> {
    for (parameter, value) in [("workspace.width", workspace.width), ("workspace.height", workspace.height)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: parameter.to_string(),
                value: value.to_string(),
                reason: "Workspace extents must be finite and greater than zero".to_string(),
            });
        }
    }

    if !pose.heading_deg.is_finite() {
        return Err(ConfigError::InvalidParameter {
            parameter: "initial_pose.heading_deg".to_string(),
            value: pose.heading_deg.to_string(),
            reason: "Heading must be a finite angle".to_string(),
        });
    }

    if !workspace.contains(&pose.position()) {
        return Err(ConfigError::InvalidParameter {
            parameter: "initial_pose".to_string(),
            value: format!("({}, {})", pose.x, pose.y),
            reason: format!(
                "Initial position must lie strictly inside the {}x{} workspace",
                workspace.width, workspace.height
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_matches_simulator() {
        let config = SimulatorConfig::default();
        assert_eq!(config.geometry.params().wheel_separation_cm, 13.0);
        assert_eq!(config.geometry.params().encoder_resolution, 360);
        assert_eq!(config.workspace, Workspace::new(500.0, 500.0));
        assert_eq!(config.initial_pose, Pose::new(40.0, 450.0, 0.0));
        assert_eq!(config.distance_policy, DistancePolicy::Centerline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulatorConfig::from_json(r#"{ "workspace": { "width": 800.0, "height": 600.0 } }"#).unwrap();
        assert_eq!(config.workspace, Workspace::new(800.0, 600.0));
        assert_eq!(config.initial_pose, Pose::default());
        assert_eq!(config.geometry, WheelGeometry::default());
    }

    #[test]
    fn test_invalid_geometry_in_json() {
        let json = r#"{
            "geometry": {
                "left_wheel_diameter_cm": 6.5,
                "right_wheel_diameter_cm": 6.5,
                "wheel_separation_cm": -13.0,
                "encoder_resolution": 360
            }
        }"#;
        let result = SimulatorConfig::from_json(json);
        assert!(matches!(result, Err(ConfigError::Serialization { .. })));
    }

    #[test]
    fn test_initial_heading_normalized_on_load() {
        let config = SimulatorConfig::from_json(
            r#"{ "initial_pose": { "x": 100.0, "y": 100.0, "heading_deg": 400.0 } }"#,
        )
        .unwrap();
        assert!((config.initial_pose.heading_deg - 40.0).abs() < 1e-9);

        let config = SimulatorConfig::from_json(
            r#"{ "initial_pose": { "x": 100.0, "y": 100.0, "heading_deg": -90.0 } }"#,
        )
        .unwrap();
        assert!((config.initial_pose.heading_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_pose_outside_workspace() {
        let config = SimulatorConfig::default().with_initial_pose(600.0, 10.0, 0.0);
        match config.validate() {
            Err(ConfigError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "initial_pose"),
            other => panic!("unexpected result: {:?}", other),
        }

        let config = SimulatorConfig::default().with_initial_pose(0.0, 10.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_workspace() {
        let config = SimulatorConfig::default().with_workspace(500.0, 0.0);
        match config.validate() {
            Err(ConfigError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "workspace.height"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = SimulatorConfig::default()
            .with_workspace(300.0, 200.0)
            .with_initial_pose(150.0, 100.0, 90.0)
            .with_distance_policy(DistancePolicy::CommandedTranslation);

        config.save_to_file(&path).unwrap();
        let loaded = SimulatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = SimulatorConfig::from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
