use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detector: DetectorConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub model: ModelKind,
    /// Mirror keypoints horizontally so the overlay reads like a mirror.
    pub flip_horizontal: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            flip_horizontal: true,
        }
    }
}

/// MoveNet variants understood by `poseDetection.createDetector`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    MultiPoseLightning,
    SinglePoseLightning,
    SinglePoseThunder,
}

impl ModelKind {
    pub const FAMILY: &'static str = "MoveNet";

    pub fn model_type(self) -> &'static str {
        match self {
            Self::MultiPoseLightning => "MultiPose.Lightning",
            Self::SinglePoseLightning => "SinglePose.Lightning",
            Self::SinglePoseThunder => "SinglePose.Thunder",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Self::FAMILY, self.model_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.detector.model, ModelKind::MultiPoseLightning);
        assert!(config.detector.flip_horizontal);
        assert_eq!(Config::from_json("{}").unwrap(), config);
    }

    #[test]
    fn partial_override() {
        let config = Config::from_json(r#"{"detector": {"model": "single_pose_thunder"}}"#).unwrap();
        assert_eq!(config.detector.model, ModelKind::SinglePoseThunder);
        assert!(config.detector.flip_horizontal);

        let config = Config::from_json(r#"{"detector": {"flip_horizontal": false}}"#).unwrap();
        assert_eq!(config.detector.model, ModelKind::MultiPoseLightning);
        assert!(!config.detector.flip_horizontal);
    }

    #[test]
    fn malformed() {
        let err = Config::from_json(r#"{"detector": {"model": "posenet"}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn model_types() {
        assert_eq!(ModelKind::MultiPoseLightning.model_type(), "MultiPose.Lightning");
        assert_eq!(ModelKind::SinglePoseLightning.to_string(), "MoveNet SinglePose.Lightning");
    }
}
