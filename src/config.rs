//! Engine configuration: model artifact location, feature schema, threshold
//! table, reason policy, logging. JSON file with full defaults.

use crate::error::EngineError;
use crate::features::FeatureSchema;
use crate::risk::{ReasonPolicy, ThresholdTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub model: ModelConfig,
    /// Classification bands. Validated on load; a table with gaps, overlaps,
    /// or no terminal band is a config error, not a fallback to defaults.
    pub thresholds: ThresholdTable,
    pub reasons: ReasonPolicy,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX regressor exported by the training pipeline.
    pub path: PathBuf,
    /// JSON sidecar with version, training date, and feature schema id.
    pub metadata_path: PathBuf,
    /// Schema the serving-side feature builder emits. Must match the loaded
    /// model's `feature_schema_id`.
    pub feature_schema: FeatureSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            thresholds: ThresholdTable::default(),
            reasons: ReasonPolicy::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("risk_model.onnx"),
            metadata_path: PathBuf::from("risk_model.meta.json"),
            feature_schema: FeatureSchema::RawV1,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file; a missing file yields defaults, but a present
    /// file that fails to parse or validate is an error. Silently defaulting
    /// over a malformed threshold table would change classifications.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| EngineError::Config(e.to_string()))
    }
}
