//! edurisk harness: load config and model, score a JSON file of student
//! records (single object or array), print assessments as JSON.
//!
//! The model is loaded at startup and startup fails if the artifact or its
//! metadata sidecar is missing or malformed — there is no degraded mode that
//! scores everyone zero.

use edurisk::{
    config::EngineConfig,
    features::FeatureBuilder,
    logging::StructuredLogger,
    model::{LoadedModel, ModelHandle, ModelMetadata, OnnxModel},
    record::StudentMetrics,
    risk::{ReasonEngine, RiskService},
};
use std::io::Read;
use std::sync::Arc;
use tracing::info;

fn read_records(path: Option<&str>) -> Result<Vec<StudentMetrics>, Box<dyn std::error::Error + Send + Sync>> {
    let data = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    // Accept either one record or an array of records.
    let value: serde_json::Value = serde_json::from_str(&data)?;
    let records = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(records)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("EDURISK_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = EngineConfig::load(&config_path)?;

    StructuredLogger::init(config.log.json, &config.log.level);

    let builder = FeatureBuilder::new(config.model.feature_schema);
    let metadata = ModelMetadata::load(&config.model.metadata_path)?;
    let predictor = OnnxModel::load(&config.model.path, config.model.feature_schema.dim())?;
    info!(
        model_version = %metadata.version,
        schema = %metadata.feature_schema_id,
        "model loaded"
    );

    let handle = Arc::new(ModelHandle::new(LoadedModel::new(
        Box::new(predictor),
        metadata,
    )));
    let service = RiskService::new(
        builder,
        handle,
        config.thresholds.clone(),
        ReasonEngine::new(config.reasons.clone()),
    );

    let input_path = std::env::args().nth(1);
    let records = read_records(input_path.as_deref())?;
    info!(count = records.len(), "scoring records");

    let assessments = service.score_batch(&records)?;
    println!("{}", serde_json::to_string_pretty(&assessments)?);
    Ok(())
}
