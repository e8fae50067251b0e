//! Opaque model boundary: the engine only needs `predict(matrix) -> scores`
//! plus metadata carrying the feature-schema id the model was trained under.

mod onnx;

pub use onnx::OnnxModel;

use crate::error::EngineError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// A trained regressor. Input is an `[n, dim]` feature matrix; output is one
/// raw risk score per row, same order. Implementations must surface failures
/// as errors, never substitute a default score.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &Array2<f32>) -> Result<Vec<f32>, EngineError>;
}

/// Metadata saved alongside the trained artifact by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub version: String,
    #[serde(default)]
    pub training_date: Option<String>,
    /// Id of the feature schema the model was fit on, e.g. "raw/v1".
    pub feature_schema_id: String,
}

impl ModelMetadata {
    /// Read the JSON sidecar written next to the model artifact.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

/// A predictor paired with the metadata it shipped with.
pub struct LoadedModel {
    pub predictor: Box<dyn Predictor>,
    pub metadata: ModelMetadata,
}

impl LoadedModel {
    pub fn new(predictor: Box<dyn Predictor>, metadata: ModelMetadata) -> Self {
        Self { predictor, metadata }
    }
}

/// Shared read-only handle to the loaded model. Requests observe either the
/// old or the new fully-loaded model across a reload, never a partial one.
/// An empty handle makes `ModelUnavailable` explicit instead of defaulting
/// scores to zero.
pub struct ModelHandle {
    inner: RwLock<Option<Arc<LoadedModel>>>,
}

impl ModelHandle {
    pub fn new(model: LoadedModel) -> Self {
        Self {
            inner: RwLock::new(Some(Arc::new(model))),
        }
    }

    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Snapshot of the currently loaded model, if any.
    pub fn current(&self) -> Option<Arc<LoadedModel>> {
        self.inner.read().expect("model lock").clone()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().expect("model lock").is_some()
    }

    pub fn metadata(&self) -> Option<ModelMetadata> {
        self.current().map(|m| m.metadata.clone())
    }

    /// Atomically swap in a new fully-loaded model.
    pub fn reload(&self, model: LoadedModel) {
        let mut guard = self.inner.write().expect("model lock");
        *guard = Some(Arc::new(model));
    }
}
