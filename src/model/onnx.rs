//! ONNX Runtime predictor. Input: [n, feature_dim] f32, output: n raw scores.
//!
//! The regressor is trained and exported to ONNX by the external training
//! pipeline; this side only runs sessions. A missing or malformed artifact is
//! a load error, and a failed run is an inference error — there is no silent
//! zero-score fallback.

use super::Predictor;
use crate::error::EngineError;
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use std::path::Path;
use std::sync::Mutex;

pub struct OnnxModel {
    // `Session::run` needs mutable access; requests serialize on this lock.
    session: Mutex<Session>,
    input_name: String,
    output_name: String,
    feature_dim: usize,
}

impl OnnxModel {
    pub fn load(path: &Path, feature_dim: usize) -> Result<Self, EngineError> {
        if !path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("model artifact not found: {}", path.display()),
            )
            .into());
        }

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "output".to_string());

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            feature_dim,
        })
    }
}

impl Predictor for OnnxModel {
    fn predict(&self, features: &Array2<f32>) -> Result<Vec<f32>, EngineError> {
        let n = features.nrows();
        if features.ncols() != self.feature_dim {
            return Err(EngineError::Inference(format!(
                "expected {} feature columns, got {}",
                self.feature_dim,
                features.ncols()
            )));
        }

        let input = Value::from_array(features.clone())
            .map_err(|e| EngineError::Inference(format!("input tensor: {e}")))?;

        let mut session = self.session.lock().expect("session lock");
        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input])
            .map_err(|e| EngineError::Inference(format!("session run: {e}")))?;

        let output = outputs
            .get(self.output_name.as_str())
            .ok_or_else(|| EngineError::Inference("model produced no output".to_string()))?;
        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| EngineError::Inference(format!("output tensor: {e}")))?;

        if data.len() != n {
            return Err(EngineError::Inference(format!(
                "expected {n} scores, model returned {}",
                data.len()
            )));
        }
        Ok(data.to_vec())
    }
}
