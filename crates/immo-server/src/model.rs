//! Linear price model loaded from JSON.
//!
//! File format: `{"intercept": f64, "coefficients": {"<slot name>": f64, ...}}`.
//! Slots without a coefficient contribute nothing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use immo_core::errors::PredictionError;
use immo_core::traits::PricePredictor;
use immo_core::types::{FEATURE_COUNT, FEATURE_NAMES};
use immo_core::FeatureVector;

#[derive(Debug, Deserialize)]
struct ModelFile {
    intercept: f64,
    #[serde(default)]
    coefficients: BTreeMap<String, f64>,
}

/// `price = intercept + Σ weight[i] * slot[i]` over the canonical slots.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPriceModel {
    intercept: f64,
    weights: [f64; FEATURE_COUNT],
}

impl LinearPriceModel {
    pub fn new(intercept: f64, weights: [f64; FEATURE_COUNT]) -> Self {
        Self { intercept, weights }
    }

    pub fn load(path: &Path) -> Result<Self, PredictionError> {
        let source = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PredictionError::ModelNotFound {
                path: source.clone(),
            },
            _ => PredictionError::ModelParse {
                path: source.clone(),
                message: e.to_string(),
            },
        })?;
        let model = Self::from_json(&source, &content)?;
        tracing::info!(path = %path.display(), intercept = model.intercept, "loaded price model");
        Ok(model)
    }

    /// Parse a model document. `source` names it in errors.
    pub fn from_json(source: &str, json: &str) -> Result<Self, PredictionError> {
        let file: ModelFile =
            serde_json::from_str(json).map_err(|e| PredictionError::ModelParse {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let mut weights = [0.0; FEATURE_COUNT];
        for (name, weight) in file.coefficients {
            let idx = FEATURE_NAMES
                .iter()
                .position(|n| *n == name)
                .ok_or(PredictionError::UnknownFeature { name })?;
            weights[idx] = weight;
        }
        Ok(Self::new(file.intercept, weights))
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn weight(&self, slot: &str) -> Option<f64> {
        let idx = FEATURE_NAMES.iter().position(|n| *n == slot)?;
        Some(self.weights[idx])
    }
}

impl PricePredictor for LinearPriceModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let value = features
            .to_array()
            .iter()
            .zip(self.weights)
            .fold(self.intercept, |acc, (x, w)| acc + x * w);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PredictionError::NonFiniteOutput { value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector() -> FeatureVector {
        FeatureVector {
            bedroomcount: 2,
            habitablesurface: 100,
            haslift: 0,
            hasgarden: 1,
            hasswimmingpool: 0,
            hasterrace: 0,
            hasparking: 0,
            epcscore_encoded: 4,
            buildingcondition_encoded: 2,
            region_brussels: 0,
            region_flanders: 1,
            region_wallonia: 0,
            type_encoded: 1,
            latitude: 51.0,
            longitude: 4.5,
        }
    }

    #[test]
    fn evaluates_weighted_sum() {
        let json = r#"{"intercept": 1000.0, "coefficients": {"habitablesurface": 10.0, "hasgarden": 500.0}}"#;
        let model = LinearPriceModel::from_json("inline", json).unwrap();
        assert_eq!(model.predict(&vector()).unwrap(), 2500.0);
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let json = r#"{"intercept": 0.0, "coefficients": {"rooms": 1.0}}"#;
        let err = LinearPriceModel::from_json("inline", json).unwrap_err();
        assert!(matches!(err, PredictionError::UnknownFeature { name } if name == "rooms"));
    }

    #[test]
    fn non_finite_output_is_rejected() {
        let mut weights = [0.0; FEATURE_COUNT];
        weights[1] = f64::INFINITY;
        let model = LinearPriceModel::new(0.0, weights);
        assert!(matches!(
            model.predict(&vector()),
            Err(PredictionError::NonFiniteOutput { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, r#"{"intercept": 42.0, "coefficients": {"haslift": 3.0}}"#).unwrap();
        let model = LinearPriceModel::load(&path).unwrap();
        assert_eq!(model.intercept(), 42.0);
        assert_eq!(model.weight("haslift"), Some(3.0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = LinearPriceModel::from_json("inline", "{").unwrap_err();
        assert!(matches!(err, PredictionError::ModelParse { .. }));
    }
}
