//! The fixed 15-slot feature vector the price model was trained on.
//!
//! Slot order is load-bearing: the predictor indexes positionally, so
//! `FEATURE_NAMES`, `to_array`, and the serialized field order must agree.

use serde::{Deserialize, Serialize};

use super::geo::Region;

pub const FEATURE_COUNT: usize = 15;

/// Canonical slot names in model order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "bedroomcount",
    "habitablesurface",
    "haslift",
    "hasgarden",
    "hasswimmingpool",
    "hasterrace",
    "hasparking",
    "epcscore_encoded",
    "buildingcondition_encoded",
    "region_Brussels",
    "region_Flanders",
    "region_Wallonia",
    "type_encoded",
    "latitude",
    "longitude",
];

/// One fully populated model input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub bedroomcount: u32,
    pub habitablesurface: u32,
    pub haslift: u8,
    pub hasgarden: u8,
    pub hasswimmingpool: u8,
    pub hasterrace: u8,
    pub hasparking: u8,
    pub epcscore_encoded: u8,
    pub buildingcondition_encoded: u8,
    #[serde(rename = "region_Brussels")]
    pub region_brussels: u8,
    #[serde(rename = "region_Flanders")]
    pub region_flanders: u8,
    #[serde(rename = "region_Wallonia")]
    pub region_wallonia: u8,
    pub type_encoded: u8,
    pub latitude: f64,
    pub longitude: f64,
}

impl FeatureVector {
    pub fn names() -> &'static [&'static str; FEATURE_COUNT] {
        &FEATURE_NAMES
    }

    /// Positional numeric view in canonical order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            f64::from(self.bedroomcount),
            f64::from(self.habitablesurface),
            f64::from(self.haslift),
            f64::from(self.hasgarden),
            f64::from(self.hasswimmingpool),
            f64::from(self.hasterrace),
            f64::from(self.hasparking),
            f64::from(self.epcscore_encoded),
            f64::from(self.buildingcondition_encoded),
            f64::from(self.region_brussels),
            f64::from(self.region_flanders),
            f64::from(self.region_wallonia),
            f64::from(self.type_encoded),
            self.latitude,
            self.longitude,
        ]
    }

    /// Look up a slot by its canonical name.
    pub fn get(&self, name: &str) -> Option<f64> {
        let idx = FEATURE_NAMES.iter().position(|n| *n == name)?;
        Some(self.to_array()[idx])
    }

    /// `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.to_array())
    }

    /// Decode the one-hot region slots. `None` unless exactly one is set.
    pub fn region(&self) -> Option<Region> {
        match (self.region_brussels, self.region_flanders, self.region_wallonia) {
            (1, 0, 0) => Some(Region::Brussels),
            (0, 1, 0) => Some(Region::Flanders),
            (0, 0, 1) => Some(Region::Wallonia),
            _ => None,
        }
    }
}
