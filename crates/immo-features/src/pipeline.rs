//! Feature assembler: validate → encode → resolve geography → merge.

use immo_core::config::GeoConfig;
use immo_core::{FeatureVector, RawAttributes, ValidationError, Warning};

use crate::encoders::{amenities, building_state, epc_score};
use crate::geo::GeoResolver;
use crate::validator::validate;

/// A successfully assembled vector plus its advisories.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub vector: FeatureVector,
    /// Building state, then EPC score, then geography.
    pub warnings: Vec<Warning>,
    pub exact_location: bool,
}

impl Assembled {
    /// Warnings joined into one advisory string, `None` when there are none.
    pub fn advisory(&self) -> Option<String> {
        Warning::join(&self.warnings)
    }

    pub fn into_pair(self) -> (Option<FeatureVector>, Option<String>) {
        let advisory = self.advisory();
        (Some(self.vector), advisory)
    }
}

/// Stateless apart from the geo resolver's shared table cache.
#[derive(Debug, Clone, Default)]
pub struct FeaturePipeline {
    geo: GeoResolver,
}

impl FeaturePipeline {
    pub fn new(geo: GeoResolver) -> Self {
        Self { geo }
    }

    pub fn from_config(config: &GeoConfig) -> Self {
        Self::new(GeoResolver::from_config(config))
    }

    pub fn geo(&self) -> &GeoResolver {
        &self.geo
    }

    /// Build the feature vector for `raw`, failing on the first invalid field.
    pub fn assemble(&self, raw: &RawAttributes) -> Result<Assembled, ValidationError> {
        let required = validate(raw)?;
        let building = building_state::encode(raw)?;
        let epc = epc_score::encode(raw)?;
        let flags = amenities::encode(raw);
        let geo = self.geo.resolve(required.postal_code);

        let [region_brussels, region_flanders, region_wallonia] = geo.record.region.one_hot();
        let vector = FeatureVector {
            bedroomcount: required.bedrooms,
            habitablesurface: required.area,
            haslift: flags.lift,
            hasgarden: flags.garden,
            hasswimmingpool: flags.swimming_pool,
            hasterrace: flags.terrace,
            hasparking: flags.parking,
            epcscore_encoded: epc.value,
            buildingcondition_encoded: building.value,
            region_brussels,
            region_flanders,
            region_wallonia,
            type_encoded: required.property_type.code(),
            latitude: geo.record.latitude,
            longitude: geo.record.longitude,
        };

        let warnings: Vec<Warning> = [building.warning, epc.warning, geo.warning]
            .into_iter()
            .flatten()
            .collect();

        tracing::debug!(
            postal_code = required.postal_code.get(),
            region = %geo.record.region,
            exact = geo.exact,
            warnings = warnings.len(),
            "assembled feature vector"
        );

        Ok(Assembled {
            vector,
            warnings,
            exact_location: geo.exact,
        })
    }

    /// Boundary form: `(vector, advisory)` on success, `(None, error)` on failure.
    pub fn preprocess(&self, raw: &RawAttributes) -> (Option<FeatureVector>, Option<String>) {
        match self.assemble(raw) {
            Ok(assembled) => assembled.into_pair(),
            Err(err) => (None, Some(err.to_string())),
        }
    }
}
