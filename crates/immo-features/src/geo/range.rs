use immo_core::constants::{BRUSSELS_CENTROID, FLANDERS_CENTROID, WALLONIA_CENTROID};
use immo_core::errors::GeoError;
use immo_core::traits::GeoLookup;
use immo_core::{GeoRecord, PostalCode, Region};

/// Deterministic region guess from the postal-code range.
///
/// Coordinates are fixed regional centroids, so the result is approximate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeClassifier;

impl RangeClassifier {
    pub fn region(code: PostalCode) -> Region {
        match code.get() {
            1000..=1299 => Region::Brussels,
            1300..=1499 | 2000..=3999 | 8000..=9999 => Region::Flanders,
            _ => Region::Wallonia,
        }
    }

    pub fn centroid(region: Region) -> (f64, f64) {
        match region {
            Region::Brussels => BRUSSELS_CENTROID,
            Region::Flanders => FLANDERS_CENTROID,
            Region::Wallonia => WALLONIA_CENTROID,
        }
    }

    pub fn classify(&self, code: PostalCode) -> GeoRecord {
        let region = Self::region(code);
        let (latitude, longitude) = Self::centroid(region);
        GeoRecord {
            postal_code: code,
            latitude,
            longitude,
            region,
        }
    }
}

impl GeoLookup for RangeClassifier {
    fn source_name(&self) -> &'static str {
        "range"
    }

    fn lookup(&self, code: PostalCode) -> Result<Option<GeoRecord>, GeoError> {
        Ok(Some(self.classify(code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: i64) -> Region {
        RangeClassifier::region(PostalCode::new(code).unwrap())
    }

    #[test]
    fn range_edges() {
        assert_eq!(region(1000), Region::Brussels);
        assert_eq!(region(1299), Region::Brussels);
        assert_eq!(region(1300), Region::Flanders);
        assert_eq!(region(1499), Region::Flanders);
        assert_eq!(region(1500), Region::Wallonia);
        assert_eq!(region(1999), Region::Wallonia);
        assert_eq!(region(2000), Region::Flanders);
        assert_eq!(region(3999), Region::Flanders);
        assert_eq!(region(4000), Region::Wallonia);
        assert_eq!(region(7999), Region::Wallonia);
        assert_eq!(region(8000), Region::Flanders);
        assert_eq!(region(9999), Region::Flanders);
    }

    #[test]
    fn brussels_uses_city_centroid() {
        let rec = RangeClassifier.classify(PostalCode::new(1050).unwrap());
        assert_eq!((rec.latitude, rec.longitude), (50.8503, 4.3517));
    }
}
