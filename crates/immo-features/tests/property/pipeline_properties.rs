//! Property tests for the feature pipeline.

use immo_core::types::FEATURE_COUNT;
use immo_core::{RawAttributes, ValidationError, Warning};
use immo_features::{BuildingState, EpcScore, FeaturePipeline, PropertyType};
use proptest::prelude::*;

fn arb_property_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PropertyType::ALL.map(PropertyType::label).to_vec())
}

fn arb_building_state() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(
        BuildingState::ALL.map(BuildingState::label).to_vec(),
    ))
}

fn arb_epc() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(EpcScore::ALL.map(EpcScore::label).to_vec()))
}

prop_compose! {
    fn arb_valid_input()(
        area in 1i64..2_000,
        property_type in arb_property_type(),
        bedrooms in 0i64..20,
        zip in 1000i64..=9999,
        building in arb_building_state(),
        epc in arb_epc(),
        flags in prop::array::uniform5(prop::option::of(any::<bool>())),
    ) -> RawAttributes {
        let mut raw = RawAttributes::new()
            .with("area", area)
            .with("property_type", property_type)
            .with("bedrooms_number", bedrooms)
            .with("zip_code", zip);
        if let Some(b) = building {
            raw.insert("building_state", b);
        }
        if let Some(e) = epc {
            raw.insert("epc_score", e);
        }
        for (key, flag) in ["garden", "swimming_pool", "terrace", "parking", "lift"].iter().zip(flags) {
            if let Some(f) = flag {
                raw.insert(*key, f);
            }
        }
        raw
    }
}

proptest! {
    #[test]
    fn every_valid_input_fills_all_slots(raw in arb_valid_input()) {
        let out = FeaturePipeline::default().assemble(&raw).unwrap();
        let array = out.vector.to_array();
        prop_assert_eq!(array.len(), FEATURE_COUNT);
        prop_assert!(array.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn exactly_one_region(raw in arb_valid_input()) {
        let v = FeaturePipeline::default().assemble(&raw).unwrap().vector;
        prop_assert_eq!(v.region_brussels + v.region_flanders + v.region_wallonia, 1);
        prop_assert!(v.region().is_some());
    }

    #[test]
    fn brussels_range(zip in 1000i64..=1299, raw in arb_valid_input()) {
        let raw = raw.with("zip_code", zip);
        let v = FeaturePipeline::default().assemble(&raw).unwrap().vector;
        prop_assert_eq!((v.region_brussels, v.region_flanders, v.region_wallonia), (1, 0, 0));
    }

    #[test]
    fn missing_building_state_defaults(raw in arb_valid_input()) {
        let mut map = raw.as_map().clone();
        map.remove("building_state");
        let out = FeaturePipeline::default().assemble(&RawAttributes::from_map(map)).unwrap();
        prop_assert_eq!(out.vector.buildingcondition_encoded, 2);
        prop_assert!(out.warnings.contains(&Warning::BuildingStateDefaulted));
    }

    #[test]
    fn missing_epc_defaults(raw in arb_valid_input()) {
        let mut map = raw.as_map().clone();
        map.remove("epc_score");
        let out = FeaturePipeline::default().assemble(&RawAttributes::from_map(map)).unwrap();
        prop_assert_eq!(out.vector.epcscore_encoded, 4);
        prop_assert!(out.warnings.contains(&Warning::EpcScoreDefaulted));
    }

    #[test]
    fn assembly_is_idempotent(raw in arb_valid_input()) {
        let pipeline = FeaturePipeline::default();
        prop_assert_eq!(pipeline.assemble(&raw), pipeline.assemble(&raw));
    }

    #[test]
    fn out_of_range_postal_codes_fail(
        raw in arb_valid_input(),
        zip in prop_oneof![i64::MIN..1000i64, 10_000i64..i64::MAX],
    ) {
        let err = FeaturePipeline::default().assemble(&raw.with("zip_code", zip)).unwrap_err();
        prop_assert_eq!(err, ValidationError::InvalidPostalCode { value: zip.to_string() });
    }
}

#[test]
fn postal_code_boundaries() {
    let base = || {
        RawAttributes::new()
            .with("area", 100)
            .with("property_type", "HOUSE")
            .with("bedrooms_number", 2)
    };
    let pipeline = FeaturePipeline::default();
    assert!(pipeline.assemble(&base().with("zip_code", 1000)).is_ok());
    assert!(pipeline.assemble(&base().with("zip_code", 9999)).is_ok());
    for zip in [999, 10000] {
        assert!(matches!(
            pipeline.assemble(&base().with("zip_code", zip)),
            Err(ValidationError::InvalidPostalCode { .. })
        ));
    }
}
