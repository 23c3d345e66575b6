use immo_core::errors::ErrorCode;
use immo_core::types::FEATURE_NAMES;
use immo_core::{RawAttributes, Region, ValidationError, Warning};
use immo_features::{FeaturePipeline, GeoResolver};
use test_fixtures::{Expectation, RequestCase};

fn fixture_pipeline() -> FeaturePipeline {
    FeaturePipeline::new(GeoResolver::with_table(test_fixtures::geo_table_path()))
}

fn brussels_house() -> RawAttributes {
    RawAttributes::new()
        .with("area", 120)
        .with("property_type", "HOUSE")
        .with("bedrooms_number", 3)
        .with("zip_code", 1000)
        .with("garden", true)
}

#[test]
fn brussels_house_with_defaults() {
    let out = FeaturePipeline::default().assemble(&brussels_house()).unwrap();
    let v = out.vector;
    assert_eq!(v.type_encoded, 1);
    assert_eq!(v.hasgarden, 1);
    assert_eq!(v.region_brussels, 1);
    assert_eq!(v.region_flanders + v.region_wallonia, 0);
    assert_eq!(v.buildingcondition_encoded, 2);
    assert_eq!(v.epcscore_encoded, 4);
    assert_eq!(v.bedroomcount, 3);
    assert_eq!(v.habitablesurface, 120);
    assert_eq!(
        out.warnings,
        vec![
            Warning::BuildingStateDefaulted,
            Warning::EpcScoreDefaulted,
            Warning::GeoTableUnavailable { path: None },
        ]
    );
    assert!(!out.exact_location);
}

#[test]
fn exact_location_from_table() {
    let out = fixture_pipeline().assemble(&brussels_house()).unwrap();
    assert!(out.exact_location);
    assert_eq!(out.vector.latitude, 50.8427501);
    assert_eq!(out.warnings.len(), 2);
}

#[test]
fn advisory_joins_with_pipe() {
    let out = fixture_pipeline().assemble(&brussels_house()).unwrap();
    let advisory = out.advisory().unwrap();
    let parts: Vec<&str> = advisory.split('|').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("Building state is not provided"));
    assert!(parts[1].starts_with("EPC score is not provided"));
}

#[test]
fn fully_specified_input_has_no_advisory() {
    let raw = brussels_house()
        .with("building_state", "NEW")
        .with("epc_score", "A");
    let (vector, message) = fixture_pipeline().preprocess(&raw);
    assert!(vector.is_some());
    assert_eq!(message, None);
}

#[test]
fn failure_pair_carries_the_error() {
    let raw = brussels_house().with("area", -50);
    let (vector, message) = FeaturePipeline::default().preprocess(&raw);
    assert!(vector.is_none());
    assert!(message.unwrap().contains("Area"));
}

#[test]
fn invalid_building_state_is_not_defaulted() {
    let raw = brussels_house().with("building_state", "INVALID");
    let err = FeaturePipeline::default().assemble(&raw).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidBuildingState {
            value: "INVALID".into()
        }
    );
}

#[test]
fn building_state_error_precedes_epc_error() {
    let raw = brussels_house()
        .with("building_state", "SHINY")
        .with("epc_score", "Z");
    let err = FeaturePipeline::default().assemble(&raw).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_BUILDING_STATE");
}

#[test]
fn slot_order_is_canonical() {
    let out = FeaturePipeline::default().assemble(&brussels_house()).unwrap();
    let names: Vec<&str> = out.vector.iter().map(|(n, _)| n).collect();
    assert_eq!(names, FEATURE_NAMES.to_vec());
    let array = out.vector.to_array();
    assert_eq!(array[0], 3.0);
    assert_eq!(array[1], 120.0);
    assert_eq!(array[9], 1.0);
    assert_eq!(array[12], 1.0);
}

#[test]
fn region_decodes_from_vector() {
    let raw = brussels_house().with("zip_code", 6000);
    let out = FeaturePipeline::default().assemble(&raw).unwrap();
    assert_eq!(out.vector.region(), Some(Region::Wallonia));
}

#[test]
fn request_case_fixtures() {
    let pipeline = fixture_pipeline();
    let cases: Vec<RequestCase> = test_fixtures::request_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let raw = RawAttributes::from_value(case.data.clone())
            .unwrap_or_else(|| panic!("{}: data is not an object", case.name));
        match (pipeline.assemble(&raw), &case.expect) {
            (Ok(out), Expectation::Success { slots, warnings }) => {
                assert_eq!(out.warnings.len(), *warnings, "{}: {:?}", case.name, out.warnings);
                for (slot, expected) in slots {
                    let actual = out
                        .vector
                        .get(slot)
                        .unwrap_or_else(|| panic!("{}: unknown slot {slot}", case.name));
                    assert_eq!(Some(actual), expected.as_f64(), "{}: slot {slot}", case.name);
                }
            }
            (Err(err), Expectation::Failure { error_code, mentions }) => {
                assert_eq!(err.error_code(), error_code, "{}", case.name);
                assert!(
                    err.to_string().contains(mentions.as_str()),
                    "{}: '{err}' should mention '{mentions}'",
                    case.name
                );
            }
            (result, expect) => panic!("{}: got {result:?}, expected {expect:?}", case.name),
        }
    }
}
