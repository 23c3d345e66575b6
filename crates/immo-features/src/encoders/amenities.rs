use immo_core::{AttributeField, Field, RawAttributes};
use serde_json::Value;

/// Boolean amenity flags. Absent values encode to 0.
///
/// Recognized spellings (`true`, `"yes"`, `"off"`, `0`, ...) are read as
/// booleans; any other value falls back to JSON truthiness, so a non-empty
/// string, array, or object counts as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amenities {
    pub garden: u8,
    pub swimming_pool: u8,
    pub terrace: u8,
    pub parking: u8,
    pub lift: u8,
}

/// Encode the five amenity flags. Never fails and never warns.
pub fn encode(raw: &RawAttributes) -> Amenities {
    Amenities {
        garden: flag(raw, AttributeField::Garden),
        swimming_pool: flag(raw, AttributeField::SwimmingPool),
        terrace: flag(raw, AttributeField::Terrace),
        parking: flag(raw, AttributeField::Parking),
        lift: flag(raw, AttributeField::Lift),
    }
}

fn flag(raw: &RawAttributes, field: AttributeField) -> u8 {
    match raw.flag(field) {
        Field::Present(true) => 1,
        Field::Present(false) | Field::Absent => 0,
        Field::Invalid(value) => {
            let set = truthy(&value);
            tracing::debug!(field = field.name(), %value, set, "amenity flag is not a boolean spelling, using truthiness");
            u8::from(set)
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
