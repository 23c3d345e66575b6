//! Loosely typed caller input and its typed per-field accessors.
//!
//! Callers send a JSON object whose keys may use the canonical snake_case
//! name, the hyphenated boundary spelling, or a legacy name. Each accessor
//! resolves the aliases in a fixed order and returns a tri-state [`Field`]:
//! absent, present but of the wrong shape, or present and typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recognized input attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeField {
    Area,
    PropertyType,
    BedroomsNumber,
    ZipCode,
    BuildingState,
    EpcScore,
    Garden,
    SwimmingPool,
    Terrace,
    Parking,
    Lift,
}

impl AttributeField {
    pub const ALL: [AttributeField; 11] = [
        Self::Area,
        Self::PropertyType,
        Self::BedroomsNumber,
        Self::ZipCode,
        Self::BuildingState,
        Self::EpcScore,
        Self::Garden,
        Self::SwimmingPool,
        Self::Terrace,
        Self::Parking,
        Self::Lift,
    ];

    /// Required fields, in the order their presence is checked.
    pub const REQUIRED: [AttributeField; 4] = [
        Self::Area,
        Self::PropertyType,
        Self::BedroomsNumber,
        Self::ZipCode,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        self.keys()[0]
    }

    /// Every accepted key, canonical first, then aliases in lookup order.
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Area => &["area"],
            Self::PropertyType => &["property_type", "property-type"],
            Self::BedroomsNumber => &[
                "bedrooms_number",
                "bedrooms-number",
                "rooms_number",
                "rooms-number",
            ],
            Self::ZipCode => &["zip_code", "zip-code"],
            Self::BuildingState => &["building_state", "building-state"],
            Self::EpcScore => &["epc_score", "epc-score"],
            Self::Garden => &["garden"],
            Self::SwimmingPool => &["swimming_pool", "swimming-pool", "swimmingpool"],
            Self::Terrace => &["terrace"],
            Self::Parking => &["parking"],
            Self::Lift => &["lift"],
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Map any accepted key (canonical or alias) back to its field.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.keys().contains(&key))
    }
}

/// Result of reading one field: absent vs. invalid vs. present.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// No key for this field, or every matching key is `null`.
    Absent,
    /// A value exists but has the wrong shape for this field.
    Invalid(Value),
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

/// Raw attribute mapping as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAttributes(Map<String, Value>);

impl RawAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a JSON value. Returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// First non-null value among the field's keys, in alias order.
    pub fn raw(&self, field: AttributeField) -> Option<&Value> {
        field
            .keys()
            .iter()
            .filter_map(|key| self.0.get(*key))
            .find(|v| !v.is_null())
    }

    /// Integer view. Whole floats such as `120.0` are accepted.
    pub fn integer(&self, field: AttributeField) -> Field<i64> {
        let Some(value) = self.raw(field) else {
            return Field::Absent;
        };
        match value.as_i64().or_else(|| whole_number(value)) {
            Some(n) => Field::Present(n),
            None => Field::Invalid(value.clone()),
        }
    }

    /// String view. Non-string values are invalid.
    pub fn text(&self, field: AttributeField) -> Field<&str> {
        match self.raw(field) {
            None => Field::Absent,
            Some(Value::String(s)) => Field::Present(s.as_str()),
            Some(other) => Field::Invalid(other.clone()),
        }
    }

    /// Boolean view with truthiness over numbers and common string spellings.
    pub fn flag(&self, field: AttributeField) -> Field<bool> {
        let Some(value) = self.raw(field) else {
            return Field::Absent;
        };
        match value {
            Value::Bool(b) => Field::Present(*b),
            Value::Number(n) => Field::Present(n.as_f64().is_some_and(|f| f != 0.0)),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" | "on" => Field::Present(true),
                "false" | "no" | "n" | "0" | "off" | "" => Field::Present(false),
                _ => Field::Invalid(value.clone()),
            },
            _ => Field::Invalid(value.clone()),
        }
    }

    pub fn area(&self) -> Field<i64> {
        self.integer(AttributeField::Area)
    }

    pub fn property_type(&self) -> Field<&str> {
        self.text(AttributeField::PropertyType)
    }

    pub fn bedrooms_number(&self) -> Field<i64> {
        self.integer(AttributeField::BedroomsNumber)
    }

    pub fn zip_code(&self) -> Field<i64> {
        self.integer(AttributeField::ZipCode)
    }

    pub fn building_state(&self) -> Field<&str> {
        self.text(AttributeField::BuildingState)
    }

    pub fn epc_score(&self) -> Field<&str> {
        self.text(AttributeField::EpcScore)
    }

    pub fn garden(&self) -> Field<bool> {
        self.flag(AttributeField::Garden)
    }

    pub fn swimming_pool(&self) -> Field<bool> {
        self.flag(AttributeField::SwimmingPool)
    }

    pub fn terrace(&self) -> Field<bool> {
        self.flag(AttributeField::Terrace)
    }

    pub fn parking(&self) -> Field<bool> {
        self.flag(AttributeField::Parking)
    }

    pub fn lift(&self) -> Field<bool> {
        self.flag(AttributeField::Lift)
    }
}

impl From<Map<String, Value>> for RawAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a JSON value for an error message: strings bare, everything else as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn whole_number(value: &Value) -> Option<i64> {
    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
