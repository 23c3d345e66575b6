use immo_core::types::attributes::render_value;
use immo_core::{Field, RawAttributes, ValidationError};

use super::{normalize_label, Encoded};

/// Property type. Only houses are distinguished by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Others,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [Self::House, Self::Apartment, Self::Others];

    pub fn label(self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Apartment => "APARTMENT",
            Self::Others => "OTHERS",
        }
    }

    /// `type_encoded`: HOUSE → 1, everything else → 0.
    pub fn code(self) -> u8 {
        match self {
            Self::House => 1,
            Self::Apartment | Self::Others => 0,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let label = normalize_label(raw);
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .ok_or_else(|| ValidationError::InvalidPropertyType {
                value: raw.to_string(),
            })
    }

    /// Read and parse the required `property_type` field.
    pub fn from_attributes(raw: &RawAttributes) -> Result<Self, ValidationError> {
        match raw.property_type() {
            Field::Present(s) => Self::parse(s),
            Field::Invalid(v) => Err(ValidationError::InvalidPropertyType {
                value: render_value(&v),
            }),
            Field::Absent => Err(ValidationError::MissingField {
                field: "property_type",
            }),
        }
    }
}

/// Encode `property_type` into `type_encoded`.
pub fn encode(raw: &RawAttributes) -> Result<Encoded, ValidationError> {
    PropertyType::from_attributes(raw).map(|t| Encoded::exact(t.code()))
}
