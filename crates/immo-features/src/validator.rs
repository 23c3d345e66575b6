//! Required-field presence and range checks.
//!
//! Presence of all four required fields is checked first, then their values
//! in the order area → property type → bedrooms → postal code. The first
//! failure is returned.

use immo_core::types::attributes::render_value;
use immo_core::{AttributeField, Field, PostalCode, RawAttributes, ValidationError};

use crate::encoders::PropertyType;

/// The four required attributes, typed and range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredAttributes {
    pub area: u32,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub postal_code: PostalCode,
}

/// Validate the required fields of `raw`. No side effects.
pub fn validate(raw: &RawAttributes) -> Result<RequiredAttributes, ValidationError> {
    if let Some(field) = AttributeField::REQUIRED
        .into_iter()
        .find(|f| raw.raw(*f).is_none())
    {
        return Err(ValidationError::MissingField {
            field: field.name(),
        });
    }

    let area = check_area(raw.area())?;
    let property_type = PropertyType::from_attributes(raw)?;
    let bedrooms = check_bedrooms(raw.bedrooms_number())?;
    let postal_code = check_postal_code(raw.zip_code())?;

    Ok(RequiredAttributes {
        area,
        property_type,
        bedrooms,
        postal_code,
    })
}

fn check_area(field: Field<i64>) -> Result<u32, ValidationError> {
    match field {
        Field::Present(n) if n > 0 => {
            u32::try_from(n).map_err(|_| ValidationError::InvalidArea {
                value: n.to_string(),
            })
        }
        Field::Present(n) => Err(ValidationError::InvalidArea {
            value: n.to_string(),
        }),
        Field::Invalid(v) => Err(ValidationError::InvalidArea {
            value: render_value(&v),
        }),
        Field::Absent => Err(ValidationError::MissingField {
            field: AttributeField::Area.name(),
        }),
    }
}

fn check_bedrooms(field: Field<i64>) -> Result<u32, ValidationError> {
    match field {
        Field::Present(n) => u32::try_from(n).map_err(|_| ValidationError::InvalidRoomCount {
            value: n.to_string(),
        }),
        Field::Invalid(v) => Err(ValidationError::InvalidRoomCount {
            value: render_value(&v),
        }),
        Field::Absent => Err(ValidationError::MissingField {
            field: AttributeField::BedroomsNumber.name(),
        }),
    }
}

fn check_postal_code(field: Field<i64>) -> Result<PostalCode, ValidationError> {
    match field {
        Field::Present(n) => PostalCode::new(n).ok_or_else(|| ValidationError::InvalidPostalCode {
            value: n.to_string(),
        }),
        Field::Invalid(v) => Err(ValidationError::InvalidPostalCode {
            value: render_value(&v),
        }),
        Field::Absent => Err(ValidationError::MissingField {
            field: AttributeField::ZipCode.name(),
        }),
    }
}
