//! Field encoders: one categorical or boolean input field → its trained code.
//!
//! Each encoder is a pure function of the raw attributes. Categorical values
//! are matched case-insensitively after [`normalize_label`].

pub mod amenities;
pub mod building_state;
pub mod epc_score;
pub mod property_type;

pub use amenities::Amenities;
pub use building_state::BuildingState;
pub use epc_score::EpcScore;
pub use property_type::PropertyType;

use immo_core::Warning;

/// Encoded value of one field plus the advisory emitted when a default was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub value: u8,
    pub warning: Option<Warning>,
}

impl Encoded {
    pub fn exact(value: u8) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn defaulted(value: u8, warning: Warning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }
}

/// Canonical form for categorical matching: trimmed, upper-case,
/// underscores read as spaces, internal whitespace collapsed.
pub fn normalize_label(raw: &str) -> String {
    raw.to_uppercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
