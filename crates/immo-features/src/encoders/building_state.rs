use immo_core::types::attributes::render_value;
use immo_core::{Field, RawAttributes, ValidationError, Warning};

use super::{normalize_label, Encoded};

/// Condition of the building, ordinal-encoded 0..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingState {
    New,
    ToRenovate,
    Good,
    ToBeDoneUp,
    JustRenovated,
    ToRebuild,
}

impl BuildingState {
    /// In code order: `ALL[i].code() == i`.
    pub const ALL: [BuildingState; 6] = [
        Self::New,
        Self::ToRenovate,
        Self::Good,
        Self::ToBeDoneUp,
        Self::JustRenovated,
        Self::ToRebuild,
    ];

    /// Substituted when the caller omits the field.
    pub const DEFAULT: BuildingState = Self::Good;

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::ToRenovate => "TO RENOVATE",
            Self::Good => "GOOD",
            Self::ToBeDoneUp => "TO BE DONE UP",
            Self::JustRenovated => "JUST RENOVATED",
            Self::ToRebuild => "TO REBUILD",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::New => 0,
            Self::ToRenovate => 1,
            Self::Good => 2,
            Self::ToBeDoneUp => 3,
            Self::JustRenovated => 4,
            Self::ToRebuild => 5,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let label = normalize_label(raw);
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Encode `building_state` into `buildingcondition_encoded`.
///
/// Absent → GOOD with a warning. Present but outside the domain is an error,
/// never a silent default.
pub fn encode(raw: &RawAttributes) -> Result<Encoded, ValidationError> {
    match raw.building_state() {
        Field::Absent => Ok(Encoded::defaulted(
            BuildingState::DEFAULT.code(),
            Warning::BuildingStateDefaulted,
        )),
        Field::Present(s) => BuildingState::parse(s)
            .map(|state| Encoded::exact(state.code()))
            .ok_or_else(|| ValidationError::InvalidBuildingState {
                value: s.to_string(),
            }),
        Field::Invalid(v) => Err(ValidationError::InvalidBuildingState {
            value: render_value(&v),
        }),
    }
}
