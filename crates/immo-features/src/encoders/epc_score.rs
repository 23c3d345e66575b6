use immo_core::types::attributes::render_value;
use immo_core::{Field, RawAttributes, ValidationError, Warning};

use super::{normalize_label, Encoded};

/// Energy performance certificate grade, A++ (best, 0) to G (worst, 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EpcScore {
    APlusPlus,
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EpcScore {
    pub const ALL: [EpcScore; 9] = [
        Self::APlusPlus,
        Self::APlus,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
    ];

    pub const DEFAULT: EpcScore = Self::C;

    pub fn label(self) -> &'static str {
        match self {
            Self::APlusPlus => "A++",
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let label = normalize_label(raw);
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Encode `epc_score` into `epcscore_encoded`. Absent → C with a warning.
pub fn encode(raw: &RawAttributes) -> Result<Encoded, ValidationError> {
    match raw.epc_score() {
        Field::Absent => Ok(Encoded::defaulted(
            EpcScore::DEFAULT.code(),
            Warning::EpcScoreDefaulted,
        )),
        Field::Present(s) => EpcScore::parse(s)
            .map(|score| Encoded::exact(score.code()))
            .ok_or_else(|| ValidationError::InvalidEpcScore {
                value: s.to_string(),
            }),
        Field::Invalid(v) => Err(ValidationError::InvalidEpcScore {
            value: render_value(&v),
        }),
    }
}
