use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{POSTAL_CODE_MAX, POSTAL_CODE_MIN};

/// Belgian region, one-hot encoded into three feature slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Brussels,
    Flanders,
    Wallonia,
}

/// French region names as they appear in the postal-code table.
const FRENCH_REGION_NAMES: [(&str, Region); 3] = [
    ("Région de Bruxelles-Capitale", Region::Brussels),
    ("Région flamande", Region::Flanders),
    ("Région wallonne", Region::Wallonia),
];

impl Region {
    pub const ALL: [Region; 3] = [Region::Brussels, Region::Flanders, Region::Wallonia];

    pub fn name(self) -> &'static str {
        match self {
            Region::Brussels => "Brussels",
            Region::Flanders => "Flanders",
            Region::Wallonia => "Wallonia",
        }
    }

    /// Translate a French region name from the geo table.
    pub fn from_french_name(name: &str) -> Option<Region> {
        let name = name.trim();
        FRENCH_REGION_NAMES
            .iter()
            .find(|(fr, _)| *fr == name)
            .map(|(_, region)| *region)
    }

    /// `[brussels, flanders, wallonia]` flags; exactly one is 1.
    pub fn one_hot(self) -> [u8; 3] {
        match self {
            Region::Brussels => [1, 0, 0],
            Region::Flanders => [0, 1, 0],
            Region::Wallonia => [0, 0, 1],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Belgian postal code, guaranteed to lie in 1000..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct PostalCode(u16);

impl PostalCode {
    pub fn new(code: i64) -> Option<Self> {
        if (POSTAL_CODE_MIN..=POSTAL_CODE_MAX).contains(&code) {
            Some(Self(code as u16))
        } else {
            None
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for PostalCode {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::new(code).ok_or_else(|| format!("postal code {code} outside 1000..=9999"))
    }
}

impl From<PostalCode> for u16 {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved location of a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub postal_code: PostalCode,
    pub latitude: f64,
    pub longitude: f64,
    pub region: Region,
}
