//! CVD type enumeration, simulation matrices and the category newtype.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colour::Rgb;
use crate::error::ParseError;

/// A colour vision deficiency that can be simulated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum CvdType {
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
    Protanomaly,
    Deuteranomaly,
    Tritanomaly,
}

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];
const PROTANOMALY: Matrix = [
    [0.817, 0.183, 0.0],
    [0.333, 0.667, 0.0],
    [0.0, 0.125, 0.875],
];
const DEUTERANOPIA: Matrix = [
    [0.625, 0.375, 0.0],
    [0.7, 0.3, 0.0],
    [0.0, 0.3, 0.7],
];
const DEUTERANOMALY: Matrix = [
    [0.8, 0.2, 0.0],
    [0.258, 0.742, 0.0],
    [0.0, 0.142, 0.858],
];
const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];
const TRITANOMALY: Matrix = [
    [0.967, 0.033, 0.0],
    [0.0, 0.733, 0.267],
    [0.0, 0.183, 0.817],
];
// Rec. 601 luma weights on every row
const ACHROMATOPSIA: Matrix = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

impl CvdType {
    /// Every supported deficiency.
    pub const ALL: [CvdType; 7] = [
        CvdType::Protanopia,
        CvdType::Deuteranopia,
        CvdType::Tritanopia,
        CvdType::Achromatopsia,
        CvdType::Protanomaly,
        CvdType::Deuteranomaly,
        CvdType::Tritanomaly,
    ];

    /// The complete deficiencies used for palette-level checks. The
    /// "-anomaly" partial forms are left out.
    pub const COMMON: [CvdType; 4] = [
        CvdType::Protanopia,
        CvdType::Deuteranopia,
        CvdType::Tritanopia,
        CvdType::Achromatopsia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CvdType::Protanopia => "protanopia",
            CvdType::Deuteranopia => "deuteranopia",
            CvdType::Tritanopia => "tritanopia",
            CvdType::Achromatopsia => "achromatopsia",
            CvdType::Protanomaly => "protanomaly",
            CvdType::Deuteranomaly => "deuteranomaly",
            CvdType::Tritanomaly => "tritanomaly",
        }
    }

    fn matrix(self) -> &'static Matrix {
        match self {
            CvdType::Protanopia => &PROTANOPIA,
            CvdType::Deuteranopia => &DEUTERANOPIA,
            CvdType::Tritanopia => &TRITANOPIA,
            CvdType::Achromatopsia => &ACHROMATOPSIA,
            CvdType::Protanomaly => &PROTANOMALY,
            CvdType::Deuteranomaly => &DEUTERANOMALY,
            CvdType::Tritanomaly => &TRITANOMALY,
        }
    }

    /// Apply this deficiency's matrix to unit-scaled channels. The result
    /// is clamped and rounded back to 8 bits.
    pub fn apply(self, rgb: Rgb) -> Rgb {
        let [r, g, b] = rgb.to_unit();
        let m = self.matrix();
        let row = |i: usize| m[i][0] * r + m[i][1] * g + m[i][2] * b;
        Rgb::from_unit(row(0), row(1), row(2))
    }
}

impl fmt::Display for CvdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CvdType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        CvdType::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| ParseError::UnknownCvdType(s.to_string()))
    }
}

/// A user-facing palette category name.
///
/// Categories are open-ended, so this is a validated string rather than an
/// enum. Surrounding whitespace is trimmed and the result must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(value_type = String))]
pub struct Category(String);

impl Category {
    pub fn new(name: &str) -> Result<Self, ParseError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyCategory);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::new(s)
    }
}

impl TryFrom<String> for Category {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::new(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cvd_type_parse_and_display() {
        for t in CvdType::ALL {
            assert_eq!(t.to_string().parse::<CvdType>().unwrap(), t);
        }
        assert_eq!(" Deuteranopia ".parse::<CvdType>().unwrap(), CvdType::Deuteranopia);
        assert!(matches!(
            "redblind".parse::<CvdType>(),
            Err(ParseError::UnknownCvdType(_))
        ));
    }

    #[test]
    fn test_common_excludes_anomalies() {
        assert_eq!(CvdType::COMMON.len(), 4);
        assert!(CvdType::COMMON
            .iter()
            .all(|t| !t.as_str().ends_with("anomaly")));
    }

    #[test]
    fn test_matrix_rows_sum_to_one() {
        // White stays white under every simulation
        for t in CvdType::ALL {
            assert_eq!(t.apply(Rgb::WHITE), Rgb::WHITE, "{t}");
            assert_eq!(t.apply(Rgb::BLACK), Rgb::BLACK, "{t}");
        }
    }

    #[test]
    fn test_achromatopsia_is_grey() {
        let grey = CvdType::Achromatopsia.apply(Rgb::new(255, 0, 0));
        assert_eq!(grey, Rgb::new(0x4c, 0x4c, 0x4c));
    }

    #[test]
    fn test_category_validation() {
        assert_eq!(Category::new("  Brand ").unwrap().as_str(), "Brand");
        assert_eq!(Category::new("   "), Err(ParseError::EmptyCategory));
        assert_eq!(String::from(Category::new("x").unwrap()), "x");
    }
}
