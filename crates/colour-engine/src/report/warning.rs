//! Stable keys for accessibility warnings.
//!
//! Callers persist the keys of warnings a user has acknowledged. Each run
//! recomputes warnings and rebuilds the same keys, so a stored key matches
//! again as long as the ids and deficiency are unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cvd::CvdType;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum WarningKind {
    /// Text/background pair losing contrast under simulation
    Contrast,
    /// Same-category pair becoming confusable under simulation
    Distinguish,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningKind::Contrast => "contrast",
            WarningKind::Distinguish => "distinguish",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{kind}:{first}:{second}:{cvd}`
///
/// For contrast warnings `first` is the text colour id and `second` the
/// background id. For distinguish warnings they follow palette order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WarningKey {
    pub kind: WarningKind,
    pub first: String,
    pub second: String,
    pub cvd: CvdType,
}

impl WarningKey {
    pub fn new(kind: WarningKind, first: &str, second: &str, cvd: CvdType) -> Self {
        Self {
            kind,
            first: first.to_string(),
            second: second.to_string(),
            cvd,
        }
    }
}

impl fmt::Display for WarningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.kind, self.first, self.second, self.cvd)
    }
}

impl FromStr for WarningKey {
    type Err = ParseError;

    /// Ids containing `:` cannot be recovered from a key and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidWarningKey(s.to_string());

        let parts: Vec<&str> = s.split(':').collect();
        let [kind, first, second, cvd] = parts.as_slice() else {
            return Err(invalid());
        };
        let kind = match *kind {
            "contrast" => WarningKind::Contrast,
            "distinguish" => WarningKind::Distinguish,
            _ => return Err(invalid()),
        };
        if first.is_empty() || second.is_empty() {
            return Err(invalid());
        }
        let cvd = cvd.parse().map_err(|_| invalid())?;

        Ok(Self::new(kind, first, second, cvd))
    }
}
