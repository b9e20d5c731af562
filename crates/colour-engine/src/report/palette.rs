//! Palette input types for reports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cvd::Category;
use crate::error::ParseError;

/// How a palette colour is meant to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Role {
    Text,
    Background,
    Both,
}

impl Role {
    pub fn is_text(self) -> bool {
        matches!(self, Role::Text | Role::Both)
    }

    pub fn is_background(self) -> bool {
        matches!(self, Role::Background | Role::Both)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Text => "text",
            Role::Background => "background",
            Role::Both => "both",
        })
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Role::Text),
            "background" | "bg" => Ok(Role::Background),
            "both" => Ok(Role::Both),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

/// A colour as it appears in a palette under analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaletteColour {
    /// Caller-assigned id, used in warning keys
    pub id: String,
    pub hex: String,
    #[serde(default)]
    pub role: Option<Role>,
    /// Colours are only compared with others in the same category.
    /// Uncategorised colours take no part in distinguishability checks.
    #[serde(default)]
    pub category: Option<Category>,
}

impl PaletteColour {
    pub fn new(id: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex: hex.into(),
            role: None,
            category: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn is_text(&self) -> bool {
        self.role.is_some_and(Role::is_text)
    }

    pub fn is_background(&self) -> bool {
        self.role.is_some_and(Role::is_background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_flags() {
        assert!(Role::Both.is_text() && Role::Both.is_background());
        assert!(Role::Text.is_text() && !Role::Text.is_background());
        assert!(!PaletteColour::new("a", "#fff").is_text());
        assert!(PaletteColour::new("a", "#fff").with_role(Role::Background).is_background());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("Background".parse::<Role>().unwrap(), Role::Background);
        assert_eq!("both".parse::<Role>().unwrap(), Role::Both);
        assert!(matches!("border".parse::<Role>(), Err(ParseError::UnknownRole(_))));
    }
}
