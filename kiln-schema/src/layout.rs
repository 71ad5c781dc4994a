//! Output layout selection.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How generated class files are arranged under the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Every class in the output directory: `user-profile.ts`
    #[default]
    Flat,
    /// One directory per class: `user-profile/user-profile.entity.ts`
    Nested,
}

impl Layout {
    /// Returns the layout identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Flat => "flat",
            Layout::Nested => "nested",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flat" => Ok(Layout::Flat),
            "nested" => Ok(Layout::Nested),
            _ => Err(format!(
                "unknown layout '{}', expected 'flat' or 'nested'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Layout::from_str("flat").unwrap(), Layout::Flat);
        assert_eq!(Layout::from_str("Nested").unwrap(), Layout::Nested);
        assert!(Layout::from_str("tree").is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for layout in [Layout::Flat, Layout::Nested] {
            assert_eq!(Layout::from_str(&layout.to_string()).unwrap(), layout);
        }
    }

    #[test]
    fn test_deserialize() {
        let nested: Layout = serde_json::from_str(r#""nested""#).unwrap();
        assert_eq!(nested, Layout::Nested);
    }
}
