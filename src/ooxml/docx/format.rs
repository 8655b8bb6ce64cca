//! Shared formatting types for DOCX (used in both reading and writing).
use serde::{Deserialize, Serialize};

/// Line spacing options for paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Single line spacing
    #[default]
    Single,
    /// 1.5 line spacing
    OneAndHalf,
    /// Double line spacing
    Double,
}

impl LineSpacing {
    /// `w:line` value and `w:lineRule` of this spacing.
    pub(crate) fn xml_values(&self) -> (u32, &'static str) {
        match self {
            Self::Single => (240, "auto"),
            Self::OneAndHalf => (360, "auto"),
            Self::Double => (480, "auto"),
        }
    }

    /// Inverse of [`LineSpacing::xml_values`] for the values the writer produces.
    pub(crate) fn from_xml_values(line: u32, rule: &str) -> Option<Self> {
        match (line, rule) {
            (240, "auto") => Some(Self::Single),
            (360, "auto") => Some(Self::OneAndHalf),
            (480, "auto") => Some(Self::Double),
            _ => None,
        }
    }
}
