//! Report configuration.
//!
//! Every field has a default reproducing the reference report, so an empty
//! YAML document (or no file at all) yields the standard output. Partial files
//! override only the keys they name:
//!
//! ```yaml
//! title: "3.2 Описание структур данных"
//! typography:
//!   code_font: Consolas
//! validation: strict
//! ```
use crate::catalog::{EntityKind, ValidationPolicy};
use crate::common::{Error, Result};
use crate::ooxml::docx::LineSpacing;
use crate::ooxml::docx::writer::{PageOrientation, SectionProperties};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name used by the command line front end.
pub const DEFAULT_OUTPUT: &str = "Раздел_3_1_классы_и_структуры.docx";

/// Largest font size Word accepts, in points.
pub const MAX_FONT_SIZE_PT: f64 = 1638.0;

/// Largest indent accepted, in centimetres (Word caps indents at 22 inches).
pub const MAX_INDENT_CM: f64 = 55.0;

/// Top-level report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Text of the section header paragraph.
    pub title: String,
    pub labels: Labels,
    pub typography: Typography,
    pub metadata: DocumentMetadata,
    pub page: PageSize,
    pub orientation: PageOrientation,
    pub validation: ValidationPolicy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "3.1 Описание программных модулей".to_string(),
            labels: Labels::default(),
            typography: Typography::default(),
            metadata: DocumentMetadata::default(),
            page: PageSize::default(),
            orientation: PageOrientation::default(),
            validation: ValidationPolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would produce an unreadable document.
    pub fn validate(&self) -> Result<()> {
        self.typography.validate()
    }

    /// Page setup of the single section.
    pub fn section_properties(&self) -> SectionProperties {
        let section = self.page.section_properties();
        match self.orientation {
            PageOrientation::Portrait => section,
            PageOrientation::Landscape => section.landscape(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Title written to the core properties part.
    pub fn document_title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or(&self.title)
    }
}

/// Fixed words and captions of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub class: String,
    pub structure: String,
    pub fields: String,
    pub methods: String,
    /// Item marker; a non-breaking space is always appended.
    pub marker: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            class: "Класс".to_string(),
            structure: "Структура".to_string(),
            fields: "Поля:".to_string(),
            methods: "Методы:".to_string(),
            marker: "–".to_string(),
        }
    }
}

impl Labels {
    pub fn kind(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Class => &self.class,
            EntityKind::Structure => &self.structure,
        }
    }
}

/// Fonts, size, indents and line spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Typography {
    pub body_font: String,
    pub code_font: String,
    pub font_size_pt: f64,
    /// Paragraph-opening ("red line") indent.
    pub first_line_indent_cm: f64,
    /// Left indent of list items.
    pub item_indent_cm: f64,
    pub line_spacing: LineSpacing,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            code_font: "Courier New".to_string(),
            font_size_pt: 14.0,
            first_line_indent_cm: 1.25,
            item_indent_cm: 2.5,
            line_spacing: LineSpacing::Single,
        }
    }
}

impl Typography {
    pub fn validate(&self) -> Result<()> {
        let size = self.font_size_pt;
        if !size.is_finite() || size <= 0.0 || size > MAX_FONT_SIZE_PT {
            return Err(Error::Config(format!(
                "font_size_pt must be in (0, {}], got {}",
                MAX_FONT_SIZE_PT, size
            )));
        }
        // Half-point sizes only: 10.25pt would silently become 10.5pt.
        if (size * 2.0).fract() != 0.0 {
            return Err(Error::Config(format!(
                "font_size_pt must be a multiple of 0.5, got {}",
                size
            )));
        }
        let indents = [
            ("first_line_indent_cm", self.first_line_indent_cm),
            ("item_indent_cm", self.item_indent_cm),
        ];
        for (key, value) in indents {
            if !value.is_finite() || value.abs() > MAX_INDENT_CM {
                return Err(Error::Config(format!(
                    "{} must be within ±{} cm, got {}",
                    key, MAX_INDENT_CM, value
                )));
            }
        }
        for (key, font) in [("body_font", &self.body_font), ("code_font", &self.code_font)] {
            if font.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

/// Core properties written to `docProps/core.xml`, plus the proofing language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentMetadata {
    /// Defaults to the report title.
    pub title: Option<String>,
    pub creator: Option<String>,
    /// Language tag of the document defaults; `None` leaves it to the reader.
    pub language: Option<String>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            creator: None,
            language: Some("ru-RU".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub fn section_properties(self) -> SectionProperties {
        match self {
            Self::A4 => SectionProperties::a4(),
            Self::Letter => SectionProperties::letter(),
        }
    }
}
