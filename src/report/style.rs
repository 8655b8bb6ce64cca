//! Static style tables of the report.
//!
//! Run formatting is looked up by [`RunRole`] and paragraph formatting by
//! [`ParagraphShape`]; neither lookup ever looks at the text being styled.
use crate::common::unit::pt_to_half_points;
use crate::config::Typography;
use crate::ooxml::docx::writer::{LineSpacing, MutableParagraph, MutableRun};

/// Which of the two typefaces a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontClass {
    /// Serif face for prose and structural punctuation.
    Body,
    /// Monospace face for identifiers and signatures.
    Code,
}

/// The role a run plays in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunRole {
    /// Whole text of the section header.
    HeaderText,
    /// Summary and list-caption paragraphs.
    SummaryText,
    /// `"{ordinal} {kind} "` at the start of an entity heading.
    HeadingPrefix,
    /// Entity name inside the heading.
    HeadingName,
    /// Trailing `":"` of the heading.
    HeadingColon,
    /// Dash and non-breaking space opening a list item.
    ItemMarker,
    /// Field or method signature.
    ItemCode,
    /// `": "` between the code and the description.
    ItemSeparator,
    /// Description with its terminal punctuation, or the punctuation alone.
    ItemText,
}

impl RunRole {
    pub const fn font_class(self) -> FontClass {
        match self {
            Self::HeadingName | Self::ItemCode => FontClass::Code,
            Self::HeaderText
            | Self::SummaryText
            | Self::HeadingPrefix
            | Self::HeadingColon
            | Self::ItemMarker
            | Self::ItemSeparator
            | Self::ItemText => FontClass::Body,
        }
    }

    pub const fn bold(self) -> bool {
        false
    }
}

/// Paragraph templates of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphShape {
    /// Section header: no indentation at all.
    Header,
    /// Summary, caption and entity heading: first-line ("red line") indent.
    Body,
    /// List item: left indent, no first-line indent.
    Item,
}

/// Resolved run formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStyle<'a> {
    pub font: &'a str,
    /// Size in half-points
    pub size: u32,
    pub bold: bool,
}

/// Role and shape lookups resolved against a [`Typography`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    body_font: String,
    code_font: String,
    size: u32,
    first_line_indent_cm: f64,
    item_indent_cm: f64,
    line_spacing: LineSpacing,
}

impl StyleTable {
    pub fn new(typography: &Typography) -> Self {
        Self {
            body_font: typography.body_font.clone(),
            code_font: typography.code_font.clone(),
            size: pt_to_half_points(typography.font_size_pt),
            first_line_indent_cm: typography.first_line_indent_cm,
            item_indent_cm: typography.item_indent_cm,
            line_spacing: typography.line_spacing,
        }
    }

    pub fn body_font(&self) -> &str {
        &self.body_font
    }

    /// Size shared by every run, in half-points.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn run_style(&self, role: RunRole) -> RunStyle<'_> {
        let font = match role.font_class() {
            FontClass::Body => &self.body_font,
            FontClass::Code => &self.code_font,
        };
        RunStyle {
            font,
            size: self.size,
            bold: role.bold(),
        }
    }

    pub fn apply_run(&self, run: &mut MutableRun, role: RunRole) {
        let style = self.run_style(role);
        run.font_name(style.font).font_size(style.size).bold(style.bold);
    }

    /// Apply indentation, line spacing and zero space-after.
    pub fn apply_paragraph(&self, para: &mut MutableParagraph, shape: ParagraphShape) {
        match shape {
            ParagraphShape::Header => {},
            ParagraphShape::Body => para.set_indent_first_line_cm(self.first_line_indent_cm),
            ParagraphShape::Item => para.set_indent_left_cm(self.item_indent_cm),
        }
        para.set_line_spacing(self.line_spacing);
        para.set_space_after(0.0);
    }
}
