/// Paragraph types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::unit::{cm_to_twip, pt_to_twip};
use std::fmt::Write as FmtWrite;

pub use super::super::format::LineSpacing;
use super::run::MutableRun;

/// A mutable paragraph in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableParagraph {
    /// Runs in this paragraph
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::new(),
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        self.runs.push(MutableRun::new());
        let idx = self.runs.len() - 1;
        &mut self.runs[idx]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Runs of this paragraph in order.
    pub fn runs(&self) -> &[MutableRun] {
        &self.runs
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(MutableRun::text).collect()
    }

    /// Set spacing after this paragraph (in points).
    pub fn set_space_after(&mut self, points: f64) {
        self.properties.space_after = Some(pt_to_twip(points));
    }

    /// Set line spacing for this paragraph.
    pub fn set_line_spacing(&mut self, spacing: LineSpacing) {
        self.properties.line_spacing = Some(spacing);
    }

    /// Set left indentation (in centimetres).
    pub fn set_indent_left_cm(&mut self, cm: f64) {
        self.properties.indent_left = Some(cm_to_twip(cm));
    }

    /// Set first line indentation (in centimetres; negative for hanging).
    pub fn set_indent_first_line_cm(&mut self, cm: f64) {
        self.properties.indent_first_line = Some(cm_to_twip(cm));
    }

    pub fn indent_left(&self) -> Option<i32> {
        self.properties.indent_left
    }

    pub fn indent_first_line(&self) -> Option<i32> {
        self.properties.indent_first_line
    }

    pub fn space_after(&self) -> Option<u32> {
        self.properties.space_after
    }

    pub fn line_spacing(&self) -> Option<LineSpacing> {
        self.properties.line_spacing
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        if self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            // Write spacing
            if self.properties.space_after.is_some() || self.properties.line_spacing.is_some() {
                xml.push_str("<w:spacing");
                if let Some(after) = self.properties.space_after {
                    write!(xml, " w:after=\"{}\"", after)?;
                }
                if let Some(ref line_spacing) = self.properties.line_spacing {
                    let (line, rule) = line_spacing.xml_values();
                    write!(xml, " w:line=\"{}\" w:lineRule=\"{}\"", line, rule)?;
                }
                xml.push_str("/>");
            }

            // Write indentation
            if self.properties.indent_left.is_some() || self.properties.indent_first_line.is_some()
            {
                xml.push_str("<w:ind");
                if let Some(left) = self.properties.indent_left {
                    write!(xml, " w:left=\"{}\"", left)?;
                }
                if let Some(first_line) = self.properties.indent_first_line {
                    if first_line >= 0 {
                        write!(xml, " w:firstLine=\"{}\"", first_line)?;
                    } else {
                        write!(xml, " w:hanging=\"{}\"", -first_line)?;
                    }
                }
                xml.push_str("/>");
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties; indents in twips, spacing in twips.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ParagraphProperties {
    pub(crate) space_after: Option<u32>,
    pub(crate) line_spacing: Option<LineSpacing>,
    pub(crate) indent_left: Option<i32>,
    pub(crate) indent_first_line: Option<i32>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.space_after.is_some()
            || self.line_spacing.is_some()
            || self.indent_left.is_some()
            || self.indent_first_line.is_some()
    }
}
