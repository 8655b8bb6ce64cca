/// Run types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableRun {
    /// Run text
    pub(crate) text: String,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self {
            text: String::new(),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set bold explicitly on or off.
    ///
    /// `bold(false)` writes `<w:b w:val="0"/>`, overriding any inherited bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Set font size in half-points (e.g., 28 = 14pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Set font name.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    pub fn get_font_name(&self) -> Option<&str> {
        self.properties.font_name.as_deref()
    }

    pub fn get_font_size(&self) -> Option<u32> {
        self.properties.font_size
    }

    pub fn is_bold(&self) -> Option<bool> {
        self.properties.bold
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        // Child order follows CT_RPr: rFonts, b, bCs, sz, szCs
        if self.properties.has_properties() {
            xml.push_str("<w:rPr>");

            if let Some(ref font_name) = self.properties.font_name {
                let font = escape_xml(font_name);
                write!(
                    xml,
                    "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:cs=\"{0}\"/>",
                    font
                )?;
            }

            match self.properties.bold {
                Some(true) => xml.push_str("<w:b/><w:bCs/>"),
                Some(false) => xml.push_str("<w:b w:val=\"0\"/><w:bCs w:val=\"0\"/>"),
                None => {},
            }

            if let Some(size) = self.properties.font_size {
                write!(xml, "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size)?;
            }

            xml.push_str("</w:rPr>");
        }

        if !self.text.is_empty() {
            write!(
                xml,
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape_xml(&self.text)
            )?;
        }

        xml.push_str("</w:r>");

        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some() || self.font_size.is_some() || self.font_name.is_some()
    }
}
