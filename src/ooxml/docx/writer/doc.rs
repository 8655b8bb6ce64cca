/// Document writer implementation for DOCX.
use crate::common::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use std::fmt::Write as FmtWrite;

use super::paragraph::MutableParagraph;
use super::props::{CoreProperties, app_properties_xml};
use super::section::SectionProperties;
use super::style::{DocDefaults, generate_styles_xml};

const DOCUMENT_PART: &str = "/word/document.xml";
const STYLES_PART: &str = "/word/styles.xml";
const CORE_PROPS_PART: &str = "/docProps/core.xml";
const APP_PROPS_PART: &str = "/docProps/app.xml";

/// A Word document under construction.
///
/// Paragraphs can only be appended: once added, a paragraph is reachable
/// read-only through [`MutableDocument::paragraphs`], and the returned
/// `&mut` from [`MutableDocument::add_paragraph`] is the only way to fill it.
#[derive(Debug, Clone, Default)]
pub struct MutableDocument {
    /// Body paragraphs in document order
    body: Vec<MutableParagraph>,
    /// Section properties (page setup, margins, orientation)
    section: SectionProperties,
    /// Run defaults for styles.xml
    defaults: DocDefaults,
    /// Core properties for docProps/core.xml
    core_properties: CoreProperties,
}

impl MutableDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.push(MutableParagraph::new());
        let idx = self.body.len() - 1;
        &mut self.body[idx]
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[MutableParagraph] {
        &self.body
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.body.len()
    }

    pub fn set_section(&mut self, section: SectionProperties) {
        self.section = section;
    }

    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Set the font every run falls back to (size in half-points).
    pub fn set_default_font(&mut self, name: &str, size: u32) {
        self.defaults.font_name = name.to_string();
        self.defaults.font_size = size;
    }

    /// Set the proofing language of the document defaults.
    pub fn set_language(&mut self, language: Option<&str>) {
        self.defaults.language = language.map(str::to_string);
    }

    pub fn core_properties_mut(&mut self) -> &mut CoreProperties {
        &mut self.core_properties
    }

    /// Serialize the document part.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.body.len() * 512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str("<w:body>");

        for para in &self.body {
            para.to_xml(&mut xml)?;
        }

        // The sectPr must be the last element in the body
        self.section.to_xml(&mut xml)?;

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// Assemble the OPC package for this document.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();
        pkg.relate_to(DOCUMENT_PART, rt::OFFICE_DOCUMENT)?;
        pkg.relate_to(CORE_PROPS_PART, rt::CORE_PROPERTIES)?;
        pkg.relate_to(APP_PROPS_PART, rt::EXTENDED_PROPERTIES)?;

        let styles_uri = PackURI::new(STYLES_PART)?;
        let document = pkg.add_part(Part::new(
            PackURI::new(DOCUMENT_PART)?,
            ct::WML_DOCUMENT_MAIN,
            self.to_xml()?.into_bytes(),
        ));
        document.relate_to(&styles_uri, rt::STYLES);

        pkg.add_part(Part::new(
            styles_uri,
            ct::WML_STYLES,
            generate_styles_xml(&self.defaults)?.into_bytes(),
        ));
        pkg.add_part(Part::new(
            PackURI::new(CORE_PROPS_PART)?,
            ct::OPC_CORE_PROPERTIES,
            self.core_properties.to_xml()?.into_bytes(),
        ));
        pkg.add_part(Part::new(
            PackURI::new(APP_PROPS_PART)?,
            ct::OFC_EXTENDED_PROPERTIES,
            app_properties_xml()?.into_bytes(),
        ));

        Ok(pkg)
    }

    /// Serialize the document to .docx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }
}
