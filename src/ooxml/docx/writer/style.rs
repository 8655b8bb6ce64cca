/// Style part support for DOCX documents.
///
/// A report needs only document defaults (the body font and size every run
/// falls back to) and the `Normal` paragraph style Word expects to find.
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Document-wide run defaults written to `w:docDefaults`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocDefaults {
    /// Font family name (e.g., "Times New Roman")
    pub font_name: String,
    /// Font size in half-points (e.g., 28 = 14pt)
    pub font_size: u32,
    /// Proofing language tag (e.g., "ru-RU"); omitted when `None`
    pub language: Option<String>,
}

impl Default for DocDefaults {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_size: 22,
            language: None,
        }
    }
}

/// Generate a styles.xml part for the given defaults.
pub fn generate_styles_xml(defaults: &DocDefaults) -> Result<String> {
    let mut xml = String::with_capacity(1024);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<w:styles xmlns:w="{}">"#, namespace::WML_MAIN)?;

    let font = escape_xml(&defaults.font_name);
    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    write!(
        xml,
        r#"<w:rFonts w:ascii="{0}" w:eastAsia="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
        font
    )?;
    write!(
        xml,
        r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
        defaults.font_size
    )?;
    if let Some(ref language) = defaults.language {
        write!(xml, r#"<w:lang w:val="{}"/>"#, escape_xml(language))?;
    }
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault><w:pPr>");
    xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
    xml.push_str("</w:pPr></w:pPrDefault>");
    xml.push_str("</w:docDefaults>");

    xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
    xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/>"#);
    xml.push_str("</w:style>");

    xml.push_str("</w:styles>");

    Ok(xml)
}
