/// Core and extended document properties (`docProps/core.xml`, `docProps/app.xml`).
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Properties written to the core properties part.
///
/// No creation or modification timestamps are written, so two saves of the
/// same document are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
}

impl CoreProperties {
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="{}" xmlns:dcterms="{}" xmlns:xsi="{}">"#,
            namespace::OPC_CORE_PROPERTIES,
            namespace::DC,
            namespace::DCTERMS,
            namespace::XSI
        )?;
        if let Some(ref title) = self.title {
            write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
        }
        if let Some(ref creator) = self.creator {
            write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
        }
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }
}

/// Extended (application) properties part.
pub(crate) fn app_properties_xml() -> Result<String> {
    let mut xml = String::with_capacity(256);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<Properties xmlns="{}"><Application>{} {}</Application></Properties>"#,
        namespace::OFC_EXTENDED_PROPERTIES,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_properties() {
        let props = CoreProperties {
            title: Some("3.1 Описание программных модулей".to_string()),
            creator: Some("R&D".to_string()),
        };
        let xml = props.to_xml().unwrap();
        assert!(xml.contains("<dc:title>3.1 Описание программных модулей</dc:title>"));
        assert!(xml.contains("<dc:creator>R&amp;D</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_empty_core_properties() {
        let xml = CoreProperties::default().to_xml().unwrap();
        assert!(!xml.contains("dc:title"));
        assert!(xml.ends_with("</cp:coreProperties>"));
    }

    #[test]
    fn test_app_properties_name_the_generator() {
        let xml = app_properties_xml().unwrap();
        assert!(xml.contains("<Application>moddoc "));
    }
}
