//! Generation of the module description report.
//!
//! A single pass walks the catalog in order and appends, per entity, a
//! heading, a summary and the field and method lists. The document is
//! serialized only after the whole pass succeeded, so a failed run never
//! leaves a partial file behind.
pub mod formatter;
pub mod style;

pub use formatter::{Formatter, NBSP, terminator};
pub use style::{FontClass, ParagraphShape, RunRole, RunStyle, StyleTable};

use crate::catalog::Catalog;
use crate::common::Result;
use crate::config::ReportConfig;
use crate::ooxml::docx::writer::MutableDocument;
use std::path::Path;

/// What a generation pass produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub entities: usize,
    pub paragraphs: usize,
    pub bytes: usize,
}

/// Validate `catalog` and lay it out as a document.
pub fn build_document(catalog: &Catalog, config: &ReportConfig) -> Result<MutableDocument> {
    config.validate()?;
    catalog.validate(config.validation)?;

    let mut document = MutableDocument::new();
    document.set_section(config.section_properties());
    document.set_language(config.metadata.language.as_deref());
    let props = document.core_properties_mut();
    props.title = Some(config.document_title().to_string());
    props.creator = config.metadata.creator.clone();

    let mut fmt = Formatter::with_document(document, config);
    let (font, size) = (fmt.styles().body_font().to_string(), fmt.styles().size());

    fmt.append_section_header(&config.title);
    for (ordinal, entity) in catalog.numbered() {
        tracing::debug!(
            ordinal,
            name = %entity.name,
            fields = entity.fields.len(),
            methods = entity.methods.len(),
            "formatting entity"
        );
        fmt.append_entity(ordinal, entity);
    }

    let mut document = fmt.finish();
    document.set_default_font(&font, size);
    Ok(document)
}

/// Build the report and serialize it to .docx bytes.
pub fn render(catalog: &Catalog, config: &ReportConfig) -> Result<Vec<u8>> {
    build_document(catalog, config)?.to_bytes()
}

/// Build the report and write it to `path`.
///
/// The file is replaced atomically: on error the previous content, if any,
/// is left untouched.
pub fn write_report<P: AsRef<Path>>(
    catalog: &Catalog,
    config: &ReportConfig,
    path: P,
) -> Result<ReportSummary> {
    let path = path.as_ref();
    let document = build_document(catalog, config)?;
    let bytes = document.to_bytes()?;
    crate::ooxml::opc::PackageWriter::write_bytes(path, &bytes)?;

    let summary = ReportSummary {
        entities: catalog.len(),
        paragraphs: document.paragraph_count(),
        bytes: bytes.len(),
    };
    tracing::info!(
        path = %path.display(),
        entities = summary.entities,
        paragraphs = summary.paragraphs,
        bytes = summary.bytes,
        "report written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EntityDescriptor, EntityKind, ItemDescriptor, ValidationPolicy};
    use crate::common::Error;
    use crate::ooxml::docx::{LineSpacing, ParagraphSnapshot, read_paragraphs, read_paragraphs_from_path};
    use proptest::prelude::*;

    fn foo_catalog() -> Catalog {
        Catalog::new(vec![
            EntityDescriptor::new(EntityKind::Class, "Foo", "A thing.").with_field("int x", Some("the x")),
        ])
    }

    fn english() -> ReportConfig {
        let mut config = ReportConfig::default();
        config.title = "Modules".to_string();
        config.labels.class = "Class".to_string();
        config.labels.structure = "Structure".to_string();
        config.labels.fields = "Fields:".to_string();
        config.labels.methods = "Methods:".to_string();
        config
    }

    fn texts(paragraphs: &[ParagraphSnapshot]) -> Vec<String> {
        paragraphs.iter().map(ParagraphSnapshot::text).collect()
    }

    #[test]
    fn test_single_entity_scenario() {
        let bytes = render(&foo_catalog(), &english()).unwrap();
        let paragraphs = read_paragraphs(&bytes).unwrap();

        assert_eq!(
            texts(&paragraphs),
            vec!["Modules", "1 Class Foo:", "A thing.", "Fields:", "–\u{a0}int x: the x.", "Methods:"]
        );

        let heading = &paragraphs[1];
        assert_eq!(heading.runs[1].text, "Foo");
        assert_eq!(heading.runs[1].font.as_deref(), Some("Courier New"));
        assert_eq!(heading.runs[0].font.as_deref(), Some("Times New Roman"));

        let item = &paragraphs[4];
        assert_eq!(item.runs[1].text, "int x");
        assert_eq!(item.runs[1].font.as_deref(), Some("Courier New"));
        assert_eq!(item.left_indent, Some(1417));
        assert_eq!(item.first_line_indent, None);
    }

    #[test]
    fn test_typography_survives_serialization() {
        let bytes = render(&foo_catalog(), &english()).unwrap();
        let paragraphs = read_paragraphs(&bytes).unwrap();

        assert_eq!(paragraphs[0].first_line_indent, None);
        for (i, para) in paragraphs.iter().enumerate() {
            assert_eq!(para.line_spacing, Some(LineSpacing::Single), "paragraph {}", i);
            assert_eq!(para.space_after, Some(0), "paragraph {}", i);
            if (1..=3).contains(&i) || i == 5 {
                assert_eq!(para.first_line_indent, Some(709), "paragraph {}", i);
            }
            for run in &para.runs {
                assert_eq!(run.size, Some(28));
                assert_eq!(run.bold, Some(false));
            }
        }
    }

    #[test]
    fn test_field_and_method_round_trip() {
        let catalog = Catalog::new(vec![
            EntityDescriptor::new(EntityKind::Structure, "S", "s")
                .with_field("x", Some("y"))
                .with_method("void run()", None),
        ]);
        let paragraphs = read_paragraphs(&render(&catalog, &english()).unwrap()).unwrap();
        let text = texts(&paragraphs);
        assert!(text[4].ends_with("x: y."));
        assert_eq!(text[6], "–\u{a0}void run().");
    }

    #[test]
    fn test_ordinals_are_sequential() {
        let catalog: Catalog = (0..5)
            .map(|i| EntityDescriptor::new(EntityKind::Class, format!("E{}", i), "e"))
            .collect();
        let paragraphs = read_paragraphs(&render(&catalog, &english()).unwrap()).unwrap();
        let headings: Vec<String> = texts(&paragraphs)
            .into_iter()
            .filter(|t| t.ends_with(':') && t.contains(" Class "))
            .collect();
        assert_eq!(
            headings,
            vec!["1 Class E0:", "2 Class E1:", "3 Class E2:", "4 Class E3:", "5 Class E4:"]
        );
    }

    #[test]
    fn test_empty_lists_emit_captions_only() {
        let catalog = Catalog::new(vec![EntityDescriptor::new(EntityKind::Class, "Empty", "nothing")]);
        let document = build_document(&catalog, &english()).unwrap();
        // header, heading, summary, two captions
        assert_eq!(document.paragraph_count(), 5);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = Catalog::builtin().unwrap();
        let config = ReportConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.docx");
        let b = dir.path().join("b.docx");
        write_report(&catalog, &config, &a).unwrap();
        write_report(&catalog, &config, &b).unwrap();

        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
        assert_eq!(
            read_paragraphs_from_path(&a).unwrap(),
            read_paragraphs_from_path(&b).unwrap()
        );
    }

    #[test]
    fn test_builtin_report_shape() {
        let catalog = Catalog::builtin().unwrap();
        let config = ReportConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::config::DEFAULT_OUTPUT);
        let summary = write_report(&catalog, &config, &path).unwrap();

        let items: usize = catalog
            .entities()
            .iter()
            .map(|e| e.fields.len() + e.methods.len())
            .sum();
        assert_eq!(summary.entities, 72);
        assert_eq!(summary.paragraphs, 1 + 72 * 4 + items);

        let paragraphs = read_paragraphs_from_path(&path).unwrap();
        assert_eq!(paragraphs.len(), summary.paragraphs);
        assert_eq!(paragraphs[0].text(), "3.1 Описание программных модулей");
        assert!(paragraphs[1].text().starts_with("1 Класс Employee"));
    }

    #[test]
    fn test_blank_item_policy() {
        let catalog = Catalog::new(vec![EntityDescriptor {
            fields: vec![ItemDescriptor::default()],
            ..EntityDescriptor::new(EntityKind::Class, "Foo", "f")
        }]);

        let lenient = read_paragraphs(&render(&catalog, &english()).unwrap()).unwrap();
        assert_eq!(lenient[4].text(), "–\u{a0}.");

        let mut strict = english();
        strict.validation = ValidationPolicy::Strict;
        let err = render(&catalog, &strict).unwrap_err();
        assert!(matches!(err, Error::InvalidEntity { index: 1, .. }));
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");
        let err = write_report(&foo_catalog(), &english(), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_catalog_does_not_touch_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"previous").unwrap();

        let catalog = Catalog::new(vec![EntityDescriptor::new(EntityKind::Class, " ", "x")]);
        assert!(write_report(&catalog, &english(), &path).is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }

    #[test]
    fn test_invalid_typography_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        let mut config = english();
        config.typography.font_size_pt = -3.0;

        let err = write_report(&foo_catalog(), &config, &path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_language_follows_metadata() {
        let styles = |config: &ReportConfig| {
            let bytes = render(&foo_catalog(), config).unwrap();
            let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
            let mut xml = String::new();
            std::io::Read::read_to_string(&mut archive.by_name("word/styles.xml").unwrap(), &mut xml)
                .unwrap();
            xml
        };

        assert!(styles(&ReportConfig::default()).contains(r#"<w:lang w:val="ru-RU"/>"#));

        let mut config = english();
        config.metadata.language = Some("en-US".to_string());
        assert!(styles(&config).contains(r#"<w:lang w:val="en-US"/>"#));

        config.metadata.language = None;
        assert!(!styles(&config).contains("w:lang"));
    }

    #[test]
    fn test_core_properties_and_page() {
        let mut config = english();
        config.metadata.creator = Some("Отдел разработки".to_string());
        let document = build_document(&foo_catalog(), &config).unwrap();
        assert_eq!(document.section().page_width, 11906);

        let xml = crate::ooxml::docx::reader::read_document_xml(&document.to_bytes().unwrap()).unwrap();
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838" w:orient="portrait"/>"#));
    }

    proptest! {
        #[test]
        fn prop_headings_are_numbered_in_catalog_order(
            shapes in proptest::collection::vec((any::<bool>(), 0usize..4, 0usize..4), 1..12)
        ) {
            let catalog: Catalog = shapes
                .iter()
                .enumerate()
                .map(|(i, &(is_class, fields, methods))| {
                    let kind = if is_class { EntityKind::Class } else { EntityKind::Structure };
                    let mut entity = EntityDescriptor::new(kind, format!("N{}", i), "s");
                    entity.fields = vec![ItemDescriptor::new("f", Some("d")); fields];
                    entity.methods = vec![ItemDescriptor::new("m()", None); methods];
                    entity
                })
                .collect();
            let document = build_document(&catalog, &english()).unwrap();

            let mut expected = 1;
            for para in document.paragraphs() {
                let runs = para.runs();
                if runs.len() == 3 && runs[2].text() == ":" {
                    let ordinal: usize = runs[0].text().split(' ').next().unwrap().parse().unwrap();
                    prop_assert_eq!(ordinal, expected);
                    prop_assert_eq!(runs[1].text(), format!("N{}", expected - 1));
                    expected += 1;
                }
            }
            prop_assert_eq!(expected - 1, shapes.len());
        }
    }
}
