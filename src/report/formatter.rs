//! Paragraph-level formatting of the report.
use crate::catalog::{EntityDescriptor, EntityKind, ItemDescriptor};
use crate::config::{Labels, ReportConfig};
use crate::ooxml::docx::writer::{MutableDocument, MutableParagraph};

use super::style::{ParagraphShape, RunRole, StyleTable};

/// Joins the item marker to the code token so the two never wrap apart.
pub const NBSP: char = '\u{a0}';

/// Punctuation closing the item at `index` of a list of `len` items.
pub fn terminator(index: usize, len: usize) -> char {
    if index + 1 == len { '.' } else { ';' }
}

/// Appends styled paragraphs to a document.
///
/// Every operation only appends; nothing already written is touched again.
/// Formatting never fails: degenerate input such as an item with neither
/// code nor description still yields its paragraph.
#[derive(Debug)]
pub struct Formatter<'a> {
    document: MutableDocument,
    styles: StyleTable,
    labels: &'a Labels,
}

impl<'a> Formatter<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self::with_document(MutableDocument::new(), config)
    }

    /// Continue appending to an existing document.
    pub fn with_document(document: MutableDocument, config: &'a ReportConfig) -> Self {
        Self {
            document,
            styles: StyleTable::new(&config.typography),
            labels: &config.labels,
        }
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn document(&self) -> &MutableDocument {
        &self.document
    }

    /// Hand the finished document over to the caller.
    pub fn finish(self) -> MutableDocument {
        self.document
    }

    fn paragraph(&mut self, shape: ParagraphShape) -> Paragraph<'_> {
        let para = self.document.add_paragraph();
        self.styles.apply_paragraph(para, shape);
        Paragraph {
            para,
            styles: &self.styles,
        }
    }

    /// Append the unindented section header.
    pub fn append_section_header(&mut self, title: &str) {
        self.paragraph(ParagraphShape::Header)
            .run(title, RunRole::HeaderText);
    }

    /// Append a first-line indented prose paragraph.
    pub fn append_body_paragraph(&mut self, text: &str) {
        self.paragraph(ParagraphShape::Body)
            .run(text, RunRole::SummaryText);
    }

    /// Append `"{ordinal} {kind} {name}:"` with the name in the code font.
    pub fn append_entity_heading(&mut self, ordinal: usize, kind: EntityKind, name: &str) {
        let prefix = format!("{} {} ", ordinal, self.labels.kind(kind));
        self.paragraph(ParagraphShape::Body)
            .run(&prefix, RunRole::HeadingPrefix)
            .run(name, RunRole::HeadingName)
            .run(":", RunRole::HeadingColon);
    }

    /// Append the caption `label` followed by one paragraph per item.
    ///
    /// Items end with `;` except the last, which ends with `.`. An empty
    /// list yields the caption only.
    pub fn append_item_list(&mut self, label: &str, items: &[ItemDescriptor]) {
        self.append_body_paragraph(label);
        if items.is_empty() {
            return;
        }

        let marker = format!("{}{}", self.labels.marker, NBSP);
        let len = items.len();
        for (index, item) in items.iter().enumerate() {
            let end = terminator(index, len);
            let mut para = self.paragraph(ParagraphShape::Item);
            para.run(&marker, RunRole::ItemMarker);

            let code = item.code_text();
            if !code.is_empty() {
                para.run(code, RunRole::ItemCode);
            }

            match item.description_text() {
                Some(description) => {
                    para.run(": ", RunRole::ItemSeparator)
                        .run(&format!("{}{}", description, end), RunRole::ItemText);
                },
                None => {
                    para.run(&end.to_string(), RunRole::ItemText);
                },
            }
        }
    }

    /// Append the full block of one entity: heading, summary, fields and methods.
    pub fn append_entity(&mut self, ordinal: usize, entity: &EntityDescriptor) {
        self.append_entity_heading(ordinal, entity.kind, &entity.name);
        self.append_body_paragraph(&entity.summary);
        let labels = self.labels;
        self.append_item_list(&labels.fields, &entity.fields);
        self.append_item_list(&labels.methods, &entity.methods);
    }
}

/// A freshly appended paragraph plus the table styling its runs.
struct Paragraph<'p> {
    para: &'p mut MutableParagraph,
    styles: &'p StyleTable,
}

impl Paragraph<'_> {
    fn run(&mut self, text: &str, role: RunRole) -> &mut Self {
        let run = self.para.add_run_with_text(text);
        self.styles.apply_run(run, role);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ITEM_PREFIX: &str = "–\u{a0}";

    fn texts(doc: &MutableDocument) -> Vec<String> {
        doc.paragraphs().iter().map(MutableParagraph::text).collect()
    }

    #[test]
    fn test_terminator() {
        assert_eq!(terminator(0, 1), '.');
        assert_eq!(terminator(0, 2), ';');
        assert_eq!(terminator(1, 2), '.');
    }

    #[test]
    fn test_section_header_has_no_indent() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        fmt.append_section_header("3.1 Описание программных модулей");
        let doc = fmt.finish();

        let para = &doc.paragraphs()[0];
        assert_eq!(para.indent_first_line(), None);
        assert_eq!(para.indent_left(), None);
        assert_eq!(para.runs().len(), 1);
        assert_eq!(para.runs()[0].get_font_name(), Some("Times New Roman"));
        assert_eq!(para.runs()[0].get_font_size(), Some(28));
        assert_eq!(para.runs()[0].is_bold(), Some(false));
    }

    #[test]
    fn test_entity_heading_runs() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        fmt.append_entity_heading(7, EntityKind::Structure, "StorageStats");
        let doc = fmt.finish();

        let para = &doc.paragraphs()[0];
        assert_eq!(para.indent_first_line(), Some(709));
        let runs: Vec<_> = para
            .runs()
            .iter()
            .map(|r| (r.text(), r.get_font_name()))
            .collect();
        assert_eq!(
            runs,
            vec![
                ("7 Структура ", Some("Times New Roman")),
                ("StorageStats", Some("Courier New")),
                (":", Some("Times New Roman")),
            ]
        );
    }

    #[test]
    fn test_item_list_runs() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        let items = vec![
            ItemDescriptor::new("int x", Some("the x")),
            ItemDescriptor::new("void reset()", None),
        ];
        fmt.append_item_list("Поля:", &items);
        let doc = fmt.finish();

        assert_eq!(
            texts(&doc),
            vec!["Поля:", "–\u{a0}int x: the x;", "–\u{a0}void reset()."]
        );

        let first = &doc.paragraphs()[1];
        assert_eq!(first.indent_left(), Some(1417));
        assert_eq!(first.indent_first_line(), None);
        let fonts: Vec<_> = first.runs().iter().map(|r| r.get_font_name()).collect();
        assert_eq!(
            fonts,
            vec![
                Some("Times New Roman"),
                Some("Courier New"),
                Some("Times New Roman"),
                Some("Times New Roman"),
            ]
        );
        assert_eq!(doc.paragraphs()[2].runs().len(), 3);
    }

    #[test]
    fn test_empty_item_list_is_caption_only() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        fmt.append_item_list("Методы:", &[]);
        assert_eq!(texts(fmt.document()), vec!["Методы:"]);
    }

    #[test]
    fn test_blank_item_renders_marker_and_punctuation() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        let items = vec![ItemDescriptor::default(), ItemDescriptor::new("  ", Some(" "))];
        fmt.append_item_list("Поля:", &items);
        let doc = fmt.finish();
        assert_eq!(texts(&doc)[1..], ["–\u{a0};", "–\u{a0}."]);
        assert_eq!(doc.paragraphs()[2].runs().len(), 2);
    }

    #[test]
    fn test_description_without_code() {
        let config = ReportConfig::default();
        let mut fmt = Formatter::new(&config);
        fmt.append_item_list("Поля:", &[ItemDescriptor::new("", Some("нет полей"))]);
        assert_eq!(texts(fmt.document())[1], "–\u{a0}: нет полей.");
    }

    #[test]
    fn test_custom_labels() {
        let mut config = ReportConfig::default();
        config.labels.class = "Class".to_string();
        config.labels.fields = "Fields:".to_string();
        config.labels.methods = "Methods:".to_string();
        config.labels.marker = "-".to_string();

        let entity = EntityDescriptor::new(EntityKind::Class, "Foo", "A thing.")
            .with_field("int x", Some("the x"));
        let mut fmt = Formatter::new(&config);
        fmt.append_entity(1, &entity);
        assert_eq!(
            texts(fmt.document()),
            vec!["1 Class Foo:", "A thing.", "Fields:", "-\u{a0}int x: the x.", "Methods:"]
        );
    }

    fn item_strategy() -> impl Strategy<Value = ItemDescriptor> {
        ("[a-z ()<>&]{0,12}", proptest::option::of("[a-zа-я ,]{0,16}"))
            .prop_map(|(code, description)| ItemDescriptor { code, description })
    }

    proptest! {
        #[test]
        fn prop_only_last_item_ends_with_period(
            items in proptest::collection::vec(item_strategy(), 1..24)
        ) {
            let config = ReportConfig::default();
            let mut fmt = Formatter::new(&config);
            fmt.append_item_list("Поля:", &items);
            let doc = fmt.finish();

            let paragraphs = &doc.paragraphs()[1..];
            prop_assert_eq!(paragraphs.len(), items.len());
            for (i, para) in paragraphs.iter().enumerate() {
                let text = para.text();
                let expected = if i + 1 == items.len() { '.' } else { ';' };
                prop_assert_eq!(text.chars().last(), Some(expected));
                prop_assert!(text.starts_with(ITEM_PREFIX), "item must open with the marker: {:?}", text);
                prop_assert_eq!(para.indent_left(), Some(1417));
            }
        }

        #[test]
        fn prop_fonts_depend_only_on_role(
            items in proptest::collection::vec(item_strategy(), 0..8)
        ) {
            let config = ReportConfig::default();
            let mut fmt = Formatter::new(&config);
            fmt.append_item_list("Поля:", &items);
            let doc = fmt.finish();

            for (item, para) in items.iter().zip(&doc.paragraphs()[1..]) {
                for (pos, run) in para.runs().iter().enumerate() {
                    let is_code = pos == 1 && !item.code_text().is_empty();
                    let font = if is_code { "Courier New" } else { "Times New Roman" };
                    prop_assert_eq!(run.get_font_name(), Some(font));
                    prop_assert_eq!(run.get_font_size(), Some(28));
                    prop_assert_eq!(run.is_bold(), Some(false));
                }
            }
        }
    }
}
