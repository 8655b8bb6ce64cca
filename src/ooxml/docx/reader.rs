//! Read a written document back into paragraph and run snapshots.
//!
//! Only the formatting the writer emits is recognised: paragraph spacing and
//! indentation, run font, size and bold. Everything else in the part is
//! skipped.
use crate::common::xml::{resolve_entity, unescape_xml};
use crate::common::{Error, Result};
use crate::ooxml::docx::format::LineSpacing;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::{Cursor, Read};
use std::path::Path;

const DOCUMENT_MEMBER: &str = "word/document.xml";

/// A run as found in the document part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSnapshot {
    pub text: String,
    /// `w:ascii` of `w:rFonts`
    pub font: Option<String>,
    /// Size in half-points
    pub size: Option<u32>,
    pub bold: Option<bool>,
}

/// A paragraph as found in the document part. Indents are in twips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphSnapshot {
    pub first_line_indent: Option<i32>,
    pub left_indent: Option<i32>,
    pub space_after: Option<u32>,
    pub line_spacing: Option<LineSpacing>,
    pub runs: Vec<RunSnapshot>,
}

impl ParagraphSnapshot {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Extract `word/document.xml` from a package.
pub fn read_document_xml(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut member = archive
        .by_name(DOCUMENT_MEMBER)
        .map_err(|_| Error::PartNotFound(DOCUMENT_MEMBER.to_string()))?;
    let mut xml = String::with_capacity(member.size() as usize);
    member.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Read the body paragraphs of a .docx package.
pub fn read_paragraphs(bytes: &[u8]) -> Result<Vec<ParagraphSnapshot>> {
    parse_document_xml(&read_document_xml(bytes)?)
}

pub fn read_paragraphs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ParagraphSnapshot>> {
    let bytes = std::fs::read(path)?;
    read_paragraphs(&bytes)
}

/// Parse paragraphs out of a document part.
pub fn parse_document_xml(xml: &str) -> Result<Vec<ParagraphSnapshot>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut para: Option<ParagraphSnapshot> = None;
    let mut run: Option<RunSnapshot> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"p" => para = Some(ParagraphSnapshot::default()),
                b"r" if para.is_some() => run = Some(RunSnapshot::default()),
                b"t" if run.is_some() => in_text = true,
                _ => apply_properties(&e, para.as_mut(), run.as_mut())?,
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(ParagraphSnapshot::default()),
                _ => apply_properties(&e, para.as_mut(), run.as_mut())?,
            },
            Ok(Event::Text(e)) if in_text => {
                if let Some(r) = run.as_mut() {
                    let raw = std::str::from_utf8(e.as_ref()).map_err(|e| Error::Xml(e.to_string()))?;
                    r.text.push_str(&unescape_xml(raw));
                }
            },
            Ok(Event::GeneralRef(e)) if in_text => {
                let name = std::str::from_utf8(e.as_ref()).map_err(|e| Error::Xml(e.to_string()))?;
                let ch = resolve_entity(name)
                    .ok_or_else(|| Error::Xml(format!("unknown entity &{};", name)))?;
                if let Some(r) = run.as_mut() {
                    r.text.push(ch);
                }
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => {
                    if let (Some(r), Some(p)) = (run.take(), para.as_mut()) {
                        p.runs.push(r);
                    }
                },
                b"p" => {
                    if let Some(p) = para.take() {
                        paragraphs.push(p);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(paragraphs)
}

/// Apply a property element (`w:spacing`, `w:ind`, `w:rFonts`, `w:b`, `w:sz`).
fn apply_properties(
    e: &BytesStart<'_>,
    para: Option<&mut ParagraphSnapshot>,
    run: Option<&mut RunSnapshot>,
) -> Result<()> {
    let name = e.local_name();
    match (name.as_ref(), run, para) {
        (b"rFonts", Some(run), _) => {
            run.font = attr(e, b"ascii")?;
        },
        (b"b", Some(run), _) => {
            run.bold = Some(!matches!(attr(e, b"val")?.as_deref(), Some("0" | "false" | "off")));
        },
        (b"sz", Some(run), _) => {
            run.size = parse_attr(e, b"val")?;
        },
        (b"spacing", None, Some(para)) => {
            para.space_after = parse_attr(e, b"after")?;
            let line: Option<u32> = parse_attr(e, b"line")?;
            let rule = attr(e, b"lineRule")?.unwrap_or_else(|| "auto".to_string());
            para.line_spacing = line.and_then(|l| LineSpacing::from_xml_values(l, &rule));
        },
        (b"ind", None, Some(para)) => {
            para.left_indent = parse_attr(e, b"left")?;
            para.first_line_indent = match parse_attr::<i32>(e, b"firstLine")? {
                Some(first) => Some(first),
                None => parse_attr::<i32>(e, b"hanging")?.map(|h| -h),
            };
        },
        _ => {},
    }
    Ok(())
}

/// Value of the attribute with local name `key`.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>> {
    for attribute in e.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == key {
            let raw =
                std::str::from_utf8(&attribute.value).map_err(|e| Error::Xml(e.to_string()))?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

fn parse_attr<T: std::str::FromStr>(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<T>> {
    match attr(e, key)? {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::Xml(format!("bad numeric attribute value {:?}", value))),
        None => Ok(None),
    }
}
