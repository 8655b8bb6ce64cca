//! moddoc - generates the "description of software modules" section of a
//! project report as a Word (.docx) document.
//!
//! The input is a [`Catalog`] of classes and structures, each with a summary
//! and lists of fields and methods. The output is one document section in
//! which every entity becomes a numbered heading, a summary paragraph and two
//! item lists, all typeset from a fixed role table: prose in a serif face,
//! identifiers in a monospace face, 14pt, single spacing.
//!
//! # Features
//!
//! - **Catalog as data**: entities are plain YAML; the reference catalog is built in
//! - **Deterministic output**: the same inputs always produce the same bytes
//! - **Atomic writes**: a failed run never leaves a partial file behind
//! - **Read-back**: written documents can be parsed into paragraph snapshots
//!
//! # Example
//!
//! ```no_run
//! use moddoc::{Catalog, ReportConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin()?;
//! let config = ReportConfig::default();
//! let summary = moddoc::write_report(&catalog, &config, "section.docx")?;
//! println!("{} entities, {} paragraphs", summary.entities, summary.paragraphs);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom catalog
//!
//! ```
//! use moddoc::catalog::{Catalog, EntityDescriptor, EntityKind};
//! use moddoc::ooxml::docx::read_paragraphs;
//! use moddoc::ReportConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::new(vec![
//!     EntityDescriptor::new(EntityKind::Class, "Foo", "A thing.")
//!         .with_field("int x", Some("the x")),
//! ]);
//! let bytes = moddoc::render(&catalog, &ReportConfig::default())?;
//! let paragraphs = read_paragraphs(&bytes)?;
//! assert_eq!(paragraphs[1].text(), "1 Класс Foo:");
//! assert_eq!(paragraphs[4].text(), "–\u{a0}int x: the x.");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod common;
pub mod config;
pub mod ooxml;
pub mod report;

pub use catalog::{Catalog, EntityDescriptor, EntityKind, ItemDescriptor, ValidationPolicy};
pub use common::{Error, Result};
pub use config::ReportConfig;
pub use report::{ReportSummary, build_document, render, write_report};
