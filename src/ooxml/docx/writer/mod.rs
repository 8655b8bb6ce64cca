//! Write-once document writer components for DOCX.
//!
//! This module provides the writer API for creating Word documents.

pub mod doc;
pub mod paragraph;
pub mod props;
pub mod run;
pub mod section;
pub mod style;

// Re-export main document type
pub use doc::MutableDocument;

// Re-export section types
pub use section::{PageOrientation, SectionProperties};

// Re-export paragraph types
pub use paragraph::{LineSpacing, MutableParagraph};

// Re-export run types
pub use run::MutableRun;

// Re-export style types
pub use style::{DocDefaults, generate_styles_xml};

// Re-export property types
pub use props::CoreProperties;
