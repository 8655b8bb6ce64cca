//! Open Packaging Conventions (OPC) writing.
//!
//! A report is a WordprocessingML package: a ZIP archive of XML parts tied
//! together by relationship parts and a content-types manifest.

pub mod constants;
pub mod package;
pub mod packuri;
pub mod pkgwriter;
pub mod rel;

pub use package::{OpcPackage, Part};
pub use packuri::PackURI;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
