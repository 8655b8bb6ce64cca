//! Word document (.docx) support.
//!
//! The writer builds a document in memory and serializes it as a
//! WordprocessingML package; the reader recovers paragraph and run
//! formatting from a written package.

pub mod format;
pub mod reader;
pub mod writer;

pub use format::LineSpacing;
pub use reader::{ParagraphSnapshot, RunSnapshot, read_paragraphs, read_paragraphs_from_path};
pub use writer::{MutableDocument, MutableParagraph, MutableRun};
