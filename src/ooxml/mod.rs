//! Office Open XML (OOXML) output.
//!
//! Organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package assembly (parts, relationships, ZIP)
//! 2. **WordprocessingML** (`docx`): the document model and its read-back
pub mod docx;
pub mod opc;
