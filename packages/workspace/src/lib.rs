//! # Pagecraft Workspace
//!
//! App-level glue around the editing core:
//!
//! - **ingest**: the one asynchronous boundary, turning a user-selected image
//!   file into a self-contained data URI the document can carry
//! - **script**: recorded edit sequences (mutations plus image embeds) that
//!   replay through an [`pagecraft_editor::EditSession`] in dispatch order
//! - **export**: snapshot-and-wrap of the compiled page into one
//!   deterministically named downloadable artifact

pub mod export;
pub mod ingest;
pub mod script;

pub use export::{write_artifact, ExportError, ARTIFACT_FILE_NAME};
pub use ingest::{ingest_image, IngestError};
pub use script::{apply_script, EditScript, EditStep, ScriptError};
