//! Recorded edit sequences.
//!
//! A script is the serialized form of the command stream the editor surface
//! would produce: plain mutations, plus image embeds that route through the
//! ingestion boundary before becoming `SetImage` mutations. Steps apply
//! strictly and in order; the first failure aborts the script with the
//! document left at the last accepted step.

use crate::ingest::{ingest_image, IngestError};
use pagecraft_editor::{EditSession, ImageSlot, Mutation, MutationError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditStep {
    /// Apply a document mutation
    Edit(Mutation),

    /// Ingest an image file and apply it to a section's image slot
    EmbedImage {
        section_id: String,
        slot: ImageSlot,
        path: PathBuf,
    },
}

/// An ordered list of edit steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    pub steps: Vec<EditStep>,
}

impl EditScript {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Replay a script against a session, in step order.
pub async fn apply_script(
    session: &mut EditSession,
    script: &EditScript,
) -> Result<(), ScriptError> {
    for step in &script.steps {
        match step {
            EditStep::Edit(mutation) => {
                session.apply(mutation.clone())?;
            }
            EditStep::EmbedImage {
                section_id,
                slot,
                path,
            } => {
                let ticket = session.begin_image_edit(section_id, *slot)?;
                let url = ingest_image(path).await?;
                // Scripts run single-threaded over the session, so the slot
                // cannot have been superseded; a discard here means the
                // script itself removed the target.
                if session.complete_image_edit(ticket, url)?.is_none() {
                    tracing::warn!(%section_id, "embed target vanished during script");
                }
            }
        }
    }
    Ok(())
}
