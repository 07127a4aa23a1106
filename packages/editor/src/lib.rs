//! # Pagecraft Editor
//!
//! Core editing engine for Pagecraft documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: sections + styles (pure data)        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + reorder + selection     │
//! │  - Field-scoped copy-on-write updates       │
//! │  - Single-element section reordering        │
//! │  - Session: snapshot, version, selection    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: document → standalone page   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Commands, not callbacks**: every gesture becomes a [`Mutation`] value
//!    consumed by one reducer, so the update sequence is testable without a UI
//! 2. **Copy-on-write**: `Mutation::apply` returns a new [`Document`]; a
//!    holder of the previous snapshot never observes a half-updated section
//! 3. **Single writer**: the [`EditSession`] owns the canonical snapshot and
//!    applies updates in dispatch order, no batching or reordering
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, Mutation, TextField};
//!
//! let mut session = EditSession::new(document);
//! session.select("hero-1");
//!
//! session.apply(Mutation::SetText {
//!     section_id: "hero-1".to_string(),
//!     field: TextField::Title,
//!     value: "Welcome!".to_string(),
//! })?;
//! ```

mod mutations;
mod reorder;
mod selection;
mod session;

pub use mutations::{
    FeatureField, ImageSlot, ListItemField, Mutation, MutationError, TextField,
};
pub use reorder::{move_section, move_section_to};
pub use selection::Selection;
pub use session::{EditSession, IngestTicket};

// Re-export model types callers need to build mutations
pub use pagecraft_model::{Document, Section, SocialPlatform, StyleField, TextAlign, ViewMode};
