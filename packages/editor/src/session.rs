//! # Edit Session
//!
//! The single logical owner of the document value. Every update replaces the
//! whole snapshot; events are applied to completion in dispatch order, which
//! is the entire concurrency control mechanism.
//!
//! Asynchronous image uploads go through a ticket: the target slot and its
//! value are recorded when the upload starts, and a late result is discarded
//! if the target vanished or was edited in the meantime, instead of silently
//! overwriting the newer value.

use crate::mutations::{image_slot_value, ImageSlot, Mutation, MutationError};
use crate::selection::Selection;
use pagecraft_model::{Document, Section, ViewMode};

/// One editing session over one document.
pub struct EditSession {
    /// Canonical document snapshot
    document: Document,

    /// Current edit target
    selection: Selection,

    /// Cosmetic preview viewport; never reaches the document or the export
    view_mode: ViewMode,

    /// Increments on every accepted update
    version: u64,
}

/// Receipt for an in-flight image upload, bound to its target slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestTicket {
    section_id: String,
    slot: ImageSlot,
    /// Slot value when the upload started, for supersession detection
    observed: Option<String>,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: Selection::default(),
            view_mode: ViewMode::default(),
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Section click. The render surface guarantees the id exists; a stale id
    /// is handled defensively by clearing instead of dangling.
    pub fn select(&mut self, id: &str) {
        if self.document.contains(id) {
            self.selection.select(id);
        } else {
            tracing::warn!(id, "select target missing from document");
            self.selection.clear();
        }
    }

    /// Editor panel closed.
    pub fn close_editor(&mut self) {
        self.selection.clear();
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.selection.id().and_then(|id| self.document.find(id))
    }

    /// Apply a mutation strictly: on error the snapshot is unchanged and the
    /// error propagates. Scripted and programmatic callers use this path.
    pub fn apply(&mut self, mutation: Mutation) -> Result<u64, MutationError> {
        let next = mutation.apply(&self.document)?;
        self.install(next);
        Ok(self.version)
    }

    /// Apply a gesture-driven mutation with the UI error policy:
    ///
    /// - a missing section id signals a stale selection; recovered locally by
    ///   clearing the selection, never surfaced
    /// - any other error means the editor surface constructed a request a
    ///   valid document cannot produce; loud in development, logged no-op in
    ///   release
    ///
    /// Returns the (possibly unchanged) version.
    pub fn dispatch(&mut self, mutation: Mutation) -> u64 {
        match mutation.apply(&self.document) {
            Ok(next) => self.install(next),
            Err(MutationError::SectionNotFound(id)) => {
                tracing::warn!(%id, "mutation targeted a missing section; selection reset");
                self.selection.reconcile(&self.document);
            }
            Err(err) => {
                debug_assert!(false, "invalid mutation from editor surface: {err}");
                tracing::error!(%err, "dropping invalid mutation");
            }
        }
        self.version
    }

    fn install(&mut self, next: Document) {
        self.document = next;
        self.version += 1;
        self.selection.reconcile(&self.document);
    }

    /// Start an image upload for a slot. Fails if the target section is gone
    /// (stale selection) or its variant has no such slot.
    pub fn begin_image_edit(
        &self,
        section_id: &str,
        slot: ImageSlot,
    ) -> Result<IngestTicket, MutationError> {
        let section = self
            .document
            .find(section_id)
            .ok_or_else(|| MutationError::SectionNotFound(section_id.to_string()))?;
        let observed = image_slot_value(section, slot)?.map(str::to_string);

        Ok(IngestTicket {
            section_id: section_id.to_string(),
            slot,
            observed,
        })
    }

    /// Complete an image upload. The encoded result is applied through the
    /// ordinary mutation path, unless the target section no longer exists or
    /// the slot changed since the ticket was issued; then the late result is
    /// discarded and `Ok(None)` is returned.
    pub fn complete_image_edit(
        &mut self,
        ticket: IngestTicket,
        url: String,
    ) -> Result<Option<u64>, MutationError> {
        let Some(section) = self.document.find(&ticket.section_id) else {
            tracing::warn!(
                section_id = %ticket.section_id,
                "discarding upload result: target section removed"
            );
            return Ok(None);
        };

        let current = image_slot_value(section, ticket.slot)?.map(str::to_string);
        if current != ticket.observed {
            tracing::warn!(
                section_id = %ticket.section_id,
                slot = ticket.slot.as_str(),
                "discarding upload result: slot edited while upload was in flight"
            );
            return Ok(None);
        }

        let version = self.apply(Mutation::SetImage {
            section_id: ticket.section_id,
            slot: ticket.slot,
            url,
        })?;
        Ok(Some(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::seed;

    fn session() -> EditSession {
        EditSession::new(seed::default_document())
    }

    fn hero_id(session: &EditSession) -> String {
        session.document().sections[1].id.clone()
    }

    #[test]
    fn test_version_increments_on_accepted_updates() {
        let mut session = session();
        let id = hero_id(&session);
        assert_eq!(session.version(), 0);

        let v = session
            .apply(Mutation::SetText {
                section_id: id,
                field: crate::TextField::Title,
                value: "Hi".to_string(),
            })
            .unwrap();
        assert_eq!(v, 1);
    }

    #[test]
    fn test_dispatch_recovers_from_stale_selection() {
        let mut session = session();
        session.select("not-a-section");
        assert_eq!(session.selection().id(), None);

        let before = session.version();
        let after = session.dispatch(Mutation::SetName {
            section_id: "not-a-section".to_string(),
            name: "x".to_string(),
        });
        assert_eq!(before, after);
        assert!(session.selected_section().is_none());
    }

    #[test]
    fn test_removing_selected_section_clears_selection() {
        let mut session = session();
        let id = hero_id(&session);
        session.select(&id);
        assert!(session.selected_section().is_some());

        session
            .apply(Mutation::RemoveSection {
                section_id: id.clone(),
            })
            .unwrap();
        assert_eq!(session.selection().id(), None);
        assert!(!session.document().contains(&id));
    }

    #[test]
    fn test_close_editor_clears_selection() {
        let mut session = session();
        let id = hero_id(&session);
        session.select(&id);
        session.close_editor();
        assert_eq!(session.selection().id(), None);
    }

    #[test]
    fn test_upload_ticket_applies_when_target_unchanged() {
        let mut session = session();
        let id = hero_id(&session);

        let ticket = session.begin_image_edit(&id, ImageSlot::Main).unwrap();
        let version = session
            .complete_image_edit(ticket, "data:image/png;base64,BBBB".to_string())
            .unwrap();
        assert!(version.is_some());

        let hero = session.document().find(&id).unwrap();
        assert_eq!(
            hero.content.image().unwrap().url,
            "data:image/png;base64,BBBB"
        );
    }

    #[test]
    fn test_upload_ticket_discarded_when_slot_superseded() {
        let mut session = session();
        let id = hero_id(&session);

        let ticket = session.begin_image_edit(&id, ImageSlot::Main).unwrap();

        // User uploads a different image before the first read completes
        session
            .apply(Mutation::SetImage {
                section_id: id.clone(),
                slot: ImageSlot::Main,
                url: "data:image/png;base64,NEWER".to_string(),
            })
            .unwrap();

        let result = session
            .complete_image_edit(ticket, "data:image/png;base64,LATE".to_string())
            .unwrap();
        assert_eq!(result, None);

        let hero = session.document().find(&id).unwrap();
        assert_eq!(
            hero.content.image().unwrap().url,
            "data:image/png;base64,NEWER"
        );
    }

    #[test]
    fn test_upload_ticket_discarded_when_section_removed() {
        let mut session = session();
        let id = hero_id(&session);

        let ticket = session.begin_image_edit(&id, ImageSlot::Main).unwrap();
        session
            .apply(Mutation::RemoveSection {
                section_id: id.clone(),
            })
            .unwrap();

        let result = session
            .complete_image_edit(ticket, "data:image/png;base64,LATE".to_string())
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_view_mode_is_session_only() {
        let mut session = session();
        let snapshot = session.document().clone();

        session.set_view_mode(ViewMode::Mobile);
        assert_eq!(session.view_mode(), ViewMode::Mobile);
        assert_eq!(session.document(), &snapshot);
    }
}
