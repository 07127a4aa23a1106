//! # Selection State
//!
//! The "currently being edited" pointer. Either nothing is selected or
//! exactly one section id is. The session drives every transition: click
//! selects, closing the panel clears, and any document update that drops the
//! selected id resets to none so the pointer never dangles.

use pagecraft_model::Document;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(String),
}

impl Selection {
    /// Select a section. Re-selecting the current id is idempotent.
    pub fn select(&mut self, id: impl Into<String>) {
        *self = Selection::Selected(id.into());
    }

    /// Editor panel closed.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Drop the selection if its id is absent from the current document.
    pub fn reconcile(&mut self, doc: &Document) {
        if let Selection::Selected(id) = self {
            if !doc.contains(id) {
                *self = Selection::None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = Selection::default();
        assert_eq!(selection.id(), None);

        selection.select("hero-1");
        selection.select("hero-1");
        assert_eq!(selection.id(), Some("hero-1"));
        assert!(selection.is_selected("hero-1"));

        selection.clear();
        assert_eq!(selection, Selection::None);
    }

    #[test]
    fn test_reconcile_drops_missing_id() {
        let mut selection = Selection::Selected("gone".to_string());
        selection.reconcile(&Document::default());
        assert_eq!(selection, Selection::None);
    }
}
