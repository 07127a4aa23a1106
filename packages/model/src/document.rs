use crate::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when accepting a document from the seed boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    #[error("duplicate section id: {0}")]
    DuplicateId(String),

    #[error("section {id} has brightness {value}, expected 0..=100")]
    BrightnessOutOfRange { id: String, value: u8 },
}

/// The whole page: an ordered sequence of sections. Order is significant; it
/// defines render and export order. Section ids are unique at all times.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Parse a seed document from JSON and check its invariants.
    pub fn from_seed_json(json: &str) -> Result<Self, serde_json::Error> {
        let doc: Document = serde_json::from_str(json)?;
        Ok(doc)
    }

    /// Check the document invariants: unique ids, brightness in range.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(SeedError::DuplicateId(section.id.clone()));
            }
            if let Some(image) = section.content.image() {
                if image.brightness > 100 {
                    return Err(SeedError::BrightnessOutOfRange {
                        id: section.id.clone(),
                        value: image.brightness,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{ImageAsset, SectionContent, SectionStyles, TextAlign};

    fn section(id: &str) -> Section {
        Section {
            id: id.to_string(),
            name: id.to_string(),
            content: SectionContent::Hero {
                title: "Title".to_string(),
                subtitle: "Subtitle".to_string(),
                image: ImageAsset::new("data:image/png;base64,AAAA"),
            },
            styles: SectionStyles {
                background_color: "#fff".to_string(),
                text_color: "#000".to_string(),
                accent_color: "#00f".to_string(),
                padding_y: "5rem".to_string(),
                font_size_title: "3rem".to_string(),
                font_size_body: "1.125rem".to_string(),
                text_align: TextAlign::Center,
            },
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let doc = Document::new(vec![section("a"), section("b")]);

        assert!(doc.contains("a"));
        assert_eq!(doc.position("b"), Some(1));
        assert_eq!(doc.find("b").unwrap().id, "b");
        assert!(doc.find("missing").is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let doc = Document::new(vec![section("a"), section("a")]);
        assert_eq!(doc.validate(), Err(SeedError::DuplicateId("a".to_string())));
    }

    #[test]
    fn test_validate_rejects_out_of_range_brightness() {
        let mut bad = section("a");
        if let SectionContent::Hero { image, .. } = &mut bad.content {
            image.brightness = 130;
        }
        let doc = Document::new(vec![bad]);
        assert_eq!(
            doc.validate(),
            Err(SeedError::BrightnessOutOfRange {
                id: "a".to_string(),
                value: 130
            })
        );
    }

    #[test]
    fn test_document_ids_follow_section_order() {
        let doc = Document::new(vec![section("x"), section("y"), section("z")]);
        let ids: Vec<&str> = doc.ids().collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }
}
