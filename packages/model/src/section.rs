use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of section variants. The kind decides which content fields a
/// section carries and how the renderer lays it out; it never changes after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "hero")]
    Hero,
    #[serde(rename = "why-us")]
    WhyUs,
    #[serde(rename = "academic")]
    Academic,
    #[serde(rename = "jobs")]
    Jobs,
    #[serde(rename = "institutional")]
    Institutional,
    #[serde(rename = "footer")]
    Footer,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Hero => "hero",
            SectionKind::WhyUs => "why-us",
            SectionKind::Academic => "academic",
            SectionKind::Jobs => "jobs",
            SectionKind::Institutional => "institutional",
            SectionKind::Footer => "footer",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inlined image plus its presentation brightness.
///
/// `url` is a self-contained value (usually a data URI). `brightness` is a
/// percentage in [0, 100] interpreted by the renderer as a CSS filter; it has
/// no effect on the stored pixels. Values outside the range are a caller
/// contract violation and are rejected at the seed boundary, not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub url: String,
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

pub(crate) fn default_brightness() -> u8 {
    100
}

impl ImageAsset {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            brightness: default_brightness(),
        }
    }
}

/// One entry of a section's ordered item list. Insertion order is meaningful
/// and user-controlled: add appends, delete removes by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
        }
    }
}

/// One feature row of a why-us section. The feature list is fixed-length per
/// section instance; only in-place edits exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

/// Closed set of social platform keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Youtube,
    Tiktok,
    WhatsappLatam,
    WhatsappUs,
    Linktree,
}

impl SocialPlatform {
    pub fn key(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::WhatsappLatam => "whatsappLatam",
            SocialPlatform::WhatsappUs => "whatsappUs",
            SocialPlatform::Linktree => "linktree",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("social link key not recognized for this section: {0}")]
pub struct UnknownPlatform(pub String);

/// Fixed platform-key → URL/phone mapping. Keys are fixed at section-creation
/// time (the optional `linktree` slot either exists or it does not); values
/// are mutable. Setters never create new keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub youtube: String,
    pub tiktok: String,
    pub whatsapp_latam: String,
    pub whatsapp_us: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linktree: Option<String>,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Instagram => Some(&self.instagram),
            SocialPlatform::Facebook => Some(&self.facebook),
            SocialPlatform::Youtube => Some(&self.youtube),
            SocialPlatform::Tiktok => Some(&self.tiktok),
            SocialPlatform::WhatsappLatam => Some(&self.whatsapp_latam),
            SocialPlatform::WhatsappUs => Some(&self.whatsapp_us),
            SocialPlatform::Linktree => self.linktree.as_deref(),
        }
    }

    /// Update an existing slot. Fails when the slot is not part of this
    /// section's links (only `linktree` can be absent).
    pub fn set(&mut self, platform: SocialPlatform, value: String) -> Result<(), UnknownPlatform> {
        match platform {
            SocialPlatform::Instagram => self.instagram = value,
            SocialPlatform::Facebook => self.facebook = value,
            SocialPlatform::Youtube => self.youtube = value,
            SocialPlatform::Tiktok => self.tiktok = value,
            SocialPlatform::WhatsappLatam => self.whatsapp_latam = value,
            SocialPlatform::WhatsappUs => self.whatsapp_us = value,
            SocialPlatform::Linktree => match &mut self.linktree {
                Some(slot) => *slot = value,
                None => return Err(UnknownPlatform(platform.key().to_string())),
            },
        }
        Ok(())
    }
}

/// Variant-shaped section payload. Each variant carries exactly the fields
/// meaningful for its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SectionContent {
    #[serde(rename = "header")]
    Header { logo_text: String },

    #[serde(rename = "hero")]
    Hero {
        title: String,
        subtitle: String,
        image: ImageAsset,
    },

    #[serde(rename = "why-us")]
    WhyUs {
        title: String,
        description: String,
        image: ImageAsset,
        features: Vec<Feature>,
    },

    #[serde(rename = "academic")]
    Academic {
        title: String,
        description: String,
        image: ImageAsset,
    },

    #[serde(rename = "jobs")]
    Jobs {
        title: String,
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button_text: Option<String>,
        items: Vec<ListItem>,
    },

    #[serde(rename = "institutional")]
    Institutional {
        title: String,
        description: String,
        image: ImageAsset,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ceo_image_url: Option<String>,
    },

    #[serde(rename = "footer")]
    Footer {
        title: String,
        subtitle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ceo_image_url: Option<String>,
        social_links: SocialLinks,
    },
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Header { .. } => SectionKind::Header,
            SectionContent::Hero { .. } => SectionKind::Hero,
            SectionContent::WhyUs { .. } => SectionKind::WhyUs,
            SectionContent::Academic { .. } => SectionKind::Academic,
            SectionContent::Jobs { .. } => SectionKind::Jobs,
            SectionContent::Institutional { .. } => SectionKind::Institutional,
            SectionContent::Footer { .. } => SectionKind::Footer,
        }
    }

    /// The main image, for the variants that carry one.
    pub fn image(&self) -> Option<&ImageAsset> {
        match self {
            SectionContent::Hero { image, .. }
            | SectionContent::WhyUs { image, .. }
            | SectionContent::Academic { image, .. }
            | SectionContent::Institutional { image, .. } => Some(image),
            _ => None,
        }
    }

    /// The secondary portrait slot. Independent lifecycle from the main image.
    pub fn ceo_image_url(&self) -> Option<&str> {
        match self {
            SectionContent::Institutional { ceo_image_url, .. }
            | SectionContent::Footer { ceo_image_url, .. } => ceo_image_url.as_deref(),
            _ => None,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Addressable string-valued style fields (alignment is typed and set
/// separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleField {
    BackgroundColor,
    TextColor,
    AccentColor,
    PaddingY,
    FontSizeTitle,
    FontSizeBody,
}

/// Uniform style record shared by all section kinds. Colors are any
/// CSS-compatible color strings; the sizing fields are CSS lengths
/// interpreted by the renderer only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStyles {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub padding_y: String,
    pub font_size_title: String,
    pub font_size_body: String,
    pub text_align: TextAlign,
}

impl SectionStyles {
    pub fn get(&self, field: StyleField) -> &str {
        match field {
            StyleField::BackgroundColor => &self.background_color,
            StyleField::TextColor => &self.text_color,
            StyleField::AccentColor => &self.accent_color,
            StyleField::PaddingY => &self.padding_y,
            StyleField::FontSizeTitle => &self.font_size_title,
            StyleField::FontSizeBody => &self.font_size_body,
        }
    }

    pub fn set(&mut self, field: StyleField, value: String) {
        match field {
            StyleField::BackgroundColor => self.background_color = value,
            StyleField::TextColor => self.text_color = value,
            StyleField::AccentColor => self.accent_color = value,
            StyleField::PaddingY => self.padding_y = value,
            StyleField::FontSizeTitle => self.font_size_title = value,
            StyleField::FontSizeBody => self.font_size_body = value,
        }
    }
}

/// One composable block of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Opaque stable identifier, unique within a document, never reused.
    pub id: String,

    /// Display label, free text, no uniqueness constraint.
    pub name: String,

    /// Variant payload; the tag doubles as the section kind.
    pub content: SectionContent,

    /// Uniform visual parameters.
    pub styles: SectionStyles,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.content.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> SectionStyles {
        SectionStyles {
            background_color: "#ffffff".to_string(),
            text_color: "#1f1f1f".to_string(),
            accent_color: "#0b3fa7".to_string(),
            padding_y: "4rem".to_string(),
            font_size_title: "2.25rem".to_string(),
            font_size_body: "1rem".to_string(),
            text_align: TextAlign::Center,
        }
    }

    #[test]
    fn test_section_serialization_round_trip() {
        let section = Section {
            id: "hero-1".to_string(),
            name: "Hero".to_string(),
            content: SectionContent::Hero {
                title: "Welcome".to_string(),
                subtitle: "Learn with us".to_string(),
                image: ImageAsset::new("data:image/png;base64,AAAA"),
            },
            styles: styles(),
        };

        let json = serde_json::to_string(&section).unwrap();
        let deserialized: Section = serde_json::from_str(&json).unwrap();

        assert_eq!(section, deserialized);
        assert!(json.contains("\"type\":\"hero\""));
    }

    #[test]
    fn test_brightness_defaults_to_100() {
        let json = r#"{ "url": "data:image/png;base64,AAAA" }"#;
        let image: ImageAsset = serde_json::from_str(json).unwrap();
        assert_eq!(image.brightness, 100);
    }

    #[test]
    fn test_kind_matches_content_variant() {
        let content = SectionContent::Header {
            logo_text: "Academy".to_string(),
        };
        assert_eq!(content.kind(), SectionKind::Header);
        assert_eq!(content.kind().as_str(), "header");
    }

    #[test]
    fn test_social_links_set_rejects_absent_linktree() {
        let mut links = SocialLinks {
            instagram: "https://instagram.com/a".to_string(),
            facebook: String::new(),
            youtube: String::new(),
            tiktok: String::new(),
            whatsapp_latam: "+54 11 5555 5555".to_string(),
            whatsapp_us: String::new(),
            linktree: None,
        };

        assert!(links
            .set(SocialPlatform::Instagram, "https://instagram.com/b".to_string())
            .is_ok());
        assert_eq!(links.get(SocialPlatform::Instagram), Some("https://instagram.com/b"));

        let err = links
            .set(SocialPlatform::Linktree, "https://linktr.ee/x".to_string())
            .unwrap_err();
        assert_eq!(err, UnknownPlatform("linktree".to_string()));
        assert_eq!(links.get(SocialPlatform::Linktree), None);
    }

    #[test]
    fn test_social_links_rejects_unknown_keys_at_parse() {
        let json = r#"{
            "instagram": "", "facebook": "", "youtube": "", "tiktok": "",
            "whatsappLatam": "", "whatsappUs": "", "myspace": "x"
        }"#;
        assert!(serde_json::from_str::<SocialLinks>(json).is_err());
    }

    #[test]
    fn test_style_field_set_and_get() {
        let mut s = styles();
        s.set(StyleField::BackgroundColor, "#000000".to_string());
        assert_eq!(s.get(StyleField::BackgroundColor), "#000000");
        assert_eq!(s.get(StyleField::TextColor), "#1f1f1f");
    }
}
