//! Stock seed document.
//!
//! The running document is always injected (deserialized from a seed file);
//! this module only provides the starting page that `pagecraft init` writes
//! out, so nothing in the core depends on any particular content.

use crate::document::Document;
use crate::id_generator::IdGenerator;
use crate::section::{
    Feature, ImageAsset, ListItem, Section, SectionContent, SectionStyles, SocialLinks, TextAlign,
};

const BRAND_BLUE: &str = "#0B3FA7";
const BRAND_RED: &str = "#D60000";
const BRAND_DARK: &str = "#1F1F1F";

// 1x1 transparent PNG, stands in until the user uploads real images.
const PLACEHOLDER_IMAGE: &str = "data:image/png;base64,\
iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn styles(
    background_color: &str,
    text_color: &str,
    accent_color: &str,
    padding_y: &str,
    text_align: TextAlign,
) -> SectionStyles {
    SectionStyles {
        background_color: background_color.to_string(),
        text_color: text_color.to_string(),
        accent_color: accent_color.to_string(),
        padding_y: padding_y.to_string(),
        font_size_title: "2.5rem".to_string(),
        font_size_body: "1.125rem".to_string(),
        text_align,
    }
}

/// Build the stock seven-section landing page.
pub fn default_document() -> Document {
    let mut ids = IdGenerator::new("landing");

    let sections = vec![
        Section {
            id: ids.new_id(),
            name: "Header".to_string(),
            content: SectionContent::Header {
                logo_text: "English Quick".to_string(),
            },
            styles: styles("#ffffff", BRAND_DARK, BRAND_BLUE, "1.5rem", TextAlign::Left),
        },
        Section {
            id: ids.new_id(),
            name: "Hero".to_string(),
            content: SectionContent::Hero {
                title: "Learn English the Quick Way".to_string(),
                subtitle: "Live online classes with native teachers, for work, study and life abroad.".to_string(),
                image: ImageAsset::new(PLACEHOLDER_IMAGE),
            },
            styles: styles(BRAND_DARK, "#ffffff", BRAND_RED, "6rem", TextAlign::Center),
        },
        Section {
            id: ids.new_id(),
            name: "Why Us".to_string(),
            content: SectionContent::WhyUs {
                title: "Why Choose Us".to_string(),
                description: "A method built around real conversation, not grammar drills.".to_string(),
                image: ImageAsset::new(PLACEHOLDER_IMAGE),
                features: vec![
                    Feature {
                        title: "Native Teachers".to_string(),
                        desc: "Every class is taught by a certified native speaker.".to_string(),
                    },
                    Feature {
                        title: "Flexible Schedule".to_string(),
                        desc: "Morning, evening and weekend slots across time zones.".to_string(),
                    },
                    Feature {
                        title: "Small Groups".to_string(),
                        desc: "Never more than six students per conversation group.".to_string(),
                    },
                ],
            },
            styles: styles("#ffffff", BRAND_DARK, BRAND_BLUE, "4rem", TextAlign::Left),
        },
        Section {
            id: ids.new_id(),
            name: "Academic Program".to_string(),
            content: SectionContent::Academic {
                title: "Academic Program".to_string(),
                description: "From beginner to advanced, aligned with the CEFR levels A1 through C1.".to_string(),
                image: ImageAsset::new(PLACEHOLDER_IMAGE),
            },
            styles: styles("#f3f4f6", BRAND_DARK, BRAND_BLUE, "4rem", TextAlign::Left),
        },
        Section {
            id: ids.new_id(),
            name: "Job Opportunities".to_string(),
            content: SectionContent::Jobs {
                title: "Where Our Students Work".to_string(),
                description: "English opens doors. These are some of the roles our graduates landed.".to_string(),
                button_text: None,
                items: vec![
                    ListItem::new("Customer support for US companies"),
                    ListItem::new("Remote software teams"),
                    ListItem::new("International hospitality"),
                ],
            },
            styles: styles(BRAND_BLUE, "#ffffff", BRAND_RED, "4rem", TextAlign::Center),
        },
        Section {
            id: ids.new_id(),
            name: "Institutional".to_string(),
            content: SectionContent::Institutional {
                title: "Our Academy".to_string(),
                description: "Founded in 2015, we have taught over ten thousand students across Latin America.".to_string(),
                image: ImageAsset::new(PLACEHOLDER_IMAGE),
                ceo_image_url: None,
            },
            styles: styles("#ffffff", BRAND_DARK, BRAND_BLUE, "4rem", TextAlign::Left),
        },
        Section {
            id: ids.new_id(),
            name: "Footer".to_string(),
            content: SectionContent::Footer {
                title: "English Quick Academy".to_string(),
                subtitle: "Start today. Your first class is free.".to_string(),
                ceo_image_url: None,
                social_links: SocialLinks {
                    instagram: "https://instagram.com/englishquick".to_string(),
                    facebook: "https://facebook.com/englishquick".to_string(),
                    youtube: "https://youtube.com/@englishquick".to_string(),
                    tiktok: "https://tiktok.com/@englishquick".to_string(),
                    whatsapp_latam: "+54 11 5555 0101".to_string(),
                    whatsapp_us: "+1 305 555 0101".to_string(),
                    linktree: Some("https://linktr.ee/englishquick".to_string()),
                },
            },
            styles: styles(BRAND_DARK, "#ffffff", BRAND_RED, "4rem", TextAlign::Center),
        },
    ];

    Document::new(sections)
}
