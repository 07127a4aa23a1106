use crate::{compile_to_html, CompileOptions};
use pagecraft_model::{
    seed, Document, ImageAsset, Section, SectionContent, SectionStyles, TextAlign,
};

fn styles() -> SectionStyles {
    SectionStyles {
        background_color: "#0B3FA7".to_string(),
        text_color: "#ffffff".to_string(),
        accent_color: "#D60000".to_string(),
        padding_y: "4rem".to_string(),
        font_size_title: "2.5rem".to_string(),
        font_size_body: "1.125rem".to_string(),
        text_align: TextAlign::Center,
    }
}

fn hero(id: &str, title: &str) -> Section {
    Section {
        id: id.to_string(),
        name: "Hero".to_string(),
        content: SectionContent::Hero {
            title: title.to_string(),
            subtitle: "Subtitle".to_string(),
            image: ImageAsset::new("data:image/png;base64,AAAA"),
        },
        styles: styles(),
    }
}

#[test]
fn test_compile_default_seed() {
    let document = seed::default_document();
    let html = compile_to_html(&document, CompileOptions::default()).expect("Failed to compile");

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Landing Page</title>"));
    // One section element per document section, in order
    for section in &document.sections {
        assert!(html.contains(&format!("<section id=\"{}\"", section.id)));
    }
}

#[test]
fn test_sections_emitted_in_document_order() {
    let document = Document::new(vec![hero("first", "One"), hero("second", "Two")]);
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();

    let first = html.find("id=\"first\"").unwrap();
    let second = html.find("id=\"second\"").unwrap();
    assert!(first < second);
}

#[test]
fn test_user_text_is_escaped() {
    let document = Document::new(vec![hero("h", "<script>alert(1)</script> & \"more\"")]);
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();

    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; &quot;more&quot;"));
}

#[test]
fn test_brightness_filter_emission() {
    let mut document = Document::new(vec![hero("h", "T")]);
    if let SectionContent::Hero { image, .. } = &mut document.sections[0].content {
        image.brightness = 60;
    }
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();
    assert!(html.contains("filter: brightness(60%)"));

    // 100 is a no-op and elided
    let document = Document::new(vec![hero("h", "T")]);
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();
    assert!(!html.contains("brightness(100%)"));
}

#[test]
fn test_inline_styles_follow_section_styles() {
    let document = Document::new(vec![hero("h", "T")]);
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();

    assert!(html.contains("background-color: #0B3FA7"));
    assert!(html.contains("text-align: center"));
    assert!(html.contains("padding: 4rem 0"));
    assert!(html.contains("font-size: 2.5rem"));
}

#[test]
fn test_whatsapp_links_keep_digits_only() {
    let document = seed::default_document();
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();

    // Seed footer carries "+54 11 5555 0101" and "+1 305 555 0101"
    assert!(html.contains("https://wa.me/541155550101"));
    assert!(html.contains("https://wa.me/13055550101"));
    assert!(!html.contains("wa.me/+"));
}

#[test]
fn test_empty_social_slots_are_skipped() {
    let mut document = seed::default_document();
    for section in &mut document.sections {
        if let SectionContent::Footer { social_links, .. } = &mut section.content {
            social_links.facebook = String::new();
        }
    }
    let html = compile_to_html(&document, CompileOptions::default()).unwrap();
    assert!(!html.contains(">Facebook</a>"));
    assert!(html.contains(">Instagram</a>"));
}

#[test]
fn test_duplicate_ids_rejected() {
    let document = Document::new(vec![hero("dup", "A"), hero("dup", "B")]);
    assert!(compile_to_html(&document, CompileOptions::default()).is_err());
}

#[test]
fn test_custom_title_and_compact_output() {
    let document = Document::new(vec![hero("h", "T")]);
    let options = CompileOptions {
        title: "My Academy".to_string(),
        pretty: false,
        ..Default::default()
    };
    let html = compile_to_html(&document, options).unwrap();

    assert!(html.contains("<title>My Academy</title>"));
    assert!(!html.contains('\n'));
}
