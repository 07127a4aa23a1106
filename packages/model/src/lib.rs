//! # Pagecraft Model
//!
//! The document model for Pagecraft: an ordered sequence of typed page
//! sections, each carrying variant-shaped content and a uniform style record.
//!
//! ## Core Principles
//!
//! 1. **Data, not behavior**: this crate holds the shapes and their
//!    invariants; all editing goes through `pagecraft-editor`
//! 2. **Copy-on-write**: sections are plain values, every update produces a
//!    wholly new value and discards the old one
//! 3. **Variant content is a sum type**: which fields a section carries is
//!    enforced by the compiler, not by optional-field convention
//! 4. **Seed is data**: the initial document is deserialized from JSON, not
//!    compiled in

pub mod document;
pub mod id_generator;
pub mod section;
pub mod seed;
pub mod view;

pub use document::{Document, SeedError};
pub use id_generator::IdGenerator;
pub use section::{
    Feature, ImageAsset, ListItem, Section, SectionContent, SectionKind, SectionStyles,
    SocialLinks, SocialPlatform, StyleField, TextAlign, UnknownPlatform,
};
pub use view::ViewMode;
