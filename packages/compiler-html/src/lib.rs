//! # Pagecraft HTML Compiler
//!
//! Compiles a Pagecraft document into one standalone HTML page: every image
//! is already inlined as a data URI in the document, so the output has no
//! external asset references and can be shipped as a single file.
//!
//! This is a snapshot of the document, not an editor state dump: selection
//! and viewport are session concerns and never appear here.

mod compiler;

#[cfg(test)]
mod tests;

pub use compiler::{compile_to_html, CompileError, CompileOptions};
