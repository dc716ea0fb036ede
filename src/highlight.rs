//! Seam for the external syntax highlighter.
//!
//! The surrounding page highlights snippets with hljs before display; the
//! core only needs "a pure function from code and language to markup". The
//! trait keeps that dependency at arm's length so the engine stays testable
//! without any HTML machinery.

use crate::types::SnippetLanguage;

/// A pure `code -> markup` transform. Implementations must not mutate state
/// or perform I/O; the session may call this on every keystroke.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: SnippetLanguage) -> String;
}

/// Pass-through highlighter: returns the code unchanged. Useful in tests and
/// for consumers that want raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: SnippetLanguage) -> String {
        code.to_string()
    }
}
