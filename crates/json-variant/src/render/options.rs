//! Layout knobs for the renderer.

use std::borrow::Cow;

/// Indentation and line-break text used by [`render_with`](super::render_with).
///
/// The default is the canonical layout: one tab per nesting level and `\n`
/// between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text written once per nesting level at the start of each line.
    pub indent: Cow<'static, str>,
    /// Line break written after `[`/`{`, after each separator, and before
    /// the closing bracket.
    pub newline: Cow<'static, str>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: Cow::Borrowed("\t"),
            newline: Cow::Borrowed("\n"),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_newline(mut self, newline: impl Into<Cow<'static, str>>) -> Self {
        self.newline = newline.into();
        self
    }
}
