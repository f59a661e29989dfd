//! The `none` engine: shows math without converting it.

use super::{MathEngine, PngRender};
use crate::ast::MathKind;

/// Engine that renders the TeX source itself, so content stays visible
/// even when no converting engine is configured. Never produces PNGs.
pub struct NullEngine;

impl NullEngine {
    /// The visible no-conversion rendition of a TeX source.
    pub fn visible_source(source: &str) -> String {
        format!(
            r#"<span class="math-source">{}</span>"#,
            escape_html(source.trim())
        )
    }
}

impl MathEngine for NullEngine {
    fn render_mathml(&self, _kind: MathKind, source: &str) -> Option<String> {
        Some(Self::visible_source(source))
    }

    fn render_png(&self, _kind: MathKind, _source: &str) -> Option<PngRender> {
        None
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
