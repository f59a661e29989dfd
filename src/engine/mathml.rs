//! MathML engine backed by the `latex2mathml` crate.

use super::{MathEngine, PngRender};
use crate::ast::MathKind;

/// Engine converting TeX to MathML for native browser rendering.
///
/// Declines input that `latex2mathml` cannot parse rather than failing,
/// so callers fall back to the null renderer.
pub struct MathmlEngine;

impl MathEngine for MathmlEngine {
    fn render_mathml(&self, kind: MathKind, source: &str) -> Option<String> {
        let style = match kind {
            MathKind::Inline => latex2mathml::DisplayStyle::Inline,
            MathKind::Equation => latex2mathml::DisplayStyle::Block,
        };
        latex2mathml::latex_to_mathml(source, style).ok()
    }

    fn render_png(&self, _kind: MathKind, _source: &str) -> Option<PngRender> {
        None
    }
}
