//! HTML fragment rendering for math nodes, cross-references, and citations.

mod citations;
mod math;
mod refs;

pub use self::math::{AlignedImage, ImageAligner};

use crate::config::RenderOptions;
use crate::document::LabelTables;
use crate::engine::BackendRegistry;

/// Renders individual typed nodes into HTML fragments.
///
/// The registry, options, and label tables are shared read-only state;
/// the renderer itself accumulates document-level diagnostics for
/// unresolved references.
pub struct FragmentRenderer<'a> {
    registry: &'a BackendRegistry,
    options: &'a RenderOptions,
    labels: &'a LabelTables,
    aligner: ImageAligner,
    diagnostics: Vec<String>,
}

impl<'a> FragmentRenderer<'a> {
    pub fn new(
        registry: &'a BackendRegistry,
        options: &'a RenderOptions,
        labels: &'a LabelTables,
    ) -> Self {
        Self {
            registry,
            options,
            labels,
            aligner: ImageAligner::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Renderer with a pre-computed pixels-per-ex baseline, skipping the
    /// probe render.
    pub fn with_baseline(
        registry: &'a BackendRegistry,
        options: &'a RenderOptions,
        labels: &'a LabelTables,
        pixels_per_ex: f64,
    ) -> Self {
        Self {
            aligner: ImageAligner::with_baseline(pixels_per_ex),
            ..Self::new(registry, options, labels)
        }
    }

    /// Document-level diagnostics accumulated so far.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Drain the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    fn diagnose(&mut self, message: String) {
        log::warn!("{}", message);
        self.diagnostics.push(message);
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
