//! # mathfrag
//!
//! HTML fragment rendering for math, equation cross-references, and
//! citations in structured documents.
//!
//! The crate sits between a document's typed nodes (parsed elsewhere) and
//! its HTML output. It dispatches math content to a pluggable rendering
//! engine, converts raster fallback metrics into `ex`-relative styling,
//! resolves references against document label tables, and formats
//! citation key lists into linked text. It does not parse source text,
//! walk the document tree, or typeset math itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathfrag::{BackendRegistry, Citation, FragmentRenderer, LabelTables, MathContent, RenderOptions};
//!
//! let registry = BackendRegistry::with_builtins();
//! let options = RenderOptions::default();
//!
//! let mut labels = LabelTables::new();
//! labels.add_equation("euler", 1).unwrap();
//!
//! let mut renderer = FragmentRenderer::new(&registry, &options, &labels);
//!
//! let html = renderer.inline_math(&MathContent::inline("e^{i\\pi} = -1")).unwrap();
//! assert!(html.contains("math-inline"));
//!
//! let link = renderer.eqref("euler");
//! assert!(link.contains("(1)"));
//!
//! let cite = renderer.citation(&Citation::new(["MR1234567"]));
//! assert!(cite.contains("mathscinet"));
//! ```
//!
//! ## Engines
//!
//! Math conversion is delegated to engines implementing [`MathEngine`],
//! looked up by the configured name in a [`BackendRegistry`]. Built-ins:
//!
//! - `none`: shows the TeX source verbatim, never produces PNGs
//! - `latex2mathml`: TeX to MathML conversion (requires the `mathml`
//!   feature)
//!
//! Hosts register additional engines at startup with
//! [`BackendRegistry::register`]. An engine may decline an input by
//! returning `None`; that is not an error. A configured engine name with
//! no registered implementation is a [`ConfigError`] and fails the
//! affected node loudly.
//!
//! ## Diagnostics
//!
//! Unresolved equation and block references never fail a render: they
//! emit placeholder text, log a warning through the `log` facade, and
//! record a document-level diagnostic retrievable from
//! [`FragmentRenderer::diagnostics`].
//!
//! ## Features
//!
//! - `mathml`: enable the `latex2mathml` conversion engine

pub mod ast;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod render;

// Convenience re-exports
pub use ast::{Citation, EqLabel, MathContent, MathKind};
pub use config::RenderOptions;
pub use document::{Equation, LabelTables};
pub use engine::{BackendRegistry, MathEngine, NullEngine, PngRender};
pub use error::{ConfigError, Error, RenderError, ResolutionError, Result};
pub use render::{AlignedImage, FragmentRenderer, ImageAligner};

#[cfg(test)]
mod tests {
    use super::*;

    struct RasterOnly;

    impl MathEngine for RasterOnly {
        fn render_mathml(&self, _kind: MathKind, _source: &str) -> Option<String> {
            None
        }

        fn render_png(&self, _kind: MathKind, source: &str) -> Option<PngRender> {
            let (height, depth) = if source == "x" { (10, 0) } else { (20, 5) };
            Some(PngRender {
                src: format!("img/{}.png", source.len()),
                height,
                depth,
            })
        }
    }

    fn raster_setup() -> (BackendRegistry, RenderOptions) {
        let mut registry = BackendRegistry::with_builtins();
        registry.register("dvipng", Box::new(RasterOnly));

        let options = RenderOptions {
            math_engine: "none".to_string(),
            png_engine: "dvipng".to_string(),
            output_mathml: false,
            output_png: true,
        };
        (registry, options)
    }

    #[test]
    fn test_inline_math_with_null_engine() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let html = renderer.inline_math(&MathContent::inline("a < b")).unwrap();
        assert!(html.starts_with(r#"<span class="math-inline">"#));
        assert!(html.contains("math-mathml"));
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn test_inline_math_raster_fallback_is_baseline_aligned() {
        let (registry, options) = raster_setup();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let html = renderer.inline_math(&MathContent::inline(" a+b ")).unwrap();
        assert!(html.contains(r#"class="math-png""#));
        assert!(html.contains("vertical-align: -0.5ex;height: 2.5ex;"));
        assert!(html.contains(r#"alt="$a+b$""#));
    }

    #[test]
    fn test_labelled_equation_fragment() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let node = MathContent::labelled_equation("E = mc^2", "mass", 2);
        let html = renderer.equation(&node).unwrap();
        assert!(html.starts_with(r#"<div class="math-equation" id="eq:mass">"#));
        assert!(html.contains(r#"<span class="eq-number">(2)</span>"#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_unlabelled_equation_has_no_anchor_or_number() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let html = renderer.equation(&MathContent::equation("x^2")).unwrap();
        assert!(!html.contains("id="));
        assert!(!html.contains("eq-number"));
    }

    #[test]
    fn test_block_equation_image_has_no_vertical_align() {
        let (registry, options) = raster_setup();
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::with_baseline(&registry, &options, &labels, 10.0);

        let html = renderer.equation(&MathContent::equation("a+b")).unwrap();
        assert!(html.contains("height: 2.5ex;"));
        assert!(!html.contains("vertical-align"));
    }

    #[test]
    fn test_missing_engine_is_a_config_error() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions {
            math_engine: "ghost".to_string(),
            ..RenderOptions::default()
        };
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        let err = renderer
            .inline_math(&MathContent::inline("x"))
            .unwrap_err();
        match err {
            Error::Config(ConfigError::UnknownEngine { engine, output }) => {
                assert_eq!(engine, "ghost");
                assert_eq!(output, "MathML");
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_engine_fails_every_call() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions {
            png_engine: "ghost".to_string(),
            output_png: true,
            ..RenderOptions::default()
        };
        let labels = LabelTables::new();
        let renderer = FragmentRenderer::new(&registry, &options, &labels);

        assert!(renderer.render_png(MathKind::Inline, "x").is_err());
        assert!(renderer.render_png(MathKind::Inline, "x").is_err());
    }

    #[test]
    fn test_sibling_nodes_survive_unresolved_references() {
        let registry = BackendRegistry::with_builtins();
        let options = RenderOptions::default();
        let mut labels = LabelTables::new();
        labels.add_equation("e1", 3).unwrap();
        let mut renderer = FragmentRenderer::new(&registry, &options, &labels);

        let broken = renderer.eqref("nope");
        let fine = renderer.eqref("e1");
        assert_eq!(broken, "(eq:nope)");
        assert!(fine.contains("(3)"));
        assert_eq!(renderer.take_diagnostics().len(), 1);
        assert!(renderer.diagnostics().is_empty());
    }
}
