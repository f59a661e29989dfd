//! Engine dispatch, raster image alignment, and math fragment assembly.

use once_cell::sync::OnceCell;

use super::{escape_html, FragmentRenderer};
use crate::ast::{MathContent, MathKind};
use crate::engine::{MathEngine, NullEngine, PngRender};
use crate::error::{ConfigError, Error, RenderError, Result};

/// Converts pixel metrics of raster math images into `ex` units.
///
/// The pixels-per-ex baseline comes from a one-character probe render
/// (`x` at inline size) and is computed at most once for the aligner's
/// lifetime; concurrent first uses are serialized by the cell so the
/// probe never runs twice.
#[derive(Debug, Default)]
pub struct ImageAligner {
    baseline: OnceCell<f64>,
}

/// An `<img>` descriptor with alignment styling computed.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedImage {
    pub src: String,
    pub style: String,
    pub alt: String,
}

impl AlignedImage {
    /// The `<img>` tag carrying the computed style.
    pub fn to_html(&self, class: &str) -> String {
        format!(
            r#"<img class="{}" src="{}" style="{}" alt="{}">"#,
            class,
            escape_html(&self.src),
            self.style,
            escape_html(&self.alt)
        )
    }
}

impl ImageAligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligner with a known pixels-per-ex value; no probe render occurs.
    pub fn with_baseline(pixels_per_ex: f64) -> Self {
        let baseline = OnceCell::new();
        let _ = baseline.set(pixels_per_ex);
        Self { baseline }
    }

    fn pixels_per_ex(&self, engine: &dyn MathEngine) -> Result<f64> {
        self.baseline
            .get_or_try_init(|| {
                let probe = engine
                    .render_png(MathKind::Inline, "x")
                    .ok_or(RenderError::BaselineProbe)?;
                if probe.height == 0 {
                    return Err(Error::from(RenderError::DegenerateBaseline));
                }
                Ok(f64::from(probe.height))
            })
            .copied()
    }

    /// Compute `ex`-relative sizing for a rendered image.
    ///
    /// `use_depth` is true for inline math, which must sit on the
    /// surrounding text baseline; block equations pass false.
    pub fn align(
        &self,
        engine: &dyn MathEngine,
        image: &PngRender,
        source: &str,
        use_depth: bool,
    ) -> Result<AlignedImage> {
        let baseline = self.pixels_per_ex(engine)?;
        let height_ex = f64::from(image.height) / baseline;
        let depth_ex = f64::from(image.depth) / baseline;
        let total_ex = height_ex + depth_ex;

        let mut style = String::new();
        if use_depth {
            style.push_str(&format!("vertical-align: -{}ex;", depth_ex));
        }
        style.push_str(&format!("height: {}ex;", total_ex));

        Ok(AlignedImage {
            src: image.src.clone(),
            style,
            alt: format!("${}$", source.trim()),
        })
    }
}

impl<'a> FragmentRenderer<'a> {
    fn engine(
        &self,
        name: &str,
        output: &'static str,
    ) -> Result<&'a (dyn MathEngine + Send + Sync)> {
        self.registry.get(name).ok_or_else(|| {
            ConfigError::UnknownEngine {
                engine: name.to_string(),
                output,
            }
            .into()
        })
    }

    /// MathML markup for a math source.
    ///
    /// A configured-but-missing engine is a configuration error; an engine
    /// that declines falls back to the null renderer's visible TeX so the
    /// content is never silently blank.
    pub fn render_mathml(&self, kind: MathKind, source: &str) -> Result<String> {
        let engine = self.engine(&self.options.math_engine, "MathML")?;
        Ok(engine
            .render_mathml(kind, source)
            .unwrap_or_else(|| NullEngine::visible_source(source)))
    }

    /// Raster rendering of a math source, or `None` when the configured
    /// engine declines.
    pub fn render_png(&self, kind: MathKind, source: &str) -> Result<Option<PngRender>> {
        let engine = self.engine(&self.options.png_engine, "PNG")?;
        Ok(engine.render_png(kind, source))
    }

    /// `<span class="math-inline">` fragment for an inline math node.
    ///
    /// MathML is preferred; the raster fallback is only rendered when
    /// MathML output is off, with depth-based baseline alignment.
    pub fn inline_math(&self, node: &MathContent) -> Result<String> {
        let mut span = String::from(r#"<span class="math-inline">"#);

        if self.options.output_mathml {
            let mathml = self.render_mathml(node.kind, &node.source)?;
            span.push_str(r#"<span class="math-mathml">"#);
            span.push_str(&mathml);
            span.push_str("</span>");
        } else if self.options.output_png {
            if let Some(png) = self.render_png(node.kind, &node.source)? {
                let engine = self.engine(&self.options.png_engine, "PNG")?;
                let img = self.aligner.align(engine, &png, &node.source, true)?;
                span.push_str(&img.to_html("math-png"));
            }
        }

        span.push_str("</span>");
        Ok(span)
    }

    /// `<div class="math-equation">` fragment for a display equation.
    ///
    /// Labelled equations get an `eq:<label>` anchor and a numbering span.
    /// MathML and raster output can coexist here.
    pub fn equation(&self, node: &MathContent) -> Result<String> {
        let mut div = match node.label {
            Some(ref eq) => format!(
                r#"<div class="math-equation" id="eq:{}"><span class="eq-number">({})</span>"#,
                escape_html(&eq.label),
                eq.number
            ),
            None => String::from(r#"<div class="math-equation">"#),
        };

        if self.options.output_mathml {
            let mathml = self.render_mathml(node.kind, &node.source)?;
            div.push_str(r#"<span class="math-mathml">"#);
            div.push_str(&mathml);
            div.push_str("</span>");
        }

        if self.options.output_png {
            if let Some(png) = self.render_png(node.kind, &node.source)? {
                let engine = self.engine(&self.options.png_engine, "PNG")?;
                let img = self.aligner.align(engine, &png, &node.source, false)?;
                div.push_str(&img.to_html("math-png"));
            }
        }

        div.push_str("</div>");
        Ok(div)
    }
}
