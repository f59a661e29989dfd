//! Rendering options resolved by the host application.
//!
//! The surrounding pipeline owns configuration loading; this crate only
//! consumes the resolved values.

use serde::Deserialize;

/// Options controlling math output, read-only during rendering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Engine used for MathML output.
    pub math_engine: String,
    /// Engine used for raster fallback output.
    pub png_engine: String,
    /// Whether MathML rendering is attempted at all.
    pub output_mathml: bool,
    /// Whether PNG rendering is attempted at all.
    pub output_png: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            math_engine: "none".to_string(),
            png_engine: "none".to_string(),
            output_mathml: true,
            output_png: false,
        }
    }
}
