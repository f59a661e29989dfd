//! Math rendering engines.

mod none;

#[cfg(feature = "mathml")]
mod mathml;

pub use self::none::NullEngine;

#[cfg(feature = "mathml")]
pub use self::mathml::MathmlEngine;

use std::collections::HashMap;

use crate::ast::MathKind;

/// A rendered raster image: its location plus pixel metrics.
///
/// `depth` is the portion of the image extending below the text baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngRender {
    pub src: String,
    pub height: u32,
    pub depth: u32,
}

/// Capability interface implemented by every math engine.
///
/// Returning `None` means the engine has no opinion for this kind and
/// source; it is not an error, and the caller decides how to fall back.
pub trait MathEngine {
    /// Convert TeX source to a MathML fragment.
    fn render_mathml(&self, kind: MathKind, source: &str) -> Option<String>;

    /// Render TeX source to a raster image.
    fn render_png(&self, kind: MathKind, source: &str) -> Option<PngRender>;
}

/// Maps configured engine names to implementations.
///
/// Registration is open: hosts can add engines at startup without touching
/// this crate, as long as they implement [`MathEngine`].
pub struct BackendRegistry {
    engines: HashMap<String, Box<dyn MathEngine + Send + Sync>>,
}

impl BackendRegistry {
    /// An empty registry with no engines.
    pub fn new() -> Self {
        Self {
            engines: HashMap::new(),
        }
    }

    /// A registry pre-populated with the built-in engines.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("none", Box::new(NullEngine));

        #[cfg(feature = "mathml")]
        registry.register("latex2mathml", Box::new(MathmlEngine));

        registry
    }

    /// Register an engine under a name, replacing any previous engine
    /// with the same name.
    pub fn register(&mut self, name: impl Into<String>, engine: Box<dyn MathEngine + Send + Sync>) {
        self.engines.insert(name.into(), engine);
    }

    /// Look up an engine by its configured name.
    pub fn get(&self, name: &str) -> Option<&(dyn MathEngine + Send + Sync)> {
        self.engines.get(name).map(|e| e.as_ref())
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
