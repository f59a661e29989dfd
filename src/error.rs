//! Error types for the mathfrag library.

use thiserror::Error;

/// Result type alias for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Setup defects discovered while dispatching to a rendering engine.
///
/// These abort the render of the node that hit them and will recur for
/// every node using the same engine, so they surface immediately instead
/// of degrading output silently.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no engine named `{engine}` is registered for {output} output")]
    UnknownEngine {
        engine: String,
        output: &'static str,
    },
}

/// Errors that occur while building document label tables.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Duplicate equation label: {0}")]
    DuplicateLabel(String),
}

/// Errors that occur during fragment rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("baseline probe render produced no image; cannot compute pixels per ex")]
    BaselineProbe,

    #[error("baseline probe render returned a zero-height image")]
    DegenerateBaseline,
}
