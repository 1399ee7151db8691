use thiserror::Error;

/// Errors raised by the layout engine.
///
/// All variants abort the render in progress — no partial output is valid.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Degenerate page geometry (non-positive dimensions, negative margins,
    /// or margins that eliminate the content box). Caught at construction.
    #[error("invalid page geometry: {0}")]
    Geometry(String),

    /// The canvas backend failed to encode the document byte stream.
    #[error("document encoding failed: {0}")]
    Encoding(String),
}

impl From<lopdf::Error> for LayoutError {
    fn from(err: lopdf::Error) -> Self {
        LayoutError::Encoding(err.to_string())
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        LayoutError::Encoding(err.to_string())
    }
}
