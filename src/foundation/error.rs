/// Crate-wide result alias.
pub type AstraResult<T> = Result<T, AstraError>;

/// Error taxonomy for the rendering pipeline and its boundary.
///
/// `Color` and `Raster` cover externally triggerable failures (malformed
/// color strings, undecodable uploads); `Validation` covers out-of-range
/// parameters rejected at the boundary; `Render` covers internal pipeline
/// failures that indicate a programming error rather than bad input.
#[derive(thiserror::Error, Debug)]
pub enum AstraError {
    /// A color string could not be parsed.
    #[error("color parse error: {0}")]
    Color(String),

    /// An input raster could not be decoded or has inconsistent dimensions.
    #[error("invalid raster: {0}")]
    Raster(String),

    /// A configuration field is outside its declared range.
    #[error("validation error: {0}")]
    Validation(String),

    /// The rasterization or encoding stage failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AstraError {
    pub(crate) fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    pub(crate) fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            AstraError::color("x")
                .to_string()
                .contains("color parse error:")
        );
        assert!(AstraError::raster("x").to_string().contains("invalid raster:"));
        assert!(
            AstraError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(AstraError::render("x").to_string().contains("render error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = AstraError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
