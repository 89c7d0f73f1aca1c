/// Convenience result type used across crewgen.
pub type CrewgenResult<T> = Result<T, CrewgenError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Most catalog and asset gaps never surface here: selection falls back to an
/// absent part and rendering skips missing sprites. Errors are reserved for
/// problems the caller can actually act on, such as a missing postcard
/// template or malformed metadata documents.
#[derive(thiserror::Error, Debug)]
pub enum CrewgenError {
    /// Invalid user-provided selection or catalog data.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Errors while matching detected features against sprite metadata.
    #[error("matching error: {0}")]
    Matching(String),

    /// Errors while compositing a portrait or postcard.
    #[error("render error: {0}")]
    Render(String),

    /// A postcard template file is required but could not be found.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CrewgenError {
    /// Build a [`CrewgenError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`CrewgenError::Matching`] value.
    pub fn matching(msg: impl Into<String>) -> Self {
        Self::Matching(msg.into())
    }

    /// Build a [`CrewgenError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CrewgenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            CrewgenError::catalog("x")
                .to_string()
                .contains("catalog error:")
        );
        assert!(
            CrewgenError::matching("x")
                .to_string()
                .contains("matching error:")
        );
        assert!(
            CrewgenError::render("x")
                .to_string()
                .contains("render error:")
        );
        assert!(
            CrewgenError::TemplateNotFound("t.png".to_string())
                .to_string()
                .contains("template not found:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = CrewgenError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
