use derive_more::From;

/// Error types that can occur while rendering type names.
#[derive(Debug, From)]
pub enum Error {
    /// A descriptor couldn't be parsed or written.
    #[from]
    Core(protoreader_core::Error),

    /// A JSON descriptor file couldn't be deserialized.
    #[from]
    Json(serde_json::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Core(_) => write!(f, "Failed to process type descriptor"),
            Error::Json(_) => write!(f, "Invalid JSON descriptor"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Core(e) => Some(e),
            Error::Json(e) => Some(e),
        }
    }
}
