/// The Error type for the protoreader-core crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A wildcard descriptor did not have exactly one upper bound.
    MalformedWildcard {
        /// The number of upper bounds the wildcard carried.
        upper_bounds: usize,
    },
    /// The output sink refused a write.
    Fmt(core::fmt::Error),
    /// An error occurred while parsing a type expression.
    #[cfg(feature = "parse")]
    Parse(String),
}

/// The Result type for the protoreader-core crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Fmt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<core::fmt::Error> for Error {
    fn from(e: core::fmt::Error) -> Self {
        Error::Fmt(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MalformedWildcard { upper_bounds } => write!(
                f,
                "Wildcard must have exactly one upper bound, found {upper_bounds}"
            ),
            Error::Fmt(e) => write!(f, "Failed to write to output: {e}"),
            #[cfg(feature = "parse")]
            Error::Parse(e) => write!(f, "Type parse error: {e}"),
        }
    }
}
