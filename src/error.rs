// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Icon(IconError),
}

/// Failures of the icon render-and-invert pipeline.
///
/// Every variant counts as a load failure: the caller gets the error,
/// nothing is cached, and a later request starts a fresh load.
/// The type is `Clone` so one result can be handed to every caller
/// waiting on the same in-flight load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// The request could not be sent or the body could not be read.
    Fetch(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The response body exceeded the configured size limit.
    TooLarge { limit: u64 },

    /// The payload is not a parseable SVG document.
    Decode(String),

    /// The offscreen surface could not be allocated (zero-sized).
    Surface { width: u32, height: u32 },

    /// Encoding a raster to PNG failed.
    Encode(String),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Fetch(msg) => write!(f, "Fetch failed: {msg}"),
            IconError::Status(code) => write!(f, "HTTP status: {code}"),
            IconError::TooLarge { limit } => {
                write!(f, "Response larger than {limit} bytes")
            }
            IconError::Decode(msg) => write!(f, "Invalid SVG: {msg}"),
            IconError::Surface { width, height } => {
                write!(f, "Cannot allocate a {width}x{height} surface")
            }
            IconError::Encode(msg) => write!(f, "PNG encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for IconError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Icon(e) => write!(f, "Icon Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<IconError> for Error {
    fn from(err: IconError) -> Self {
        match err {
            IconError::Decode(msg) => Error::Svg(msg),
            other => Error::Icon(other),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result type for icon pipeline operations.
pub type IconResult<T> = std::result::Result<T, IconError>;
