//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during key and signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid private key material
    InvalidKey(String),

    /// A public key point failed validation
    InvalidPoint(String),

    /// Curve not known to the registry
    UnknownCurve(String),

    /// DER, PEM or Base64 input could not be parsed
    Deserialization(String),

    /// Serialization failed
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(details) => write!(f, "Invalid key: {}", details),
            Error::InvalidPoint(details) => write!(f, "Invalid point: {}", details),
            Error::UnknownCurve(details) => write!(f, "Unknown curve: {}", details),
            Error::Deserialization(details) => write!(f, "Deserialization error: {}", details),
            Error::Serialization(details) => write!(f, "Serialization error: {}", details),
        }
    }
}

impl std::error::Error for Error {}

impl From<algorithms::Error> for Error {
    fn from(err: algorithms::Error) -> Self {
        match &err {
            algorithms::Error::Parameter { name, .. } if name.as_ref() == "curve" => {
                Error::UnknownCurve(err.to_string())
            }
            _ => Error::Deserialization(err.to_string()),
        }
    }
}

/// Result type for key and signature operations
pub type Result<T> = core::result::Result<T, Error>;
