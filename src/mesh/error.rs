use std::io;

/// Decoder/converter error types
#[derive(Debug)]
pub enum MeshError {
    /// Recognized format variant this crate intentionally does not handle.
    /// Terminal for the current record.
    NotSupported(String),

    /// Structural violation, corrupted or unrecognized input. Position is
    /// the stream offset when the violation was found during decode; the
    /// converter has no stream and reports without one.
    MalformedFormat {
        position: Option<u64>,
        message: String,
    },

    /// IO error occurred
    Io(io::Error),

    /// Primitive read failed
    Binary(binrw::Error),
}

impl MeshError {
    pub fn malformed(message: impl Into<String>) -> Self {
        MeshError::MalformedFormat {
            position: None,
            message: message.into(),
        }
    }

    pub fn malformed_at(position: u64, message: impl Into<String>) -> Self {
        MeshError::MalformedFormat {
            position: Some(position),
            message: message.into(),
        }
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, MeshError::NotSupported(_))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, MeshError::MalformedFormat { .. })
    }
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshError::NotSupported(msg) => write!(f, "Not supported: {}", msg),
            MeshError::MalformedFormat { position, message } => match position {
                Some(pos) => write!(f, "Malformed record at position {}: {}", pos, message),
                None => write!(f, "Malformed record: {}", message),
            },
            MeshError::Io(e) => write!(f, "IO error: {}", e),
            MeshError::Binary(e) => write!(f, "Read error: {}", e),
        }
    }
}

impl std::error::Error for MeshError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshError::Io(e) => Some(e),
            MeshError::Binary(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MeshError {
    fn from(err: io::Error) -> Self {
        MeshError::Io(err)
    }
}

impl From<binrw::Error> for MeshError {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Io(e) => MeshError::Io(e),
            other => MeshError::Binary(other),
        }
    }
}

/// Result type for decode and convert operations
pub type Result<T> = std::result::Result<T, MeshError>;
