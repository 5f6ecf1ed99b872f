use std::fmt;

use facet_engine::paint::HexError;

/// Persisted face-stack or picker-selection text could not be decoded.
///
/// Never treated as "empty": corrupt state must surface to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    pub message: String,
}

impl DecodeError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture reference decode error: {}", self.message)
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<HexError> for DecodeError {
    fn from(e: HexError) -> Self {
        Self::new(e.to_string())
    }
}

/// A single layer could not be drawn. The rest of the face still is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    MissingTexture { texture_id: String },
    MissingFrame { texture_id: String, frame_id: String },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::MissingTexture { texture_id } => {
                write!(f, "texture {texture_id:?} is not in the catalog")
            }
            LayerError::MissingFrame { texture_id, frame_id } => {
                write!(f, "texture {texture_id:?} has no frame {frame_id:?}")
            }
        }
    }
}

impl std::error::Error for LayerError {}
