//! In-memory image attachment handling.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::EditorError;

/// Size ceiling for a selected image file (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A selected reference image, held in memory until generation time.
///
/// Encoding to a data URI is deferred to [`ImageAttachment::to_data_uri`]
/// so a selected-then-replaced file is never encoded at all.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    filename: String,
    bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Accept a file, rejecting anything over the size ceiling.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, EditorError> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(EditorError::ImageTooLarge {
                size: bytes.len(),
                limit: MAX_IMAGE_BYTES,
            });
        }

        Ok(Self {
            filename: filename.into(),
            bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the file as a base64 data URI.
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }

    /// Guess the MIME type from the file extension.
    fn mime_type(&self) -> &'static str {
        let extension = self
            .filename
            .rsplit('.')
            .next()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            _ => "application/octet-stream",
        }
    }
}
