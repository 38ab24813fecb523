//! Domain types for image handling.

use std::sync::Arc;

/// Identifier naming a file inside the cache directory.
///
/// Generated per successful download and never derived from the URL, so a
/// re-download of the same URL always lands in a fresh file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(String);

impl FileId {
    /// Creates a new `FileId` from any string-like input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the id can be used as a single path component.
    ///
    /// Ids read back from a persisted index are not trusted to be well formed.
    #[must_use]
    pub fn is_plain_file_name(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && self.0 != ".."
            && !self.0.contains(['/', '\\', '\0'])
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FileId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FileId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A decoded bitmap.
///
/// Cheap to clone; the pixel data is shared.
#[derive(Debug, Clone)]
pub struct Image(Arc<image::DynamicImage>);

impl Image {
    /// Decodes raw bytes in any supported format.
    ///
    /// # Errors
    /// Returns error if the bytes are not a recognizable image.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        image::load_from_memory(bytes).map(|img| Self(Arc::new(img)))
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Raw pixel buffer in the decoded color layout.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the underlying decoded image.
    #[must_use]
    pub fn as_dynamic(&self) -> &image::DynamicImage {
        &self.0
    }
}

impl From<image::DynamicImage> for Image {
    fn from(img: image::DynamicImage) -> Self {
        Self(Arc::new(img))
    }
}

/// Where an image was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Read from the on-disk cache.
    DiskCache,
    /// Downloaded from network.
    Network,
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DiskCache => write!(f, "disk"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// Result of a successful fetch.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// URL the image was requested for.
    pub url: String,
    /// The decoded image.
    pub image: Image,
    /// Where the bytes came from.
    pub source: ImageSource,
}
