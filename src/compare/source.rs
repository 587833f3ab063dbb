// SPDX-License-Identifier: MPL-2.0
//! Image sources and the asynchronous loader.
//!
//! A comparison side is either a location to fetch (an `http(s)` URL or a
//! local file path) or an image that is already decoded in memory. Loading
//! never blocks the UI thread: downloads are streamed with `reqwest`, and
//! file reads plus decoding run on the blocking pool.

use super::cache::SharedImageCache;
use crate::config::{MAX_DOWNLOAD_BYTES, MAX_REDIRECTS};
use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("CompareLens/", env!("CARGO_PKG_VERSION"));

/// A decoded image ready to be drawn.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Creates an image from raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Decodes encoded bytes (PNG, JPEG, WebP, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the format is unknown or the data is corrupt.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        Ok(Self::from_rgba(width, height, img.to_rgba8().into_vec()))
    }

    /// Natural size in logical pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn natural_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Decoded size in bytes (RGBA).
    #[must_use]
    pub fn byte_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Where one side of the comparison comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// An `http(s)` URL, a `file://` URL or a plain file path.
    Remote(String),
    /// An image already decoded in memory.
    Decoded(LoadedImage),
}

impl ImageSource {
    /// Source location, if this side has to be fetched.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            ImageSource::Remote(location) => Some(location),
            ImageSource::Decoded(_) => None,
        }
    }
}

impl From<LoadedImage> for ImageSource {
    fn from(image: LoadedImage) -> Self {
        ImageSource::Decoded(image)
    }
}

impl From<&str> for ImageSource {
    fn from(location: &str) -> Self {
        ImageSource::Remote(location.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(location: String) -> Self {
        ImageSource::Remote(location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Http(String),
    File(PathBuf),
}

fn classify(location: &str) -> Location {
    let lower = location.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Location::Http(location.to_string())
    } else if lower.starts_with("file://") {
        Location::File(PathBuf::from(&location["file://".len()..]))
    } else {
        Location::File(PathBuf::from(location))
    }
}

/// Resolves a source into a decoded image, consulting `cache` first.
///
/// # Errors
///
/// - [`Error::Network`] if a download fails, returns a non-success status or
///   exceeds the size limit
/// - [`Error::Io`] if a local file cannot be read
/// - [`Error::Decode`] if the bytes are not a supported image
pub async fn load(source: ImageSource, cache: Option<SharedImageCache>) -> Result<LoadedImage> {
    let location = match source {
        ImageSource::Decoded(image) => return Ok(image),
        ImageSource::Remote(location) => location,
    };

    if let Some(hit) = cache
        .as_ref()
        .and_then(|cache| cache.lock().ok()?.get(&location))
    {
        tracing::debug!(%location, "image cache hit");
        return Ok(hit);
    }

    let image = match classify(&location) {
        Location::Http(url) => {
            let bytes = fetch(&url).await?;
            decode_blocking(move || LoadedImage::decode(&bytes)).await?
        }
        Location::File(path) => {
            decode_blocking(move || LoadedImage::decode(&std::fs::read(path)?)).await?
        }
    };

    tracing::debug!(
        %location,
        width = image.width,
        height = image.height,
        "image loaded"
    );

    if let Some(mut cache) = cache.as_ref().and_then(|cache| cache.lock().ok()) {
        cache.insert(location, image.clone());
    }

    Ok(image)
}

async fn decode_blocking<F>(job: F) -> Result<LoadedImage>
where
    F: FnOnce() -> Result<LoadedImage> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Downloads `url`, following a bounded number of redirects.
async fn fetch(url: &str) -> Result<Vec<u8>> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    if let Some(length) = response.content_length() {
        if length > MAX_DOWNLOAD_BYTES {
            return Err(too_large(length));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        bytes.extend_from_slice(&chunk);
        if bytes.len() as u64 > MAX_DOWNLOAD_BYTES {
            return Err(too_large(bytes.len() as u64));
        }
    }

    Ok(bytes)
}

fn too_large(size: u64) -> Error {
    Error::Network(format!(
        "Response too large ({size} bytes, limit {MAX_DOWNLOAD_BYTES})"
    ))
}
