//! Artifact photo loader
//!
//! Reads a user-picked file into an `ImagePayload`. The MIME type comes
//! from the file's magic bytes, with the extension as a fallback. The
//! bytes themselves are forwarded to the model untouched.

use image::ImageFormat;
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::state::data::ImagePayload;

/// Advertised upload limit; larger files are accepted with a warning
pub const ADVERTISED_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Extensions offered by the file picker
const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("could not read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("{0} is not a recognised image")]
    Unsupported(String),
}

impl ImageError {
    /// Text shown in the error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            ImageError::Read { .. } => "Impossible de lire ce fichier.",
            ImageError::Unsupported(_) => "Format d'image non reconnu. Utilisez JPG ou PNG.",
        }
    }
}

/// Show the native picker and return the chosen file, if any
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Scanner un Artefact")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
}

/// Read `path` into an image payload
///
/// # Returns
/// * `Ok(payload)` - file name, sniffed MIME type and raw bytes
/// * `Err(ImageError)` - unreadable file or not an image
pub async fn load_image(path: PathBuf) -> Result<ImagePayload, ImageError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| ImageError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let format = sniff_format(&path, &bytes)
        .ok_or_else(|| ImageError::Unsupported(filename.clone()))?;

    if bytes.len() > ADVERTISED_MAX_BYTES {
        tracing::warn!(
            "⚠️  {} is {:.1}MB, above the advertised 5MB limit",
            filename,
            bytes.len() as f64 / 1024.0 / 1024.0
        );
    }

    tracing::info!("🖼️  Loaded {} ({} bytes, {})", filename, bytes.len(), format.to_mime_type());

    Ok(ImagePayload {
        filename,
        mime_type: format.to_mime_type().to_string(),
        bytes,
    })
}

/// Magic bytes first, then the extension
fn sniff_format(path: &Path, bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_path(path).ok())
}
