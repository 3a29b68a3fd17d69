/// Artifact photo input
///
/// This module handles:
/// - The native file picker for hieroglyph photographs
/// - Reading the picked file and sniffing its MIME type

pub mod loader;

pub use loader::{load_image, pick_image_file, ImageError};
