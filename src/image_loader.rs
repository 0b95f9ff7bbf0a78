// ABOUTME: Decodes JPEG and PNG files into RGB images for scanning
// ABOUTME: Maps decoder and filesystem failures onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use crate::errors::{AppError, AppResult};
use image::{ImageError, ImageReader, RgbImage};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Image formats accepted by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    /// JPEG (`.jpg`, `.jpeg`)
    Jpeg,
    /// PNG (`.png`)
    Png,
}

impl SupportedFormat {
    /// Format implied by a file extension, case-insensitive
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Format implied by a path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

fn decode_error(error: ImageError, resource: &str) -> AppError {
    match error {
        ImageError::Unsupported(_) => {
            AppError::unsupported_format(error.to_string()).with_resource(resource)
        }
        ImageError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => {
            AppError::not_found(resource)
        }
        ImageError::IoError(_) => AppError::storage(error.to_string())
            .with_resource(resource)
            .with_source(error),
        _ => AppError::image_decode(error.to_string())
            .with_resource(resource)
            .with_source(error),
    }
}

/// Decode the image at `path` into 8-bit RGB
///
/// The format is sniffed from the file contents, not the extension.
///
/// # Errors
///
/// - `ResourceNotFound` when the file does not exist
/// - `StorageError` when it cannot be read
/// - `UnsupportedFormat` when the format is not JPEG or PNG
/// - `ImageDecode` when the contents are corrupt
pub fn load_image(path: &Path) -> AppResult<RgbImage> {
    let resource = path.display().to_string();
    let reader = ImageReader::open(path)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::not_found(resource.as_str())
            } else {
                AppError::storage(e.to_string())
                    .with_resource(resource.as_str())
                    .with_source(e)
            }
        })?
        .with_guessed_format()
        .map_err(|e| {
            AppError::storage(e.to_string())
                .with_resource(resource.as_str())
                .with_source(e)
        })?;

    let image = reader
        .decode()
        .map_err(|e| decode_error(e, &resource))?
        .to_rgb8();
    debug!(
        path = %resource,
        width = image.width(),
        height = image.height(),
        "image decoded"
    );
    Ok(image)
}

/// Decode an in-memory JPEG or PNG into 8-bit RGB
///
/// # Errors
///
/// `UnsupportedFormat` or `ImageDecode` as for [`load_image`].
pub fn load_image_from_bytes(bytes: &[u8]) -> AppResult<RgbImage> {
    image::load_from_memory(bytes)
        .map(|decoded| decoded.to_rgb8())
        .map_err(|e| decode_error(e, "<memory>"))
}

/// Scannable files directly inside `dir`, sorted by path
///
/// # Errors
///
/// `StorageError` when the directory cannot be listed.
pub fn list_images(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let entries = dir.read_dir().map_err(|e| {
        AppError::storage(format!("cannot list {}: {e}", dir.display()))
            .with_resource(dir.display().to_string())
            .with_source(e)
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && SupportedFormat::from_path(path).is_some())
        .collect();
    paths.sort();
    Ok(paths)
}
