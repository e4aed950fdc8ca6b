//! File I/O for card images

use crate::types::{Result, SourceImage};
use std::path::Path;

/// Read one image file; its label is the file name without extension.
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SourceImage::new(&name, bytes))
}

/// Read image files in the given order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let image = load_image(path).await?;
        log::debug!("Loaded {} ({} bytes)", image.label, image.bytes.len());
        images.push(image);
    }
    Ok(images)
}
