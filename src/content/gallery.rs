// SPDX-License-Identifier: MPL-2.0
//! Photo gallery content: scanning a directory for images and tracking the
//! load state of each slot.
//!
//! Scanning only collects paths; the actual pixels are fetched lazily, one
//! slot at a time, once the gallery section scrolls into view. A slot that
//! fails to decode degrades to a persistent placeholder.

use crate::error::Result;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// File extensions accepted as gallery photos.
const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Scans a directory for supported image files, sorted by file name.
///
/// A missing or unreadable directory is an error; an empty directory is a
/// valid, empty gallery.
pub fn scan(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by_key(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    Ok(images)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decoded image bytes with their pixel dimensions.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Reads and validates an image file off the UI thread.
///
/// The bytes are decoded once here to verify the file and learn its
/// dimensions; Iced decodes again from the raw bytes when rasterizing.
pub async fn load(path: PathBuf) -> Result<LoadedImage> {
    let bytes = tokio::fs::read(&path).await?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    Ok(LoadedImage {
        width: decoded.width(),
        height: decoded.height(),
        bytes,
    })
}

/// Load state of a single gallery slot.
#[derive(Debug, Clone)]
pub enum Slot {
    /// Not yet requested or still in flight; a placeholder renders.
    Pending,
    /// Decoded and ready to display.
    Loaded { handle: Handle, width: u32, height: u32 },
    /// The file could not be read or decoded; the placeholder stays.
    Failed,
}

/// The gallery: one slot per scanned image path.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    paths: Vec<PathBuf>,
    slots: Vec<Slot>,
}

impl Gallery {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let slots = vec![Slot::Pending; paths.len()];
        Self { paths, slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    pub fn record_result(&mut self, index: usize, result: &Result<LoadedImage>) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        *slot = match result {
            Ok(image) => Slot::Loaded {
                handle: Handle::from_bytes(image.bytes.clone()),
                width: image.width,
                height: image.height,
            },
            Err(_) => Slot::Failed,
        };
    }

    /// Pixel dimensions of a loaded slot, `None` while pending or failed.
    #[must_use]
    pub fn dimensions(&self, index: usize) -> Option<(u32, u32)> {
        match self.slots.get(index) {
            Some(Slot::Loaded { width, height, .. }) => Some((*width, *height)),
            _ => None,
        }
    }

    #[must_use]
    pub fn handle(&self, index: usize) -> Option<&Handle> {
        match self.slots.get(index) {
            Some(Slot::Loaded { handle, .. }) => Some(handle),
            _ => None,
        }
    }
}
