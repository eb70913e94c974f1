use image::io::Reader as ImageReader;
use image::DynamicImage;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color_key::ColorKey;
use crate::error::Result;

/// Decoded pixels of one image together with the file they came from.
///
/// The path is kept so the image can be written back after it is changed.
#[derive(Debug, Clone)]
pub struct ImageHandle {
    path: PathBuf,
    image: DynamicImage,
}

impl ImageHandle {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Decode the file at `path` with the decoder's size limits lifted.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ImageReader::open(path)?.with_guessed_format()?;
        // Generated images are 10000x10000, well past the default allocation limit
        reader.no_limits();
        let image = reader.decode()?;
        debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
        Ok(Self::new(path, image))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut DynamicImage {
        &mut self.image
    }

    pub fn color_key(&self) -> Result<ColorKey> {
        ColorKey::extract(&self.image, &self.path)
    }

    /// Write the pixels back to the file they were loaded from.
    pub fn save(&self) -> Result<()> {
        self.image.save(&self.path)?;
        debug!("Saved {}", self.path.display());
        Ok(())
    }
}

/// Lazily open each path in order. Nothing is decoded until the iterator is advanced.
pub fn load<I>(paths: I) -> impl Iterator<Item = Result<ImageHandle>>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    paths.into_iter().map(ImageHandle::open)
}

/// Regular files directly inside `dir`, sorted by path.
pub fn list_image_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.is_file() {
                Some(path)
            } else {
                None
            }
        })
        .collect::<Vec<PathBuf>>();

    files.sort();
    Ok(files)
}

/// Whether the file's contents or extension name an image format the decoder knows.
pub fn is_image_file(path: impl AsRef<Path>) -> bool {
    ImageReader::open(path.as_ref())
        .and_then(|reader| reader.with_guessed_format())
        .map(|reader| reader.format().is_some())
        .unwrap_or(false)
}
