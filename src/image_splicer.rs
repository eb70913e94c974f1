use image::imageops::{self, FilterType};
use image::GenericImageView;
use log::info;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image_loader::{is_image_file, list_image_files, ImageHandle};

/// Paste a half-size copy of a random sibling image into the center of `target`
/// and save `target` back to its file. Returns the path of the sibling used.
pub fn splice(target: &mut ImageHandle) -> Result<PathBuf> {
    let source = pick_sibling(target.path(), &mut rand::thread_rng())?;
    splice_from(target, &source)?;
    Ok(source)
}

/// Same as [`splice`] with an explicit source image.
pub fn splice_from(target: &mut ImageHandle, source: &Path) -> Result<()> {
    let (width, height) = target.image().dimensions();
    let (thumb_width, thumb_height) = (width / 2, height / 2);
    if thumb_width == 0 || thumb_height == 0 {
        return Err(Error::InvalidImage {
            path: target.path().to_path_buf(),
            reason: format!("{}x{} is too small to splice into", width, height),
        });
    }

    let thumb = ImageHandle::open(source)?
        .image()
        .resize_exact(thumb_width, thumb_height, FilterType::CatmullRom);

    // Leaves a quarter of the width and height on each side
    let x = i64::from(thumb_width / 2);
    let y = i64::from(thumb_height / 2);
    imageops::replace(target.image_mut(), &thumb, x, y);
    target.save()?;

    info!(
        "Spliced {} ({}x{}) into {} at ({}, {})",
        source.display(),
        thumb_width,
        thumb_height,
        target.path().display(),
        x,
        y
    );
    Ok(())
}

fn pick_sibling<R: rand::Rng>(target: &Path, rng: &mut R) -> Result<PathBuf> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let siblings = list_image_files(dir)?
        .into_iter()
        .filter(|path| path.file_name() != target.file_name() && is_image_file(path))
        .collect::<Vec<PathBuf>>();

    siblings
        .choose(rng)
        .cloned()
        .ok_or_else(|| Error::NoSiblingImage {
            dir: dir.to_path_buf(),
        })
}
