use image::{Rgb, RgbImage};
use log::{debug, info};
use rand::seq::SliceRandom;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::error::{Error, Result};
use crate::named_colors::{NamedColor, NAMED_COLORS};

/// Default side length of generated square images.
pub const DEFAULT_IMAGE_SIZE: u32 = 10_000;

pub trait GeneratorConfig {
    fn images_dir(&self) -> &str;
    fn image_size(&self) -> u32;
    fn workers(&self) -> usize;
}

/// Worker count matching the available hardware parallelism.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Completion counter shared between the generation workers and whoever polls it.
#[derive(Debug, Default)]
pub struct Progress {
    completed: AtomicUsize,
    total: AtomicUsize,
}

impl Progress {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn is_done(&self) -> bool {
        let total = self.total();
        total > 0 && self.completed() >= total
    }

    /// Whole percent done, 0 before a total is known.
    pub fn percent(&self) -> usize {
        match self.total() {
            0 => 0,
            total => self.completed() * 100 / total,
        }
    }

    fn start(&self, total: usize) {
        self.completed.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
    }

    fn complete_one(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Create `dir` if it is missing, otherwise delete every file inside it.
pub fn prepare_folder(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        info!("Created image folder {}", dir.display());
        return Ok(());
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    info!("Cleared {} files from {}", removed, dir.display());
    Ok(())
}

/// Draw one solid `size`x`size` image and save it as `<name>.png` in `dir`.
pub fn draw_image(dir: &Path, color: &NamedColor, size: u32) -> Result<PathBuf> {
    let path = dir.join(format!("{}.png", color.name));
    RgbImage::from_pixel(size, size, Rgb(color.rgb)).save(&path)?;
    debug!("Drew {}", path.display());
    Ok(path)
}

/// Pick `count` different colors at random from the named color table.
pub fn sample_colors(count: usize) -> Result<Vec<NamedColor>> {
    if count > NAMED_COLORS.len() {
        return Err(Error::InsufficientColors {
            requested: count,
            available: NAMED_COLORS.len(),
        });
    }

    Ok(NAMED_COLORS
        .choose_multiple(&mut rand::thread_rng(), count)
        .copied()
        .collect())
}

/// Generate `count` images in randomly chosen colors. See [`generate_colors`].
pub async fn generate_images<T: GeneratorConfig>(
    config: &T,
    count: usize,
    progress: Arc<Progress>,
) -> Result<Vec<PathBuf>> {
    let colors = sample_colors(count)?;
    generate_colors(config, colors, progress).await
}

/// Draw one image per color on a pool of `config.workers()` blocking workers.
///
/// `progress` is bumped after each file is written; completion order is not
/// the order of `colors`. Dropping the returned future stops dispatching and
/// aborts queued work, but images already being drawn are still written.
pub async fn generate_colors<T: GeneratorConfig>(
    config: &T,
    colors: Vec<NamedColor>,
    progress: Arc<Progress>,
) -> Result<Vec<PathBuf>> {
    let dir = PathBuf::from(config.images_dir());
    let size = config.image_size();
    let workers = config.workers().max(1);

    progress.start(colors.len());
    info!(
        "Generating {} images of {}x{} in {} with {} workers",
        colors.len(),
        size,
        size,
        dir.display(),
        workers
    );

    let mut tasks = JoinSet::new();
    let mut paths = Vec::with_capacity(colors.len());

    for color in colors {
        // Keep at most `workers` images in flight
        while tasks.len() >= workers {
            if let Some(joined) = tasks.join_next().await {
                paths.push(joined??);
            }
        }

        let dir = dir.clone();
        let progress = progress.clone();
        tasks.spawn_blocking(move || {
            let path = draw_image(&dir, &color, size)?;
            progress.complete_one();
            Ok::<PathBuf, Error>(path)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        paths.push(joined??);
    }

    info!("Generated {} images in {}", paths.len(), dir.display());
    Ok(paths)
}
