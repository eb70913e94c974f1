use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use image_finder_lib::image_generator_lib::sample_colors;
use image_finder_lib::{
    default_workers, generate_colors, prepare_folder, GeneratorConfig, Progress,
    DEFAULT_IMAGE_SIZE,
};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Reset the image folder and fill it with solid-color images",
    long_about = None
)]
struct Args {
    /// Number of images to generate, one per named color
    #[arg(long)]
    count: usize,

    /// Directory to (re)create and write images into
    #[arg(long, env("IMAGES_DIR"), default_value = "images")]
    images_dir: String,

    /// Width and height of every image in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    size: u32,

    /// Number of images drawn in parallel [default: number of CPUs]
    #[arg(long)]
    workers: Option<usize>,
}

impl GeneratorConfig for Args {
    fn images_dir(&self) -> &str {
        &self.images_dir
    }

    fn image_size(&self) -> u32 {
        self.size
    }

    fn workers(&self) -> usize {
        self.workers.unwrap_or_else(default_workers)
    }
}

fn print_progress(progress: &Progress) {
    println!(
        "{}/{} ({:>3}%)",
        progress.completed(),
        progress.total(),
        progress.percent()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    // Fail before touching the folder if the request cannot be met
    let colors = sample_colors(args.count)?;

    prepare_folder(&args.images_dir)
        .with_context(|| format!("Failed to prepare image folder {}", args.images_dir))?;

    let progress = Progress::new();
    let generation = generate_colors(&args, colors, progress.clone());
    tokio::pin!(generation);

    // Created once so a Ctrl-C arriving between polls is not lost
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    let mut last_reported = None;

    loop {
        tokio::select! {
            result = &mut generation => {
                let paths = result.context("Image generation failed")?;
                print_progress(&progress);
                println!("Generated {} images in {}", paths.len(), args.images_dir);
                break;
            }
            _ = ticker.tick() => {
                let completed = progress.completed();
                if last_reported != Some(completed) {
                    print_progress(&progress);
                    last_reported = Some(completed);
                }
            }
            _ = &mut ctrl_c => {
                // Queued images are dropped with the generation future.
                // Images being drawn still finish.
                println!(
                    "Stopped after {} of {} images",
                    progress.completed(),
                    progress.total()
                );
                break;
            }
        }
    }

    Ok(())
}
