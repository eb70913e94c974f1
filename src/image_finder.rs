use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use image_finder_lib::{
    list_image_files, load, splice, ColorKey, InvalidImagePolicy, OrderedImageIndex,
};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find an image by the RGB value of its key pixel and splice another image into it",
    long_about = None
)]
struct Args {
    /// Image files to index, inserted in the order given. Take precedence over --folder
    #[arg(required_unless_present = "folder")]
    images: Vec<PathBuf>,

    /// Index every file in this directory when no image files are listed
    #[arg(long, env("IMAGES_DIR"))]
    folder: Option<PathBuf>,

    /// Color to look up as R,G,B; may be repeated. Reads stdin when omitted
    #[arg(long, value_name = "R,G,B")]
    rgb: Vec<ColorKey>,

    /// Leave out images that cannot be decoded or keyed instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Only report which image matches, do not modify it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();

    let paths = image_paths(&args)?;

    println!("Images to load: {}", paths.len());
    for path in &paths {
        println!("  {}", path.display());
    }

    let policy = if args.skip_invalid {
        InvalidImagePolicy::Skip
    } else {
        InvalidImagePolicy::Abort
    };
    let mut index = OrderedImageIndex::build(load(&paths), policy)
        .context("Failed to build image index")?;

    if !args.rgb.is_empty() {
        for key in &args.rgb {
            handle_query(&mut index, *key, args.dry_run);
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<ColorKey>() {
            Ok(key) => handle_query(&mut index, key, args.dry_run),
            Err(e) => eprintln!("Invalid color '{}': {}", line.trim(), e),
        }
    }

    Ok(())
}

/// Files listed on the command line, or else every file of `--folder`.
fn image_paths(args: &Args) -> Result<Vec<PathBuf>> {
    match &args.folder {
        Some(folder) if args.images.is_empty() => list_image_files(folder)
            .with_context(|| format!("Failed to read image folder {}", folder.display())),
        _ => Ok(args.images.clone()),
    }
}

fn handle_query(index: &mut OrderedImageIndex, key: ColorKey, dry_run: bool) {
    let found = match index.find_mut(key) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            return;
        }
    };

    match found {
        Some(handle) if dry_run => {
            println!("{} -> {}", key, handle.path().display());
        }
        Some(handle) => match splice(handle) {
            Ok(source) => println!(
                "Updated {} with {}",
                handle.path().display(),
                source.display()
            ),
            Err(e) => eprintln!("Failed to update {}: {}", handle.path().display(), e),
        },
        None => match index.root_key() {
            Some(root) => println!("No image found for {}, try {}", key, root),
            None => println!("No image found for {}", key),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_folder_falls_back_to_images_dir_env() -> Result<()> {
        let temp_dir = tempdir()?;
        fs::write(temp_dir.path().join("b.png"), "b")?;
        fs::write(temp_dir.path().join("a.png"), "a")?;

        // The only test in this binary touching IMAGES_DIR
        std::env::set_var("IMAGES_DIR", temp_dir.path());

        let from_env = Args::try_parse_from(["image-finder", "--rgb", "1,2,3"]);
        let listed = Args::try_parse_from(["image-finder", "x.png", "y.png"]);
        let without_anything = {
            std::env::remove_var("IMAGES_DIR");
            Args::try_parse_from(["image-finder"])
        };

        let from_env = from_env?;
        assert_eq!(from_env.folder.as_deref(), Some(temp_dir.path()));
        assert_eq!(
            image_paths(&from_env)?,
            vec![temp_dir.path().join("a.png"), temp_dir.path().join("b.png")]
        );

        let listed = listed?;
        assert_eq!(
            image_paths(&listed)?,
            vec![PathBuf::from("x.png"), PathBuf::from("y.png")]
        );

        assert!(without_anything.is_err());
        Ok(())
    }
}
