use anyhow::Result;
use image_finder_lib::{
    build_index, find_named_color, generate_colors, list_image_files, load, lookup,
    prepare_folder, splice, ColorKey, GeneratorConfig, NamedColor, Progress,
};
use std::path::Path;
use tempfile::TempDir;

struct TestEnv {
    // Keep the temporary directory alive for the duration of the test
    #[allow(dead_code)]
    test_dir: TempDir,
    images_dir: String,
}

impl GeneratorConfig for TestEnv {
    fn images_dir(&self) -> &str {
        &self.images_dir
    }

    fn image_size(&self) -> u32 {
        16
    }

    fn workers(&self) -> usize {
        4
    }
}

fn setup_test_environment() -> Result<TestEnv> {
    let test_dir = TempDir::new()?;
    let images_dir = test_dir.path().join("images");
    prepare_folder(&images_dir)?;

    Ok(TestEnv {
        images_dir: images_dir.to_string_lossy().to_string(),
        test_dir,
    })
}

fn palette() -> Vec<NamedColor> {
    ["crimson", "gold", "teal", "navy", "orchid"]
        .iter()
        .filter_map(|name| find_named_color(name).copied())
        .collect()
}

#[test]
fn test_generate_load_and_find() -> Result<()> {
    let env = setup_test_environment()?;
    let colors = palette();
    assert_eq!(colors.len(), 5);

    let progress = Progress::new();
    let generated = tokio_test::block_on(generate_colors(&env, colors.clone(), progress.clone()))?;
    assert_eq!(generated.len(), 5);
    assert!(progress.is_done());

    let paths = list_image_files(&env.images_dir)?;
    let index = build_index(load(&paths))?;
    assert_eq!(index.len(), 5);

    for color in &colors {
        let found = lookup(&index, color.key())?.expect("generated color is indexed");
        let expected = Path::new(&env.images_dir).join(format!("{}.png", color.name));
        assert_eq!(found.path(), expected);
    }

    let unused = ColorKey::new(1, 2, 3);
    assert!(colors.iter().all(|color| color.key() != unused));
    assert!(lookup(&index, unused)?.is_none());
    Ok(())
}

#[test]
fn test_find_then_splice() -> Result<()> {
    let env = setup_test_environment()?;
    let colors = palette().into_iter().take(2).collect::<Vec<_>>();
    tokio_test::block_on(generate_colors(&env, colors.clone(), Progress::new()))?;

    let paths = list_image_files(&env.images_dir)?;
    let mut index = build_index(load(&paths))?;

    let target = index
        .find_mut(colors[0].key())?
        .expect("first color is indexed");
    let used = splice(target)?;
    assert_eq!(used, Path::new(&env.images_dir).join(format!("{}.png", colors[1].name)));

    // The key pixel sits outside the center quadrant, so a rebuilt index still finds it
    let rebuilt = build_index(load(&paths))?;
    assert!(rebuilt.find(colors[0].key())?.is_some());
    Ok(())
}
