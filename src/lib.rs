pub mod color_key;
pub mod error;
pub mod image_generator_lib;
pub mod image_index;
pub mod image_loader;
pub mod image_splicer;
pub mod named_colors;

pub use color_key::{ColorKey, ParseColorKeyError, KEY_PIXEL};
pub use error::{Error, Result};
pub use image_generator_lib::{
    default_workers, generate_colors, generate_images, prepare_folder, GeneratorConfig, Progress,
    DEFAULT_IMAGE_SIZE,
};
pub use image_index::{build_index, lookup, InvalidImagePolicy, OrderedImageIndex};
pub use image_loader::{is_image_file, list_image_files, load, ImageHandle};
pub use image_splicer::{splice, splice_from};
pub use named_colors::{find_named_color, NamedColor, NAMED_COLORS};
