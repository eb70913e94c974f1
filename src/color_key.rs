use image::{DynamicImage, GenericImageView, Pixel};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Coordinate of the pixel that keys every image, as (x, y).
pub const KEY_PIXEL: (u32, u32) = (1, 1);

/// Red, green and blue intensity of the key pixel.
///
/// Ordered lexicographically: red first, then green, then blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorKey {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorKey {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Read the key pixel of `image`. `path` is only used to label errors.
    pub fn extract(image: &DynamicImage, path: &Path) -> Result<Self> {
        let (width, height) = image.dimensions();
        let (x, y) = KEY_PIXEL;
        if width <= x || height <= y {
            return Err(Error::InvalidImage {
                path: path.to_path_buf(),
                reason: format!("{}x{} is too small to hold the key pixel", width, height),
            });
        }

        if !image.color().has_color() {
            return Err(Error::InvalidImage {
                path: path.to_path_buf(),
                reason: format!("{:?} has no color channels", image.color()),
            });
        }

        let [red, green, blue] = image.get_pixel(x, y).to_rgb().0;
        Ok(Self::new(red, green, blue))
    }
}

impl From<[u8; 3]> for ColorKey {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<ColorKey> for [u8; 3] {
    fn from(key: ColorKey) -> Self {
        [key.red, key.green, key.blue]
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorKeyError {
    #[error("expected 3 values for R, G and B, got {0}")]
    WrongArity(usize),
    #[error("'{0}' is not an integer in range 0..=255")]
    OutOfRange(String),
}

/// Parses `"R,G,B"`, `"R G B"` or any mix of commas and whitespace, optionally
/// wrapped in parentheses as printed by `Display`.
impl FromStr for ColorKey {
    type Err = ParseColorKeyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|inner| inner.strip_suffix(')'))
            .unwrap_or(s);

        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>();

        if parts.len() != 3 {
            return Err(ParseColorKeyError::WrongArity(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            // Digits only: u8 parsing would also accept a leading '+'
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseColorKeyError::OutOfRange(part.to_string()));
            }
            *channel = part
                .parse()
                .map_err(|_| ParseColorKeyError::OutOfRange(part.to_string()))?;
        }

        Ok(channels.into())
    }
}
