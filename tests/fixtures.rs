#![allow(dead_code)]

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use image_finder_lib::{ColorKey, ImageHandle};
use std::path::{Path, PathBuf};

/// An in-memory solid image whose key pixel has `rgb`.
pub fn solid_handle(name: &str, rgb: [u8; 3]) -> ImageHandle {
    let image = RgbImage::from_pixel(4, 4, Rgb(rgb));
    ImageHandle::new(name, DynamicImage::ImageRgb8(image))
}

pub fn key(red: u8, green: u8, blue: u8) -> ColorKey {
    ColorKey::new(red, green, blue)
}

/// Write a solid square PNG into `dir` and return its path.
pub fn write_solid_png(dir: &Path, name: &str, size: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(size, size, Rgb(rgb))
        .save(&path)
        .expect("write fixture image");
    path
}

pub fn gray_handle(name: &str) -> ImageHandle {
    let image = GrayImage::from_pixel(4, 4, Luma([128]));
    ImageHandle::new(name, DynamicImage::ImageLuma8(image))
}
