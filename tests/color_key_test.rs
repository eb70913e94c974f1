use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use image_finder_lib::{ColorKey, Error, ParseColorKeyError};
use std::path::Path;

mod fixtures;
use fixtures::{gray_handle, key};

#[test]
fn test_extract_reads_pixel_at_one_one() {
    let mut image = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
    image.put_pixel(1, 1, Rgb([10, 20, 30]));
    image.put_pixel(0, 0, Rgb([99, 99, 99]));

    let extracted =
        ColorKey::extract(&DynamicImage::ImageRgb8(image), Path::new("a.png")).unwrap();
    assert_eq!(extracted, key(10, 20, 30));
}

#[test]
fn test_extract_ignores_alpha() {
    let image = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 0]));
    let extracted =
        ColorKey::extract(&DynamicImage::ImageRgba8(image), Path::new("a.png")).unwrap();
    assert_eq!(extracted, key(1, 2, 3));
}

#[test]
fn test_extract_rejects_undersized_images() {
    for (width, height) in [(1, 1), (1, 5), (5, 1)] {
        let image = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let result = ColorKey::extract(&image, Path::new("tiny.png"));
        assert!(
            matches!(result, Err(Error::InvalidImage { .. })),
            "{}x{} should be rejected",
            width,
            height
        );
    }
}

#[test]
fn test_extract_rejects_grayscale() {
    let handle = gray_handle("gray.png");
    match handle.color_key() {
        Err(Error::InvalidImage { path, .. }) => assert_eq!(path, Path::new("gray.png")),
        other => panic!("expected InvalidImage, got {:?}", other),
    }
}

#[test]
fn test_keys_order_lexicographically() {
    assert!(key(0, 255, 255) < key(1, 0, 0));
    assert!(key(5, 0, 255) < key(5, 1, 0));
    assert!(key(5, 5, 4) < key(5, 5, 5));
    assert_eq!(key(7, 8, 9), ColorKey::from([7, 8, 9]));
}

#[test]
fn test_parse_accepts_commas_and_whitespace() {
    assert_eq!("10,20,30".parse::<ColorKey>(), Ok(key(10, 20, 30)));
    assert_eq!(" 0 128  255 ".parse::<ColorKey>(), Ok(key(0, 128, 255)));
    assert_eq!("1, 2, 3".parse::<ColorKey>(), Ok(key(1, 2, 3)));
}

#[test]
fn test_parse_rejects_bad_input() {
    assert_eq!("1,2".parse::<ColorKey>(), Err(ParseColorKeyError::WrongArity(2)));
    assert_eq!("1,2,3,4".parse::<ColorKey>(), Err(ParseColorKeyError::WrongArity(4)));
    assert_eq!(
        "1,2,256".parse::<ColorKey>(),
        Err(ParseColorKeyError::OutOfRange("256".to_string()))
    );
    assert_eq!(
        "1,-2,3".parse::<ColorKey>(),
        Err(ParseColorKeyError::OutOfRange("-2".to_string()))
    );
    assert_eq!(
        "+1,2,3".parse::<ColorKey>(),
        Err(ParseColorKeyError::OutOfRange("+1".to_string()))
    );
}

#[test]
fn test_display_output_parses_back() {
    let shown = key(1, 22, 255).to_string();
    assert_eq!(shown, "(1, 22, 255)");
    assert_eq!(shown.parse::<ColorKey>(), Ok(key(1, 22, 255)));
    assert_eq!("(0,0,0)".parse::<ColorKey>(), Ok(key(0, 0, 0)));
}

#[test]
fn test_parse_rejects_unbalanced_parentheses() {
    assert_eq!(
        "(1, 2, 3".parse::<ColorKey>(),
        Err(ParseColorKeyError::OutOfRange("(1".to_string()))
    );
}
