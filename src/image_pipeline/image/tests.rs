use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::image::{Image, Pixel, Rotation, rotate};

fn numbered(width: usize, height: usize) -> Image {
    let pixels = (0..width * height)
        .map(|i| Pixel::new(i as u8, 0, 0))
        .collect();
    Image::new(width, height, pixels).unwrap()
}

#[test]
fn test_new_rejects_zero_dimensions() {
    let result = Image::new(0, 4, Vec::new());
    assert!(matches!(result.unwrap_err(), PipelineError::InvalidDimensions(0, 4)));
}

#[test]
fn test_new_rejects_short_buffer() {
    let result = Image::new(2, 2, vec![Pixel::BLACK; 3]);
    assert!(matches!(
        result.unwrap_err(),
        PipelineError::BufferSizeMismatch { expected: 4, actual: 3 }
    ));
}

#[test]
fn test_row_major_access() {
    let image = numbered(3, 2);
    assert_eq!(image.pixel(2, 0).red, 2);
    assert_eq!(image.pixel(0, 1).red, 3);
    assert_eq!(image.row(1).len(), 3);
    assert_eq!(image.rows().count(), 2);
}

#[test]
fn test_rgb_bytes_layout() {
    let image = Image::from_rgb_bytes(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(image.pixel(1, 0), Pixel::new(4, 5, 6));
    assert_eq!(image.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_from_mosaic_places_channels_by_site() {
    let image = Image::from_mosaic(2, 2, &[10, 20, 30, 40], 8).unwrap();
    assert_eq!(image.pixel(0, 0), Pixel::new(10, 0, 0));
    assert_eq!(image.pixel(1, 0), Pixel::new(0, 20, 0));
    assert_eq!(image.pixel(0, 1), Pixel::new(0, 30, 0));
    assert_eq!(image.pixel(1, 1), Pixel::new(0, 0, 40));
}

#[test]
fn test_from_mosaic_reduces_deep_samples() {
    // 12-bit full scale maps to 8-bit full scale
    let image = Image::from_mosaic(2, 2, &[4095, 2048, 16, 0], 12).unwrap();
    assert_eq!(image.pixel(0, 0).red, 255);
    assert_eq!(image.pixel(1, 0).green, 128);
    assert_eq!(image.pixel(0, 1).green, 1);
    assert_eq!(image.pixel(1, 1).blue, 0);
}

#[test]
fn test_rotation_from_degrees() {
    assert_eq!(Rotation::from_degrees(0).unwrap(), Rotation::None);
    assert_eq!(Rotation::from_degrees(450).unwrap(), Rotation::Cw90);
    assert_eq!(Rotation::from_degrees(-90).unwrap(), Rotation::Cw270);
    assert!(matches!(
        Rotation::from_degrees(45).unwrap_err(),
        PipelineError::InvalidRotation(45)
    ));
}

#[test]
fn test_rotation_next_cycles() {
    let mut rotation = Rotation::None;
    for expected in [90, 180, 270, 0] {
        rotation = rotation.next();
        assert_eq!(rotation.degrees(), expected);
    }
}

#[test]
fn test_rotate_quarter_turn() {
    // 0 1 2
    // 3 4 5
    let image = numbered(3, 2);
    let rotated = rotate(&image, Rotation::Cw90);

    assert_eq!(rotated.dimensions(), (2, 3));
    // 3 0
    // 4 1
    // 5 2
    let reds: Vec<u8> = rotated.pixels().iter().map(|p| p.red).collect();
    assert_eq!(reds, vec![3, 0, 4, 1, 5, 2]);
}

#[test]
fn test_rotate_half_and_three_quarter_turns() {
    let image = numbered(3, 2);

    let half: Vec<u8> = rotate(&image, Rotation::Cw180).pixels().iter().map(|p| p.red).collect();
    assert_eq!(half, vec![5, 4, 3, 2, 1, 0]);

    let three_quarter = rotate(&image, Rotation::Cw270);
    assert_eq!(three_quarter.dimensions(), (2, 3));
    let reds: Vec<u8> = three_quarter.pixels().iter().map(|p| p.red).collect();
    assert_eq!(reds, vec![2, 5, 1, 4, 0, 3]);
}

#[test]
fn test_four_quarter_turns_is_identity() {
    let image = numbered(5, 3);
    let mut rotated = image.clone();
    for _ in 0..4 {
        rotated = rotate(&rotated, Rotation::Cw90);
    }
    assert_eq!(rotated, image);
}

#[test]
fn test_filled_rejects_unallocatable_sizes() {
    for (width, height) in [(usize::MAX, 2), (usize::MAX / 2, 1), (1 << 40, 1 << 30)] {
        let result = Image::filled(width, height, Pixel::BLACK);
        assert!(matches!(
            result.unwrap_err(),
            PipelineError::InvalidDimensions(w, h) if w == width && h == height
        ));
    }
}

#[test]
fn test_filled_rejects_zero_dimensions() {
    assert!(matches!(
        Image::filled(4, 0, Pixel::BLACK).unwrap_err(),
        PipelineError::InvalidDimensions(4, 0)
    ));
}
