use crate::image_pipeline::background::{BackgroundSubtractor, DistanceMetric, Threshold, remove_background};
use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::image::{Image, Pixel};

const MARKER: Pixel = Pixel::new(1, 2, 3);

/// Foreground with a gradient of distances from a flat mid-gray backdrop.
fn gradient_pair() -> (Image, Image) {
    let width = 16;
    let height = 16;
    let pixels = (0..width * height)
        .map(|i| {
            let v = (i % 256) as u8;
            Pixel::new(v, 128u8.wrapping_add(v / 3), 255 - v)
        })
        .collect();
    let foreground = Image::new(width, height, pixels).unwrap();
    let background = Image::filled(width, height, Pixel::new(128, 128, 128)).unwrap();
    (foreground, background)
}

#[test]
fn test_identical_images_at_zero_threshold_are_all_marker() {
    let foreground = Image::filled(2, 2, Pixel::new(10, 10, 10)).unwrap();
    let background = foreground.clone();

    let output = remove_background(&foreground, &background, 0, MARKER).unwrap();
    assert!(output.pixels().iter().all(|&p| p == MARKER));
}

#[test]
fn test_zero_threshold_keeps_near_matches() {
    let foreground = Image::filled(2, 1, Pixel::new(10, 10, 11)).unwrap();
    let background = Image::filled(2, 1, Pixel::new(10, 10, 10)).unwrap();

    let output = remove_background(&foreground, &background, 0, MARKER).unwrap();
    assert_eq!(output, foreground);
}

#[test]
fn test_full_threshold_marks_opposite_colors() {
    let foreground = Image::filled(2, 2, Pixel::new(255, 255, 255)).unwrap();
    let background = Image::filled(2, 2, Pixel::BLACK).unwrap();

    for metric in [DistanceMetric::Chebyshev, DistanceMetric::Manhattan, DistanceMetric::Euclidean] {
        let subtractor = BackgroundSubtractor::new(metric);
        let output = subtractor.process(&foreground, &background, Threshold::MAX, MARKER).unwrap();
        assert!(output.pixels().iter().all(|&p| p == MARKER), "{metric:?}");

        let below = subtractor
            .process(&foreground, &background, Threshold::new(99).unwrap(), MARKER)
            .unwrap();
        assert_eq!(below, foreground, "{metric:?}");
    }
}

#[test]
fn test_chebyshev_cutoff_boundary() {
    // threshold 10 -> cutoff 25.5 on the 0..=255 scale
    let background = Image::filled(1, 1, Pixel::BLACK).unwrap();
    let at_25 = Image::filled(1, 1, Pixel::new(25, 0, 0)).unwrap();
    let at_26 = Image::filled(1, 1, Pixel::new(0, 26, 0)).unwrap();

    let output = remove_background(&at_25, &background, 10, MARKER).unwrap();
    assert_eq!(output.pixel(0, 0), MARKER);

    let output = remove_background(&at_26, &background, 10, MARKER).unwrap();
    assert_eq!(output.pixel(0, 0), Pixel::new(0, 26, 0));
}

#[test]
fn test_metrics_fold_channels_differently() {
    let a = Pixel::new(10, 20, 30);
    let b = Pixel::new(13, 16, 30);

    assert_eq!(DistanceMetric::Chebyshev.distance(a, b), 4);
    assert_eq!(DistanceMetric::Manhattan.distance(a, b), 7);
    assert_eq!(DistanceMetric::Euclidean.distance(a, b), 25);
}

#[test]
fn test_output_is_foreground_or_marker() {
    let (foreground, background) = gradient_pair();

    for threshold in [0, 5, 25, 50, 75, 100] {
        let output = remove_background(&foreground, &background, threshold, MARKER).unwrap();
        assert_eq!(output.dimensions(), foreground.dimensions());
        for (out, fg) in output.pixels().iter().zip(foreground.pixels()) {
            assert!(out == fg || *out == MARKER);
        }
    }
}

#[test]
fn test_background_count_is_monotonic_in_threshold() {
    let (foreground, background) = gradient_pair();

    for metric in [DistanceMetric::Chebyshev, DistanceMetric::Manhattan, DistanceMetric::Euclidean] {
        let subtractor = BackgroundSubtractor::new(metric);
        let mut previous = 0;
        for t in 0..=100 {
            let count = subtractor
                .count_background(&foreground, &background, Threshold::new(t).unwrap())
                .unwrap();
            assert!(count >= previous, "{metric:?} at {t}: {count} < {previous}");
            previous = count;
        }
        assert_eq!(previous, foreground.pixels().len());
    }
}

#[test]
fn test_mask_matches_output() {
    let (foreground, background) = gradient_pair();
    let subtractor = BackgroundSubtractor::default();
    let threshold = Threshold::new(30).unwrap();

    let mask = subtractor.mask(&foreground, &background, threshold).unwrap();
    let output = subtractor.process(&foreground, &background, threshold, MARKER).unwrap();

    for ((is_background, out), fg) in mask.iter().zip(output.pixels()).zip(foreground.pixels()) {
        assert_eq!(*out, if *is_background { MARKER } else { *fg });
    }
}

#[test]
fn test_inputs_are_not_modified() {
    let (foreground, background) = gradient_pair();
    let before = foreground.clone();

    remove_background(&foreground, &background, 100, MARKER).unwrap();
    assert_eq!(foreground, before);
}

#[test]
fn test_mismatched_dimensions_fail() {
    let foreground = Image::filled(4, 4, Pixel::BLACK).unwrap();
    let background = Image::filled(2, 2, Pixel::BLACK).unwrap();

    let err = remove_background(&foreground, &background, 10, MARKER).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::DimensionMismatch { fg_width: 4, fg_height: 4, bg_width: 2, bg_height: 2 }
    ));
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let image = Image::filled(2, 2, Pixel::BLACK).unwrap();

    for threshold in [-1, 101, i32::MAX] {
        let err = remove_background(&image, &image, threshold, MARKER).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidThreshold(t) if t == threshold));
    }
}
