//! Tests for reference image scanning and square fitting

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};
    use panelforge::prep::images::{fit_square, prepare_reference_images};
    use tempfile::TempDir;

    fn solid(width: u32, height: u32, color: Rgb<u8>) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
    }

    // Tests every source aspect ratio lands on an exact square
    // Verified by letterboxing instead of cropping
    #[test]
    fn test_fit_square_dimensions() {
        for (w, h) in [(512, 512), (1024, 512), (512, 1024), (333, 777), (13, 900)] {
            let fitted = fit_square(&solid(w, h, Rgb([90, 40, 40])), 512);
            assert_eq!(fitted.dimensions(), (512, 512), "source {w}x{h}");
        }
    }

    // Tests upscaling small sources still covers the full square
    // Verified by skipping the resize for small inputs
    #[test]
    fn test_fit_square_upscales() {
        let fitted = fit_square(&solid(40, 60, Rgb([0, 128, 0])), 512);
        assert_eq!(fitted.dimensions(), (512, 512));
        assert_eq!(*fitted.get_pixel(0, 0), Rgb([0, 128, 0]));
        assert_eq!(*fitted.get_pixel(511, 511), Rgb([0, 128, 0]));
    }

    // Tests a solid color survives scale and crop untouched
    // Verified by introducing padding pixels
    #[test]
    fn test_fit_square_preserves_color() {
        let fitted = fit_square(&solid(800, 200, Rgb([10, 20, 250])), 512);
        assert_eq!(*fitted.get_pixel(256, 256), Rgb([10, 20, 250]));
    }

    // Tests a batch converts supported files, names them by slug and index,
    // and ignores unsupported extensions
    // Verified by including text files in the count
    #[test]
    fn test_prepare_batch_naming_and_filtering() {
        let input = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");

        RgbImage::from_pixel(64, 64, Rgb([200, 0, 0]))
            .save(input.path().join("a.png"))
            .expect("save");
        RgbImage::from_pixel(100, 30, Rgb([0, 200, 0]))
            .save(input.path().join("b.jpg"))
            .expect("save");
        std::fs::write(input.path().join("notes.txt"), "not an image").expect("write");

        let mut skipped = 0;
        let summary = prepare_reference_images(
            input.path(),
            output.path(),
            "jimmy_five",
            |_path, _error| skipped += 1,
        )
        .expect("preparation");

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(skipped, 0);
        assert!(output.path().join("jimmy_five_000.png").is_file());
        assert!(output.path().join("jimmy_five_001.png").is_file());

        let first = image::open(output.path().join("jimmy_five_000.png")).expect("open");
        assert_eq!((first.width(), first.height()), (512, 512));
    }

    // Tests a corrupt image is skipped and reported without aborting the batch
    // Verified by propagating the per-image error
    #[test]
    fn test_prepare_skips_corrupt_images() {
        let input = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");

        std::fs::write(input.path().join("broken.png"), b"not a png").expect("write");
        RgbImage::from_pixel(64, 64, Rgb([200, 0, 0]))
            .save(input.path().join("fine.png"))
            .expect("save");

        let mut skipped = Vec::new();
        let summary = prepare_reference_images(
            input.path(),
            output.path(),
            "monica",
            |path, _error| skipped.push(path.to_path_buf()),
        )
        .expect("preparation");

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].ends_with("broken.png"));
        // Numbering counts successes only
        assert!(output.path().join("monica_000.png").is_file());
        assert!(!output.path().join("monica_001.png").exists());
    }

    // Tests an empty input directory yields an empty summary, not an error
    // Verified by erroring on zero candidates
    #[test]
    fn test_prepare_empty_directory() {
        let input = TempDir::new().expect("tempdir");
        let output = TempDir::new().expect("tempdir");

        let summary = prepare_reference_images(input.path(), output.path(), "smudge", |_, _| {})
            .expect("preparation");

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.failed, 0);
    }

    // Tests a missing input directory is a hard error
    // Verified by treating it as an empty batch
    #[test]
    fn test_prepare_missing_directory_errors() {
        let output = TempDir::new().expect("tempdir");
        let missing = output.path().join("does_not_exist");
        assert!(prepare_reference_images(&missing, output.path(), "maggie", |_, _| {}).is_err());
    }
}
