//! Reference image scanning, square fitting, and conversion

use crate::io::configuration::{REFERENCE_EXTENSIONS, REFERENCE_SIZE};
use crate::io::error::{ComicError, Result, file_system_error};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};

/// Outcome of one preparation batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepSummary {
    /// Number of reference images converted and written
    pub processed: usize,
    /// Number of reference images that failed and were skipped
    pub failed: usize,
}

/// Scale to cover a square of `size` pixels, then center-crop
///
/// The output is always exactly `size` by `size` with 3-channel color,
/// regardless of the source aspect ratio.
pub fn fit_square(source: &DynamicImage, size: u32) -> RgbImage {
    let rgb = source.to_rgb8();
    let (w, h) = rgb.dimensions();

    // Scale so the smaller edge reaches the target, rounding up so the crop
    // never runs out of pixels
    let (scaled_w, scaled_h) = if w >= h {
        ((w as u64 * size as u64).div_ceil(h.max(1) as u64) as u32, size)
    } else {
        (size, (h as u64 * size as u64).div_ceil(w.max(1) as u64) as u32)
    };

    let resized = imageops::resize(
        &rgb,
        scaled_w.max(size),
        scaled_h.max(size),
        FilterType::Lanczos3,
    );
    let (rw, rh) = resized.dimensions();
    let x = (rw - size) / 2;
    let y = (rh - size) / 2;
    imageops::crop_imm(&resized, x, y, size, size).to_image()
}

/// Convert every supported image under `input_dir` into a 512-square PNG
///
/// Outputs are written to `output_dir` as `<slug>_NNN.png`, numbered in the
/// order they were successfully processed. Failures are reported and skipped.
///
/// # Errors
///
/// Returns an error if the input directory cannot be read or the output
/// directory cannot be created; per-image failures never abort the batch
pub fn prepare_reference_images(
    input_dir: &Path,
    output_dir: &Path,
    slug: &str,
    mut on_skip: impl FnMut(&Path, &ComicError),
) -> Result<PrepSummary> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| file_system_error(output_dir, "create directory", e))?;

    let mut summary = PrepSummary::default();

    for path in collect_reference_paths(input_dir)? {
        match process_one(&path, output_dir, slug, summary.processed) {
            Ok(()) => summary.processed += 1,
            Err(error) => {
                summary.failed += 1;
                on_skip(&path, &error);
            }
        }
    }

    Ok(summary)
}

fn collect_reference_paths(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(input_dir)
        .map_err(|e| file_system_error(input_dir, "read directory", e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| file_system_error(input_dir, "read directory entry", e))?
            .path();
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let lowered = ext.to_ascii_lowercase();
                REFERENCE_EXTENSIONS.contains(&lowered.as_str())
            });
        if supported && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn process_one(path: &Path, output_dir: &Path, slug: &str, index: usize) -> Result<()> {
    let source = image::open(path).map_err(|e| ComicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let fitted = fit_square(&source, REFERENCE_SIZE);
    let output_path = output_dir.join(format!("{slug}_{index:03}.png"));
    fitted
        .save(&output_path)
        .map_err(|e| ComicError::ImageExport {
            path: output_path.clone(),
            source: e,
        })?;

    Ok(())
}
