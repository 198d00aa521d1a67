//! Deterministic placeholder backend for model-free environments

use crate::backend::generator::{BackendKind, GenerationBackend, GenerationRequest};
use crate::io::error::{Result, invalid_parameter};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

// Flat cartoon-ish palettes, echoing the "simple flat colors, white
// background" prompt family the pipeline targets
const SKY_COLORS: [[u8; 3]; 4] = [
    [235, 244, 255],
    [255, 249, 230],
    [240, 255, 240],
    [253, 240, 250],
];
const GROUND_COLORS: [[u8; 3]; 4] = [
    [176, 216, 140],
    [222, 202, 157],
    [168, 208, 196],
    [204, 204, 204],
];
const BLOB_COLORS: [[u8; 3]; 6] = [
    [229, 57, 53],
    [30, 136, 229],
    [67, 160, 71],
    [251, 192, 45],
    [142, 36, 170],
    [109, 76, 65],
];

/// Seeded scene-card renderer standing in for a diffusion model
///
/// Real model inference is outside the pipeline's scope; this backend keeps
/// the contract honest end to end: identical requests produce identical
/// images, and the panel dimensions follow the request.
#[derive(Clone, Copy, Debug)]
pub struct PlaceholderBackend {
    kind: BackendKind,
}

impl PlaceholderBackend {
    /// Construct a placeholder backend of the given kind
    pub const fn new(kind: BackendKind) -> Self {
        Self { kind }
    }
}

impl GenerationBackend for PlaceholderBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn generate(&mut self, request: &GenerationRequest) -> Result<RgbImage> {
        if request.width == 0 || request.height == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{}x{}", request.width, request.height),
                &"panel dimensions must be nonzero",
            ));
        }

        let mut rng = StdRng::seed_from_u64(request.seed);
        let sky = pick(&SKY_COLORS, &mut rng);
        let ground = pick(&GROUND_COLORS, &mut rng);

        let mut image = RgbImage::from_pixel(request.width, request.height, Rgb(sky));

        let horizon = (request.height * 7) / 10;
        if horizon < request.height {
            imageproc::drawing::draw_filled_rect_mut(
                &mut image,
                Rect::at(0, horizon as i32).of_size(request.width, request.height - horizon),
                Rgb(ground),
            );
        }

        // Blob count varies with the prompt so different scenes read differently
        let blobs = 3 + request.prompt.len() % 3;
        for _ in 0..blobs {
            let cx = rng.random_range(0..request.width) as i32;
            let cy = rng.random_range(horizon / 2..request.height) as i32;
            let rx = rng.random_range(1..(request.width / 6).max(2)) as i32;
            let ry = rng.random_range(1..(request.height / 6).max(2)) as i32;
            let color = pick(&BLOB_COLORS, &mut rng);
            draw_filled_ellipse_mut(&mut image, (cx, cy), rx, ry, Rgb(color));
        }

        // Sun disc in the upper-right corner
        let sun_r = (request.width / 12) as i32;
        draw_filled_ellipse_mut(
            &mut image,
            ((request.width - request.width / 8) as i32, sun_r),
            sun_r,
            sun_r,
            Rgb([255, 213, 79]),
        );

        Ok(image)
    }
}

fn pick(palette: &[[u8; 3]], rng: &mut StdRng) -> [u8; 3] {
    palette.choose(rng).copied().unwrap_or([255, 255, 255])
}
