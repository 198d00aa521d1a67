//! Backend kinds, generation requests, and the backend trait

use crate::io::configuration::{
    GUIDANCE_SCALE, SD15_RESOLUTION, SD15_STEPS, SDXL_RESOLUTION, SDXL_STEPS,
};
use crate::io::error::Result;
use clap::ValueEnum;
use image::RgbImage;

/// Enumerated backend kind, decided at construction
///
/// Each kind carries its own default resolution and step count; the pipeline
/// never probes a backend's capabilities at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendKind {
    /// SDXL-class backend: 1024x1024 output, 25 steps
    Sdxl,
    /// SD-1.5-class backend: 512x512 output, 30 steps
    Sd15,
}

impl BackendKind {
    /// Default square output edge length for this kind
    pub const fn default_resolution(self) -> u32 {
        match self {
            Self::Sdxl => SDXL_RESOLUTION,
            Self::Sd15 => SD15_RESOLUTION,
        }
    }

    /// Default inference step count for this kind
    pub const fn default_steps(self) -> u32 {
        match self {
            Self::Sdxl => SDXL_STEPS,
            Self::Sd15 => SD15_STEPS,
        }
    }

    /// Human-readable label used in metadata and viewers
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sdxl => "SDXL",
            Self::Sd15 => "SD 1.5",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches the clap value-enum spelling so defaults round-trip
        let name = match self {
            Self::Sdxl => "sdxl",
            Self::Sd15 => "sd15",
        };
        f.write_str(name)
    }
}

/// One text-to-image request with fully resolved parameters
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    /// Positive prompt describing the panel scene
    pub prompt: String,
    /// Negative prompt steering away from unwanted styles
    pub negative_prompt: String,
    /// Deterministic seed, derived as base seed plus panel ordinal
    pub seed: u64,
    /// Inference step count
    pub steps: u32,
    /// Classifier-free guidance scale
    pub guidance: f32,
    /// Output image width
    pub width: u32,
    /// Output image height
    pub height: u32,
}

impl GenerationRequest {
    /// Build a request from a backend kind's defaults
    pub const fn for_kind(
        kind: BackendKind,
        prompt: String,
        negative_prompt: String,
        seed: u64,
    ) -> Self {
        Self {
            prompt,
            negative_prompt,
            seed,
            steps: kind.default_steps(),
            guidance: GUIDANCE_SCALE,
            width: kind.default_resolution(),
            height: kind.default_resolution(),
        }
    }
}

/// Opaque text-to-image generation contract
///
/// A backend handle is acquired once at run start, owned by the caller, and
/// held for the duration of the run. Implementations are expected (not
/// verified) to produce identical images for identical requests.
pub trait GenerationBackend {
    /// The kind this backend was constructed as
    fn kind(&self) -> BackendKind;

    /// Produce one panel image for the request
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to produce an image; the
    /// pipeline records the failure and continues with the next panel
    fn generate(&mut self, request: &GenerationRequest) -> Result<RgbImage>;
}
