//! Pipeline constants and runtime configuration defaults

// Generation backend defaults per backend kind
/// Output edge length for SDXL-class backends
pub const SDXL_RESOLUTION: u32 = 1024;
/// Inference step count for SDXL-class backends
pub const SDXL_STEPS: u32 = 25;
/// Output edge length for SD-1.5-class backends
pub const SD15_RESOLUTION: u32 = 512;
/// Inference step count for SD-1.5-class backends
pub const SD15_STEPS: u32 = 30;
/// Classifier-free guidance scale shared by both backend kinds
pub const GUIDANCE_SCALE: f32 = 7.5;

// Seed drift, not true character consistency, is what repeated runs rely on
/// Lowest base seed drawn when none is supplied
pub const BASE_SEED_MIN: u64 = 1000;
/// Highest base seed drawn when none is supplied
pub const BASE_SEED_MAX: u64 = 9999;

// Pacing between backend calls (throttling, not correctness)
/// Default delay between panel generations in milliseconds
pub const PANEL_DELAY_MS: u64 = 2000;

// Simulated LoRA training stage
/// Total simulated training steps
pub const TRAINING_STEPS: u32 = 500;
/// Steps between simulated progress reports
pub const TRAINING_REPORT_INTERVAL: u32 = 100;
/// Delay per simulated report in milliseconds
pub const TRAINING_STEP_DELAY_MS: u64 = 500;
/// Simulated LoRA rank
pub const LORA_RANK: u32 = 16;
/// Simulated learning rate
pub const LEARNING_RATE: f64 = 1e-4;

// Reference image preparation
/// Square edge length for processed reference images
pub const REFERENCE_SIZE: u32 = 512;
/// Accepted reference image extensions (lowercase)
pub const REFERENCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

// Classic bubble geometry (character-count sizing)
/// Bubble width contributed per dialogue character
pub const CLASSIC_WIDTH_PER_CHAR: u32 = 10;
/// Minimum classic bubble width
pub const CLASSIC_MIN_WIDTH: u32 = 150;
/// Maximum classic bubble width
pub const CLASSIC_MAX_WIDTH: u32 = 250;
/// Fixed classic bubble height
pub const CLASSIC_HEIGHT: u32 = 60;
/// Classic outline stroke width
pub const CLASSIC_STROKE: u32 = 3;
/// Classic dialogue font scale in pixels
pub const CLASSIC_FONT_SCALE: f32 = 16.0;

// Large bubble geometry (measured-text sizing)
/// Minimum large bubble width
pub const LARGE_MIN_WIDTH: u32 = 400;
/// Horizontal padding added around measured text
pub const LARGE_TEXT_PAD_X: u32 = 80;
/// Minimum large bubble height
pub const LARGE_MIN_HEIGHT: u32 = 120;
/// Vertical padding added around measured text
pub const LARGE_TEXT_PAD_Y: u32 = 60;
/// Large outline stroke width
pub const LARGE_STROKE: u32 = 5;
/// Large dialogue font scale in pixels
pub const LARGE_FONT_SCALE: f32 = 48.0;
/// Offset of the gray legibility shadow under large dialogue text
pub const SHADOW_OFFSET: i32 = 2;

// Persisted output layout
/// File name of the serialized story record
pub const METADATA_FILENAME: &str = "metadata.json";
/// File name of the two-page book viewer
pub const BOOK_VIEWER_FILENAME: &str = "comic_book.html";
/// File name of the single-strip viewer
pub const STRIP_VIEWER_FILENAME: &str = "comic.html";
/// Run directory prefix for book output
pub const BOOK_DIR_PREFIX: &str = "comic_book";
/// Run directory prefix for strip output
pub const STRIP_DIR_PREFIX: &str = "comic_strip";
/// Suffix appended to the reference directory for processed output
pub const PROCESSED_SUFFIX: &str = "_processed";
