//! Tests for pipeline constants and their relationships

#[cfg(test)]
mod tests {
    use panelforge::io::configuration::{
        BASE_SEED_MAX, BASE_SEED_MIN, CLASSIC_HEIGHT, CLASSIC_MAX_WIDTH, CLASSIC_MIN_WIDTH,
        CLASSIC_STROKE, GUIDANCE_SCALE, LARGE_MIN_HEIGHT, LARGE_MIN_WIDTH, LARGE_STROKE,
        PANEL_DELAY_MS, REFERENCE_EXTENSIONS, REFERENCE_SIZE, SD15_RESOLUTION, SD15_STEPS,
        SDXL_RESOLUTION, SDXL_STEPS, TRAINING_REPORT_INTERVAL, TRAINING_STEPS,
    };

    // Tests backend defaults per kind
    // Verified by swapping the two resolutions
    #[test]
    fn test_backend_defaults() {
        assert_eq!(SDXL_RESOLUTION, 1024);
        assert_eq!(SDXL_STEPS, 25);
        assert_eq!(SD15_RESOLUTION, 512);
        assert_eq!(SD15_STEPS, 30);
        assert!((GUIDANCE_SCALE - 7.5).abs() < f32::EPSILON);
    }

    // Tests the base seed draw range is ordered and four digits
    // Verified by inverting the bounds
    #[test]
    fn test_seed_range() {
        assert!(BASE_SEED_MIN < BASE_SEED_MAX);
        assert_eq!(BASE_SEED_MIN, 1000);
        assert_eq!(BASE_SEED_MAX, 9999);
    }

    // Tests classic bubble bounds are ordered
    // Verified by inverting the clamp bounds
    #[test]
    fn test_classic_bubble_bounds() {
        assert_eq!(CLASSIC_MIN_WIDTH, 150);
        assert_eq!(CLASSIC_MAX_WIDTH, 250);
        assert!(CLASSIC_MIN_WIDTH < CLASSIC_MAX_WIDTH);
        assert_eq!(CLASSIC_HEIGHT, 60);
    }

    // Tests the large style is strictly bigger than the classic style
    // Verified by shrinking the large minimums
    #[test]
    fn test_large_exceeds_classic() {
        assert_eq!(LARGE_MIN_WIDTH, 400);
        assert_eq!(LARGE_MIN_HEIGHT, 120);
        assert!(LARGE_MIN_WIDTH > CLASSIC_MAX_WIDTH);
        assert!(LARGE_MIN_HEIGHT > CLASSIC_HEIGHT);
        assert!(LARGE_STROKE > CLASSIC_STROKE);
    }

    // Tests training reports divide the step count evenly
    // Verified by making the interval not divide the total
    #[test]
    fn test_training_interval_divides_steps() {
        assert_eq!(TRAINING_STEPS % TRAINING_REPORT_INTERVAL, 0);
    }

    // Tests reference settings match the preparation contract
    // Verified by removing an extension
    #[test]
    fn test_reference_settings() {
        assert_eq!(REFERENCE_SIZE, 512);
        assert!(REFERENCE_EXTENSIONS.contains(&"jpg"));
        assert!(REFERENCE_EXTENSIONS.contains(&"webp"));
        for ext in REFERENCE_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }

    // Tests the inter-panel delay is throttling-scale, not minutes
    // Verified by raising the delay beyond a minute
    #[test]
    fn test_panel_delay_reasonable() {
        assert!(PANEL_DELAY_MS >= 100 && PANEL_DELAY_MS <= 60_000);
    }
}
