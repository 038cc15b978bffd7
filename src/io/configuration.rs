//! Palette constants and runtime configuration defaults

// Quantizer constants
/// Ascending luminance thresholds separating the six tone bands (0..255 scale)
pub const LUMA_THRESHOLDS: [f64; 5] = [22.0, 60.0, 90.0, 135.0, 195.0];

/// Probability that an off-white sample is promoted to pure white
pub const P_OFF_WHITE_TO_WHITE: f64 = 0.80;
/// Probability that a silver sample is promoted to pure white
pub const P_SILVER_TO_WHITE: f64 = 0.65;
/// Probability that a charcoal or gray sample is demoted to pure black
pub const P_GRAY_TO_BLACK: f64 = 0.70;

// Streak geometry constants
/// Minimum streak length as a ratio of canvas width
pub const STREAK_MIN_LEN_RATIO: f64 = 0.1;
/// Left overhang allowance as a ratio of streak length
pub const STREAK_OVERHANG_RATIO: f64 = 0.1;
/// Lower bound of the color-sample offset within a streak's span
pub const STREAK_SAMPLE_SPAN_MIN: f64 = 0.15;
/// Upper bound of the color-sample offset within a streak's span
pub const STREAK_SAMPLE_SPAN_MAX: f64 = 0.85;

// Motion constants
/// Interval between full pipeline reruns while animating (milliseconds)
pub const REGENERATION_INTERVAL_MS: f64 = 140.0;
/// Hard ceiling for the wobbled blur radius
pub const MAX_WOBBLE_RADIUS: f64 = 4.0;
/// Simulated frame duration for the animation loop (60 Hz host tick)
pub const ANIMATION_TICK_MS: f64 = 1000.0 / 60.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u32 = 1;
/// Default grid cell edge length in pixels
pub const DEFAULT_GRID_SIZE: u32 = 32;
/// Default gap between grid tiles in pixels
pub const DEFAULT_GRID_GAP: u32 = 2;
/// Default pre-quantization blur radius (0 disables)
pub const DEFAULT_PRE_BLUR: f64 = 1.0;
/// Default number of motion streaks per run
pub const DEFAULT_STREAK_COUNT: u32 = 80;
/// Default maximum streak length as a ratio of canvas width
pub const DEFAULT_STREAK_MAX_LEN: f64 = 0.65;
/// Default streak thickness in pixels
pub const DEFAULT_STREAK_THICKNESS: u32 = 4;
/// Default luminance gamma; values below 1 bias toward white
pub const DEFAULT_LUMA_GAMMA: f64 = 0.60;
/// Default wobble amplitude added to the base blur radius
pub const DEFAULT_WOBBLE_AMPLITUDE: f64 = 1.5;
/// Default wobble angular speed in radians per second
pub const DEFAULT_WOBBLE_SPEED: f64 = 2.0;
/// Default number of regenerated frames captured in animation mode
pub const DEFAULT_ANIMATION_FRAMES: usize = 48;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to still output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix added to animated output filenames
pub const MOTION_SUFFIX: &str = "_motion";
/// Delay between animation GIF frames, matching the regeneration cadence
pub const GIF_FRAME_DELAY_MS: u32 = 140;
