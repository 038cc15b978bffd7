//! Core stylization pipeline
//!
//! This module contains the algorithmic core:
//! - Six-tone palette and luminance banding
//! - Quantization with probabilistic gray suppression
//! - Box-average sampling, grid and streak layer rendering
//! - The orchestrator composing one full run

/// Pipeline parameters and normalization
pub mod config;
/// Full-run orchestration
pub mod generate;
/// Grid layer rendering with the white anchor tile
pub mod grid;
/// Luminance quantization and gray suppression
pub mod quantize;
/// Seeded random stream and reseed stepping
pub mod random;
/// Box-average downscaling
pub mod sampler;
/// Streak layer rendering
pub mod streaks;
/// The fixed six-tone palette
pub mod tone;

pub use config::PipelineConfig;
pub use generate::generate;
pub use tone::Tone;
