//! Pipeline orchestrator: one full stylization run

use image::{Rgba, RgbaImage};

use crate::pipeline::config::PipelineConfig;
use crate::pipeline::grid::render_grid;
use crate::pipeline::random::SeededStream;
use crate::pipeline::streaks::render_streaks;
use crate::pipeline::tone::Tone;
use crate::raster::cover::prepare_base;

/// Run the full pipeline once and return the composed raster
///
/// Steps, in fixed order: normalize the config, cover-crop and optionally
/// blur the source into the base image, reset the random stream to `seed`,
/// fill the output with the darkest tone, paint streaks, paint the tile
/// grid, force the anchor tile white. Streaks are painted first so they
/// remain visible only through the grid gaps; that composition order is
/// part of the output contract.
///
/// Rerunning with identical `(source, canvas, config, seed)` produces a
/// pixel-identical image. A zero-area canvas or empty source is a no-op
/// returning `None`; callers keep whatever result they already had.
pub fn generate(
    source: &RgbaImage,
    canvas: (u32, u32),
    config: &PipelineConfig,
    seed: u32,
) -> Option<RgbaImage> {
    let (width, height) = canvas;
    if width == 0 || height == 0 || source.width() == 0 || source.height() == 0 {
        return None;
    }

    let config = config.normalized();
    let base = prepare_base(source, width, height, config.pre_blur);

    let mut rng = SeededStream::new(seed);
    let mut output = RgbaImage::from_pixel(width, height, Rgba(Tone::Black.rgba()));

    render_streaks(&mut output, &base, &config, &mut rng);
    render_grid(&mut output, &base, &config, &mut rng);

    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_source(width: u32, height: u32) -> RgbaImage {
        let mut source = RgbaImage::new(width, height);
        for (x, y, pixel) in source.enumerate_pixels_mut() {
            let level = ((x * 7 + y * 13) % 256) as u8;
            *pixel = Rgba([level, level, level, 255]);
        }
        source
    }

    #[test]
    fn test_zero_area_canvas_is_a_no_op() {
        let source = gradient_source(8, 8);
        assert!(generate(&source, (0, 8), &PipelineConfig::default(), 1).is_none());
        assert!(generate(&source, (8, 0), &PipelineConfig::default(), 1).is_none());
    }

    #[test]
    fn test_empty_source_is_a_no_op() {
        let source = RgbaImage::new(0, 0);
        assert!(generate(&source, (8, 8), &PipelineConfig::default(), 1).is_none());
    }

    #[test]
    fn test_output_matches_canvas_dimensions() {
        let source = gradient_source(40, 30);
        let result = generate(&source, (21, 13), &PipelineConfig::default(), 5);
        let dims = result.map(|img| (img.width(), img.height()));
        assert_eq!(dims, Some((21, 13)));
    }

    #[test]
    fn test_output_contains_only_palette_tones() {
        let source = gradient_source(32, 32);
        let palette: Vec<[u8; 4]> = Tone::ALL.iter().map(|t| t.rgba()).collect();
        let result = generate(&source, (32, 32), &PipelineConfig::default(), 11);
        let all_palette = result.is_some_and(|img| img.pixels().all(|p| palette.contains(&p.0)));
        assert!(all_palette);
    }
}
