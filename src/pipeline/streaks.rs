//! Streak layer: horizontal motion rectangles sampled from the base image

use image::RgbaImage;

use crate::io::configuration::{
    STREAK_MIN_LEN_RATIO, STREAK_OVERHANG_RATIO, STREAK_SAMPLE_SPAN_MAX, STREAK_SAMPLE_SPAN_MIN,
};
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::quantize::quantize;
use crate::pipeline::random::RandomStream;
use crate::raster::paint::fill_rect;

/// Draw `streak_count` horizontal rectangles over `canvas`
///
/// Each streak consumes five positional draws from `rng` — y, length, x,
/// thickness, sample offset — followed by the quantizer's draw, in that
/// exact order. Streaks may overhang the canvas slightly at both ends and
/// may overlap; later streaks paint over earlier ones. Thickness is
/// jittered around the configured value and clamped to at least 1.
pub fn render_streaks<R: RandomStream>(
    canvas: &mut RgbaImage,
    base: &RgbaImage,
    config: &PipelineConfig,
    rng: &mut R,
) {
    let width = canvas.width();
    let height = canvas.height();
    if width == 0 || height == 0 {
        return;
    }

    let w = f64::from(width);
    let h = f64::from(height);
    let thickness = f64::from(config.streak_thickness.max(1));

    for _ in 0..config.streak_count {
        let y = rng.range(0.0, h).floor() as i64;

        let len = rng
            .range(w * STREAK_MIN_LEN_RATIO, w * config.streak_max_len)
            .floor()
            .max(0.0) as i64;

        let overhang = (len as f64 * STREAK_OVERHANG_RATIO).floor();
        let on_canvas = (len as f64 * (1.0 - STREAK_OVERHANG_RATIO)).floor();
        let x = rng.range(-overhang, w - on_canvas).floor() as i64;

        let streak_h = rng.range(thickness - 1.0, thickness + 2.0).floor().max(1.0) as i64;

        // Sample one pixel inside the streak's span to pick its tone
        let offset = rng.range(STREAK_SAMPLE_SPAN_MIN, STREAK_SAMPLE_SPAN_MAX);
        let sx = (x + (len as f64 * offset).floor() as i64).clamp(0, i64::from(width) - 1);
        let sy = y.clamp(0, i64::from(height) - 1);

        let sample = base
            .get_pixel_checked(sx as u32, sy as u32)
            .map_or([0; 4], |p| p.0);
        let tone = quantize(sample, config.luma_gamma, rng);

        fill_rect(canvas, x, y, len, streak_h, tone.rgba());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::random::SeededStream;
    use crate::pipeline::tone::Tone;
    use image::Rgba;

    fn blank_canvas(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(Tone::Black.rgba()))
    }

    #[test]
    fn test_zero_streaks_leaves_canvas_untouched() {
        let base = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]));
        let mut canvas = blank_canvas(16, 16);
        let config = PipelineConfig {
            streak_count: 0,
            ..PipelineConfig::default()
        };

        render_streaks(&mut canvas, &base, &config, &mut SeededStream::new(1));
        assert!(canvas.pixels().all(|p| p.0 == Tone::Black.rgba()));
    }

    #[test]
    fn test_streaks_paint_only_palette_tones() {
        let base = RgbaImage::from_pixel(32, 32, Rgba([180, 140, 90, 255]));
        let mut canvas = blank_canvas(32, 32);
        let config = PipelineConfig {
            streak_count: 20,
            ..PipelineConfig::default()
        };

        render_streaks(&mut canvas, &base, &config, &mut SeededStream::new(7));
        let palette: Vec<[u8; 4]> = Tone::ALL.iter().map(|t| t.rgba()).collect();
        assert!(canvas.pixels().all(|p| palette.contains(&p.0)));
    }

    #[test]
    fn test_streaks_are_deterministic_for_a_seed() {
        let base = RgbaImage::from_pixel(24, 24, Rgba([120, 120, 120, 255]));
        let config = PipelineConfig {
            streak_count: 12,
            ..PipelineConfig::default()
        };

        let mut first = blank_canvas(24, 24);
        render_streaks(&mut first, &base, &config, &mut SeededStream::new(99));
        let mut second = blank_canvas(24, 24);
        render_streaks(&mut second, &base, &config, &mut SeededStream::new(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_white_base_streaks_on_tiny_canvas_stay_in_bounds() {
        // A 1x1 canvas degenerates every draw range; must not crash
        let base = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 255]));
        let mut canvas = blank_canvas(1, 1);
        let config = PipelineConfig {
            streak_count: 5,
            ..PipelineConfig::default()
        };
        render_streaks(&mut canvas, &base, &config, &mut SeededStream::new(3));
    }
}
