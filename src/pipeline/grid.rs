//! Grid layer: quantized average-color tiles with a white anchor

use image::RgbaImage;

use crate::pipeline::config::PipelineConfig;
use crate::pipeline::quantize::quantize;
use crate::pipeline::random::RandomStream;
use crate::pipeline::sampler::average_grid;
use crate::pipeline::tone::Tone;
use crate::raster::paint::fill_rect;

/// One painted grid tile, inset by the configured gap and clamped to the
/// canvas so it never exceeds the bounds; width and height are at least 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Left edge on the canvas
    pub x: u32,
    /// Top edge on the canvas
    pub y: u32,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

/// Paint the tile grid over `canvas` and return the anchor tile
///
/// The canvas is divided into `⌈W/gs⌉ × ⌈H/gs⌉` cells; each cell's tile is
/// painted with the quantized tone of its box-averaged sample, consuming
/// draws from `rng` in row-major cell order. The topmost tile — minimal y,
/// ties broken by larger height, then by first encountered — is repainted
/// pure white after the full pass. Returns `None` only for an empty canvas.
pub fn render_grid<R: RandomStream>(
    canvas: &mut RgbaImage,
    base: &RgbaImage,
    config: &PipelineConfig,
    rng: &mut R,
) -> Option<Tile> {
    let width = canvas.width();
    let height = canvas.height();
    if width == 0 || height == 0 {
        return None;
    }

    let gs = config.grid_size.max(2);
    let gap = config.grid_gap;
    let cols = width.div_ceil(gs);
    let rows = height.div_ceil(gs);

    let samples = average_grid(base, cols, rows);

    let mut anchor: Option<Tile> = None;
    for row in 0..rows {
        for col in 0..cols {
            let tile = inset_tile(col, row, gs, gap, width, height);

            let sample = samples
                .get((row as usize, col as usize))
                .copied()
                .unwrap_or([0; 4]);
            let tone = quantize(sample, config.luma_gamma, rng);
            paint_tile(canvas, tile, tone);

            let is_higher = anchor.is_none_or(|best| {
                tile.y < best.y || (tile.y == best.y && tile.height > best.height)
            });
            if is_higher {
                anchor = Some(tile);
            }
        }
    }

    // The anchor is always forced to pure white, whatever it sampled
    if let Some(tile) = anchor {
        paint_tile(canvas, tile, Tone::White);
    }

    anchor
}

/// Compute cell `(col, row)`'s tile rectangle, inset by half the gap
fn inset_tile(col: u32, row: u32, gs: u32, gap: u32, width: u32, height: u32) -> Tile {
    let inset = u64::from(gap) / 2;
    let x = (u64::from(col) * u64::from(gs) + inset).min(u64::from(width.saturating_sub(1))) as u32;
    let y =
        (u64::from(row) * u64::from(gs) + inset).min(u64::from(height.saturating_sub(1))) as u32;
    let tile_w = gs.saturating_sub(gap).min(width - x).max(1);
    let tile_h = gs.saturating_sub(gap).min(height - y).max(1);
    Tile {
        x,
        y,
        width: tile_w,
        height: tile_h,
    }
}

fn paint_tile(canvas: &mut RgbaImage, tile: Tile, tone: Tone) {
    fill_rect(
        canvas,
        i64::from(tile.x),
        i64::from(tile.y),
        i64::from(tile.width),
        i64::from(tile.height),
        tone.rgba(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::random::SeededStream;
    use image::Rgba;

    fn mid_gray_base(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([128, 128, 128, 255]))
    }

    fn white_pixel_count(canvas: &RgbaImage) -> usize {
        canvas
            .pixels()
            .filter(|p| p.0 == Tone::White.rgba())
            .count()
    }

    #[test]
    fn test_single_cell_grid_is_forced_white() {
        let base = mid_gray_base(4, 4);
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba(Tone::Black.rgba()));
        let config = PipelineConfig {
            grid_size: 4,
            grid_gap: 0,
            luma_gamma: 0.6,
            ..PipelineConfig::default()
        };

        let anchor = render_grid(&mut canvas, &base, &config, &mut SeededStream::new(1));
        assert_eq!(
            anchor,
            Some(Tile {
                x: 0,
                y: 0,
                width: 4,
                height: 4
            })
        );
        assert_eq!(white_pixel_count(&canvas), 16);
    }

    #[test]
    fn test_oversized_grid_size_still_gets_anchor() {
        let base = mid_gray_base(5, 3);
        let mut canvas = RgbaImage::from_pixel(5, 3, Rgba(Tone::Black.rgba()));
        let config = PipelineConfig {
            grid_size: 100,
            grid_gap: 0,
            ..PipelineConfig::default()
        };

        let anchor = render_grid(&mut canvas, &base, &config, &mut SeededStream::new(1));
        assert_eq!(
            anchor,
            Some(Tile {
                x: 0,
                y: 0,
                width: 5,
                height: 3
            })
        );
        assert_eq!(white_pixel_count(&canvas), 15);
    }

    #[test]
    fn test_anchor_is_topmost_row_first_cell() {
        // Uniform tiles: all top-row tiles share y and height, so the
        // first encountered in row-major order wins the tie-break
        let base = mid_gray_base(8, 8);
        let mut canvas = RgbaImage::from_pixel(8, 8, Rgba(Tone::Black.rgba()));
        let config = PipelineConfig {
            grid_size: 4,
            grid_gap: 2,
            ..PipelineConfig::default()
        };

        let anchor = render_grid(&mut canvas, &base, &config, &mut SeededStream::new(9));
        assert_eq!(
            anchor,
            Some(Tile {
                x: 1,
                y: 1,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_anchor_keeps_full_height_top_row() {
        // 8 wide, 5 tall with gs=4: bottom row tiles are clamped shorter,
        // top row keeps full height, so the anchor stays in the top row
        let base = mid_gray_base(8, 5);
        let mut canvas = RgbaImage::from_pixel(8, 5, Rgba(Tone::Black.rgba()));
        let config = PipelineConfig {
            grid_size: 4,
            grid_gap: 0,
            ..PipelineConfig::default()
        };

        let anchor = render_grid(&mut canvas, &base, &config, &mut SeededStream::new(3));
        let tile = anchor.unwrap_or(Tile {
            x: 9,
            y: 9,
            width: 0,
            height: 0,
        });
        assert_eq!(tile.y, 0);
        assert_eq!(tile.height, 4);
    }

    #[test]
    fn test_tiles_never_exceed_canvas() {
        let base = mid_gray_base(10, 7);
        let mut canvas = RgbaImage::from_pixel(10, 7, Rgba(Tone::Black.rgba()));
        let config = PipelineConfig {
            grid_size: 4,
            grid_gap: 12,
            ..PipelineConfig::default()
        };

        // A gap wider than the cell collapses tiles to 1x1 but must not
        // push them outside the canvas or crash
        let anchor = render_grid(&mut canvas, &base, &config, &mut SeededStream::new(5));
        assert!(anchor.is_some());
        if let Some(tile) = anchor {
            assert!(tile.x + tile.width <= 10);
            assert!(tile.y + tile.height <= 7);
            assert!(tile.width >= 1 && tile.height >= 1);
        }
    }

    #[test]
    fn test_empty_canvas_yields_no_anchor() {
        let base = mid_gray_base(4, 4);
        let mut canvas = RgbaImage::new(0, 0);
        let config = PipelineConfig::default();
        assert_eq!(
            render_grid(&mut canvas, &base, &config, &mut SeededStream::new(1)),
            None
        );
    }
}
