//! Area-averaging box downscale of the base image into a per-tile grid

use image::RgbaImage;
use ndarray::Array2;

/// Box-downscale `base` to a `rows × cols` grid of average colors
///
/// Cell `(r, c)` holds the channel-wise mean of the pixel block
/// `[c·W/cols, (c+1)·W/cols) × [r·H/rows, (r+1)·H/rows)`. Integer block
/// boundaries keep every cell non-empty whenever `cols ≤ W` and
/// `rows ≤ H`; degenerate requests are clamped instead of failing. No
/// randomness is consumed.
pub fn average_grid(base: &RgbaImage, cols: u32, rows: u32) -> Array2<[u8; 4]> {
    let width = base.width();
    let height = base.height();
    let cols = cols.clamp(1, width.max(1));
    let rows = rows.clamp(1, height.max(1));

    let mut grid = Array2::from_elem((rows as usize, cols as usize), [0u8; 4]);
    if width == 0 || height == 0 {
        return grid;
    }

    for row in 0..rows {
        let y0 = block_start(row, height, rows);
        let y1 = block_start(row + 1, height, rows).max(y0 + 1);
        for col in 0..cols {
            let x0 = block_start(col, width, cols);
            let x1 = block_start(col + 1, width, cols).max(x0 + 1);

            let average = average_block(base, x0, x1, y0, y1);
            if let Some(cell) = grid.get_mut((row as usize, col as usize)) {
                *cell = average;
            }
        }
    }

    grid
}

/// First pixel coordinate of block `index` when dividing `extent` into `count`
const fn block_start(index: u32, extent: u32, count: u32) -> u32 {
    ((index as u64 * extent as u64) / count as u64) as u32
}

fn average_block(base: &RgbaImage, x0: u32, x1: u32, y0: u32, y1: u32) -> [u8; 4] {
    let mut sums = [0u64; 4];
    let mut count = 0u64;

    for y in y0..y1 {
        for x in x0..x1 {
            if let Some(pixel) = base.get_pixel_checked(x, y) {
                let [r, g, b, a] = pixel.0;
                sums[0] += u64::from(r);
                sums[1] += u64::from(g);
                sums[2] += u64::from(b);
                sums[3] += u64::from(a);
                count += 1;
            }
        }
    }

    if count == 0 {
        return [0; 4];
    }

    [
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
        (sums[3] / count) as u8,
    ]
}
