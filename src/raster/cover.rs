//! Cover-crop and blur preparation of the source image

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Scale-and-center-crop `source` to exactly fill `width × height`
///
/// The scale factor is the larger of the two axis ratios, so the scaled
/// image always covers the canvas; the excess along the longer axis is
/// cropped symmetrically. Aspect ratio is preserved, full source content
/// is not. Zero-dimension inputs yield an empty canvas-sized image.
pub fn cover_crop(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if width == 0 || height == 0 || source.width() == 0 || source.height() == 0 {
        return RgbaImage::new(width, height);
    }

    if source.width() == width && source.height() == height {
        return source.clone();
    }

    let scale_x = f64::from(width) / f64::from(source.width());
    let scale_y = f64::from(height) / f64::from(source.height());
    let scale = scale_x.max(scale_y);

    let scaled_w = ((f64::from(source.width()) * scale).ceil() as u32).max(width);
    let scaled_h = ((f64::from(source.height()) * scale).ceil() as u32).max(height);

    let scaled = imageops::resize(source, scaled_w, scaled_h, FilterType::Triangle);

    let offset_x = (scaled_w - width) / 2;
    let offset_y = (scaled_h - height) / 2;
    imageops::crop_imm(&scaled, offset_x, offset_y, width, height).to_image()
}

/// Produce the base image for one pipeline run
///
/// Cover-crops the source to the canvas, then applies a Gaussian blur of
/// `blur_radius` when positive. The result is owned by exactly one run
/// and discarded afterwards.
pub fn prepare_base(source: &RgbaImage, width: u32, height: u32, blur_radius: f64) -> RgbaImage {
    let base = cover_crop(source, width, height);
    if blur_radius > 0.0 {
        imageops::blur(&base, blur_radius as f32)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_cover_crop_yields_canvas_dimensions() {
        let source = RgbaImage::from_pixel(64, 48, Rgba([10, 20, 30, 255]));
        for (w, h) in [(32, 32), (100, 10), (7, 91), (64, 48)] {
            let cropped = cover_crop(&source, w, h);
            assert_eq!((cropped.width(), cropped.height()), (w, h));
        }
    }

    #[test]
    fn test_cover_crop_same_size_is_identity() {
        let mut source = RgbaImage::new(3, 3);
        source.put_pixel(1, 1, Rgba([200, 100, 50, 255]));
        let cropped = cover_crop(&source, 3, 3);
        assert_eq!(cropped, source);
    }

    #[test]
    fn test_cover_crop_preserves_solid_color() {
        let source = RgbaImage::from_pixel(10, 40, Rgba([128, 128, 128, 255]));
        let cropped = cover_crop(&source, 20, 20);
        for pixel in cropped.pixels() {
            assert_eq!(pixel.0, [128, 128, 128, 255]);
        }
    }

    #[test]
    fn test_cover_crop_zero_canvas_is_empty() {
        let source = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let cropped = cover_crop(&source, 0, 5);
        assert_eq!((cropped.width(), cropped.height()), (0, 5));
    }

    #[test]
    fn test_prepare_base_skips_blur_at_zero_radius() {
        let source = RgbaImage::from_pixel(6, 6, Rgba([77, 77, 77, 255]));
        let base = prepare_base(&source, 6, 6, 0.0);
        assert_eq!(base, source);
    }

    #[test]
    fn test_prepare_base_blur_keeps_solid_color_stable() {
        let source = RgbaImage::from_pixel(6, 6, Rgba([77, 77, 77, 255]));
        let base = prepare_base(&source, 6, 6, 2.0);
        assert_eq!((base.width(), base.height()), (6, 6));
        let center = base.get_pixel(3, 3).0;
        assert!(center[0].abs_diff(77) <= 1);
    }
}
