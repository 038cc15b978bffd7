//! Frame capture and animated GIF export for motion mode

use image::{Frame, RgbaImage};

use crate::io::error::{PipelineError, Result};

/// Collects regenerated frames and encodes them as an animated GIF
///
/// Each captured frame is one completed pipeline run; the frame delay
/// matches the regeneration cadence so playback speed mirrors the live
/// animation.
pub struct MotionCapture {
    frames: Vec<RgbaImage>,
    frame_delay_ms: u32,
}

impl MotionCapture {
    /// Create a capture expecting roughly `expected_frames` frames
    pub fn new(frame_delay_ms: u32, expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
            frame_delay_ms,
        }
    }

    /// Record one completed frame
    pub fn record_frame(&mut self, frame: RgbaImage) {
        self.frames.push(frame);
    }

    /// Number of frames captured so far
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode the captured frames as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - The parent directory or file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str) -> Result<()> {
        if self.frames.is_empty() {
            return Err(PipelineError::InvalidSourceData {
                reason: "No frames captured for animation export".to_string(),
            });
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| PipelineError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let delay = image::Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        let frames = self
            .frames
            .iter()
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay));

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| PipelineError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_empty_capture_refuses_export() {
        let capture = MotionCapture::new(140, 4);
        let result = capture.export_gif("out/should_not_exist.gif");
        assert!(result.is_err());
    }

    #[test]
    fn test_export_writes_gif_file() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("motion.gif");
        let Some(path_str) = path.to_str() else {
            return;
        };

        let mut capture = MotionCapture::new(140, 2);
        capture.record_frame(RgbaImage::from_pixel(8, 8, Rgba([20, 20, 20, 255])));
        capture.record_frame(RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255])));
        assert_eq!(capture.frame_count(), 2);

        assert!(capture.export_gif(path_str).is_ok());
        assert!(path.exists());
    }
}
