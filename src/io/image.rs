//! PNG source loading and result export

use std::path::Path;

use image::RgbaImage;

use crate::io::error::{PipelineError, Result};

/// Load a source image from disk and convert it to RGBA
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PipelineError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Export a result raster as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(result: &RgbaImage, output_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    result
        .save(output_path)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
