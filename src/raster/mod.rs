//! Raster preparation and painting primitives

/// Cover-crop and blur preparation of source images
pub mod cover;
/// Clipped rectangle painting
pub mod paint;
