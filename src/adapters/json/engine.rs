//! JSON engine session, design handle and raster surface

use super::library::JsonLibraryConnection;
use super::models::DesignDocument;
use crate::domain::{EngineError, Result};
use crate::engine::{
    BitmapSurface, DesignEngine, DesignStatistics, EmbDesign, FileFormat, ImageFormat,
    LibraryConnection, RenderBounds, ThreadPalette,
};
use image::{Rgba, RgbaImage};
use std::any::Any;
use std::path::Path;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OUTLINE: Rgba<u8> = Rgba([200, 200, 200, 255]);
const STITCH: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Engine session backed by JSON design documents
#[derive(Debug, Default)]
pub struct JsonEngine;

impl JsonEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DesignEngine for JsonEngine {
    fn open_design(&self, path: &Path, format: FileFormat) -> Result<Box<dyn EmbDesign>> {
        if format != FileFormat::Auto {
            let actual = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(FileFormat::from_extension);
            if actual != Some(format) {
                return Err(EngineError::OpenFailed {
                    path: path.display().to_string(),
                    message: format!("not a {format} file"),
                }
                .into());
            }
        }

        let document = DesignDocument::load(path)?;
        tracing::debug!(path = %path.display(), "Opened design");
        Ok(Box::new(JsonDesign::new(path.display().to_string(), document)))
    }

    fn new_image(&self, width: u32, height: u32) -> Result<Box<dyn BitmapSurface>> {
        Ok(Box::new(RasterSurface::new(width, height)))
    }

    fn new_library_connection(&self) -> Result<Box<dyn LibraryConnection>> {
        Ok(Box::new(JsonLibraryConnection::new()))
    }
}

/// An open JSON design
#[derive(Debug)]
pub struct JsonDesign {
    source: String,
    document: DesignDocument,
}

impl JsonDesign {
    pub fn new(source: String, document: DesignDocument) -> Self {
        Self { source, document }
    }

    /// Extent of the stitch path, falling back to the declared size
    fn extent(&self) -> (i32, i32, i32, i32) {
        let points = &self.document.path;
        if points.is_empty() {
            return (0, 0, self.document.width, self.document.height);
        }
        let min_x = points.iter().map(|p| p[0]).min().unwrap_or(0);
        let min_y = points.iter().map(|p| p[1]).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p[0]).max().unwrap_or(0);
        let max_y = points.iter().map(|p| p[1]).max().unwrap_or(0);
        (min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

impl EmbDesign for JsonDesign {
    fn width(&self) -> i32 {
        self.document.width
    }

    fn height(&self) -> i32 {
        self.document.height
    }

    fn num_stitches(&self) -> u32 {
        self.document.stitches
    }

    fn needle_sequence(&self) -> &[u16] {
        &self.document.needle_sequence
    }

    fn thread_palettes(&self) -> &[ThreadPalette] {
        &self.document.palettes
    }

    fn statistics(&self) -> Result<DesignStatistics> {
        Ok(DesignStatistics {
            color_changes: self.document.color_changes,
        })
    }

    fn render(&self, surface: &mut dyn BitmapSurface, bounds: RenderBounds) -> Result<()> {
        let raster = surface
            .as_any_mut()
            .downcast_mut::<RasterSurface>()
            .ok_or_else(|| {
                EngineError::RenderFailed("surface was not created by this engine".to_string())
            })?;

        if bounds.x + bounds.width > raster.width() || bounds.y + bounds.height > raster.height()
        {
            return Err(EngineError::RenderFailed(format!(
                "bounds {}x{} at ({}, {}) exceed {}x{} surface",
                bounds.width,
                bounds.height,
                bounds.x,
                bounds.y,
                raster.width(),
                raster.height()
            ))
            .into());
        }

        let (origin_x, origin_y, extent_w, extent_h) = self.extent();
        if extent_w <= 0 || extent_h <= 0 || bounds.width == 0 || bounds.height == 0 {
            tracing::debug!(design = %self.source, "Nothing to render");
            return Ok(());
        }

        let scale = f64::min(
            f64::from(bounds.width - 1) / f64::from(extent_w),
            f64::from(bounds.height - 1) / f64::from(extent_h),
        );
        let project = |x: i32, y: i32| -> (i64, i64) {
            (
                i64::from(bounds.x) + (f64::from(x - origin_x) * scale).round() as i64,
                i64::from(bounds.y) + (f64::from(y - origin_y) * scale).round() as i64,
            )
        };

        let (left, top) = project(origin_x, origin_y);
        let (right, bottom) = project(origin_x + extent_w, origin_y + extent_h);
        raster.line((left, top), (right, top), OUTLINE);
        raster.line((right, top), (right, bottom), OUTLINE);
        raster.line((right, bottom), (left, bottom), OUTLINE);
        raster.line((left, bottom), (left, top), OUTLINE);

        for pair in self.document.path.windows(2) {
            let from = project(pair[0][0], pair[0][1]);
            let to = project(pair[1][0], pair[1][1]);
            raster.line(from, to, STITCH);
        }

        Ok(())
    }

    fn save(&self, path: &Path, format: FileFormat) -> Result<()> {
        match format {
            FileFormat::Pcf | FileFormat::Pxf => {
                self.document.store(path)?;
                tracing::debug!(design = %self.source, path = %path.display(), %format, "Saved design");
                Ok(())
            }
            FileFormat::Auto => Err(EngineError::UnsupportedFormat(
                "a concrete format is required when saving".to_string(),
            )
            .into()),
        }
    }
}

/// RGBA raster surface
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    /// Read back a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                *pixel = color;
            }
        }
    }

    // Bresenham
    fn line(&mut self, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl BitmapSurface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn save(&self, path: &Path, format: ImageFormat) -> Result<()> {
        let image_format = match format {
            ImageFormat::Png => image::ImageFormat::Png,
        };
        self.image
            .save_with_format(path, image_format)
            .map_err(|e| EngineError::SaveFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
