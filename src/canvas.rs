//! Pixel-grid capability consumed by the codec.
//!
//! The engine only needs get/set/size plus whole-canvas quarter rotations
//! and a horizontal mirror, so everything is written against the [`Canvas`]
//! trait and any in-memory grid can stand in during tests. [`ImageCanvas`]
//! is the shipped implementation, backed by `image::RgbImage`. Alpha is
//! dropped on load; use lossless formats (PNG, BMP) or the embedded bits are
//! destroyed on save.

use std::io::Cursor;
use std::path::Path;

use image::{imageops, DynamicImage, ImageFormat, RgbImage};
use thiserror::Error;

use crate::color::Color;

/// Quarter-turn counter-clockwise rotation. Bounds expand on 90/270.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Ccw90,
    Ccw180,
    Ccw270,
}

/// Mutable width×height grid of [`Color`], row/column addressable.
///
/// A canvas is exclusively owned by the calling workflow for the duration of
/// one encode or decode; the codec never retains references after returning.
pub trait Canvas: Sized {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    fn get(&self, x: u32, y: u32) -> Color;

    fn set(&mut self, x: u32, y: u32, color: Color);

    /// A new canvas of the given size with every pixel black.
    fn blank(width: u32, height: u32) -> Self;

    /// A rotated copy, counter-clockwise.
    fn rotated(&self, rotation: Rotation) -> Self;

    /// A copy flipped across the vertical axis (left-right mirror).
    fn flipped(&self) -> Self;
}

/// Errors from loading or persisting an [`ImageCanvas`].
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Image load error: {0}")]
    Load(String),

    #[error("Image save error: {0}")]
    Save(String),
}

/// [`Canvas`] implementation over an 8-bit RGB image buffer.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    image: RgbImage,
}

impl ImageCanvas {
    /// Loads a canvas from a file path, dropping any alpha channel.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CanvasError> {
        let image = image::open(path).map_err(|e| CanvasError::Load(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Loads a canvas from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CanvasError> {
        let image =
            image::load_from_memory(bytes).map_err(|e| CanvasError::Load(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self { image: image.to_rgb8() }
    }

    /// Saves the canvas; the format is inferred from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        self.image.save(path).map_err(|e| CanvasError::Save(e.to_string()))
    }

    /// Encodes the canvas as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, CanvasError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| CanvasError::Save(e.to_string()))?;
        Ok(bytes)
    }

    pub fn inner(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_inner(self) -> RgbImage {
        self.image
    }
}

impl Canvas for ImageCanvas {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn get(&self, x: u32, y: u32) -> Color {
        let pixel = self.image.get_pixel(x, y);
        Color::new(pixel[0], pixel[1], pixel[2])
    }

    fn set(&mut self, x: u32, y: u32, color: Color) {
        self.image.put_pixel(x, y, image::Rgb([color.r, color.g, color.b]));
    }

    fn blank(width: u32, height: u32) -> Self {
        Self { image: RgbImage::new(width, height) }
    }

    fn rotated(&self, rotation: Rotation) -> Self {
        // imageops rotations are clockwise
        let image = match rotation {
            Rotation::None => self.image.clone(),
            Rotation::Ccw90 => imageops::rotate270(&self.image),
            Rotation::Ccw180 => imageops::rotate180(&self.image),
            Rotation::Ccw270 => imageops::rotate90(&self.image),
        };
        Self { image }
    }

    fn flipped(&self) -> Self {
        Self { image: imageops::flip_horizontal(&self.image) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x3 canvas with pixel (x, y) tagged as Color(x, y, 0).
    fn tagged_canvas() -> ImageCanvas {
        let mut canvas = ImageCanvas::blank(2, 3);
        for y in 0..3 {
            for x in 0..2 {
                canvas.set(x, y, Color::new(x as u8, y as u8, 0));
            }
        }
        canvas
    }

    #[test]
    fn test_blank_dimensions_and_fill() {
        let canvas = ImageCanvas::blank(4, 7);
        assert_eq!(canvas.dimensions(), (4, 7));
        assert_eq!(canvas.get(3, 6), Color::new(0, 0, 0));
    }

    #[test]
    fn test_rotate_ccw90_geometry() {
        let canvas = tagged_canvas();
        let rotated = canvas.rotated(Rotation::Ccw90);
        // bounds expand: 2x3 becomes 3x2
        assert_eq!(rotated.dimensions(), (3, 2));
        // the right column (x = 1) becomes the top row
        assert_eq!(rotated.get(0, 0), Color::new(1, 0, 0));
        assert_eq!(rotated.get(2, 0), Color::new(1, 2, 0));
    }

    #[test]
    fn test_rotate_ccw180_geometry() {
        let canvas = tagged_canvas();
        let rotated = canvas.rotated(Rotation::Ccw180);
        assert_eq!(rotated.dimensions(), (2, 3));
        assert_eq!(rotated.get(0, 0), Color::new(1, 2, 0));
        assert_eq!(rotated.get(1, 2), Color::new(0, 0, 0));
    }

    #[test]
    fn test_rotate_ccw270_geometry() {
        let canvas = tagged_canvas();
        let rotated = canvas.rotated(Rotation::Ccw270);
        assert_eq!(rotated.dimensions(), (3, 2));
        // the left column becomes the top row
        assert_eq!(rotated.get(0, 0), Color::new(0, 2, 0));
        assert_eq!(rotated.get(2, 0), Color::new(0, 0, 0));
    }

    #[test]
    fn test_flip_geometry() {
        let canvas = tagged_canvas();
        let flipped = canvas.flipped();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.get(0, 0), Color::new(1, 0, 0));
        assert_eq!(flipped.get(1, 2), Color::new(0, 2, 0));
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let canvas = tagged_canvas();
        let mut turned = canvas.rotated(Rotation::Ccw90);
        for _ in 0..3 {
            turned = turned.rotated(Rotation::Ccw90);
        }
        assert_eq!(turned.dimensions(), canvas.dimensions());
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(turned.get(x, y), canvas.get(x, y));
            }
        }
    }
}
