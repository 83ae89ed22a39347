//! Blueprint pixel access.
//!
//! [`PixelSource`] is the seam between the decoded image and extraction: anything
//! that can report its size and the RGBA value of a pixel can be loaded.
//! [`PixelGrid`] is the classified working copy that the extraction passes read
//! and that gate extraction erases its pixels from.

use image::RgbaImage;

use super::color::{ColorCategory, classify};
use crate::common::PixelCoord;

/// A 2D grid of RGBA pixels.
pub trait PixelSource {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Returns the RGBA value at `(x, y)`. Only called with in-bounds coordinates.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

/// Classified working copy of a blueprint.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<ColorCategory>,
}

impl PixelGrid {
    /// Classifies every pixel of `source`.
    pub fn from_source<S: PixelSource + ?Sized>(source: &S) -> Self {
        let (width, height) = source.dimensions();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let [r, g, b, _] = source.rgba(x, y);
                cells.push(classify(r, g, b));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns `(width, height)`.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the flat row-major index of `coord`, or `None` when out of bounds.
    #[inline]
    pub const fn index_of(&self, coord: PixelCoord) -> Option<usize> {
        if coord.x < self.width && coord.y < self.height {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Category at `coord`; out-of-bounds pixels read as `Space`.
    #[inline]
    pub fn get(&self, coord: PixelCoord) -> ColorCategory {
        self.index_of(coord)
            .map_or(ColorCategory::Space, |i| self.cells[i])
    }

    /// Overwrites `coord` with `Space`. Out-of-bounds coordinates are ignored.
    pub fn erase(&mut self, coord: PixelCoord) {
        if let Some(i) = self.index_of(coord) {
            self.cells[i] = ColorCategory::Space;
        }
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = PixelCoord> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| PixelCoord::new(x, y)))
    }
}
