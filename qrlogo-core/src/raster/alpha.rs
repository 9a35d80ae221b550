use std::sync::Arc;

use image::RgbaImage;

/// Largest representable opacity sample.
pub const MAX_ALPHA: u32 = 0xffff;

/// Opacity above which a pixel counts as "set" for distance and dilation purposes.
pub const ALPHA_CUTOFF: u32 = MAX_ALPHA / 2;

/// Dense grid of per-pixel opacity extracted from a source raster.
///
/// Samples are widened from 8 to 16 bits (`a * 257`) so they span `0..=MAX_ALPHA`. Storage is
/// `u32` so the same grid shape can hold distances larger than any opacity.
///
/// `Clone` copies the current values. [`AlphaMatrix::reloaded`] instead rebuilds from the backing
/// raster and discards any `set` calls made since construction.
#[derive(Clone, Debug)]
pub struct AlphaMatrix {
    source: Arc<RgbaImage>,
    width: u32,
    height: u32,
    values: Vec<u32>,
}

impl AlphaMatrix {
    /// Extract the alpha channel of `img`.
    pub fn from_image(img: &RgbaImage) -> Self {
        Self::from_shared(Arc::new(img.clone()))
    }

    /// Extract the alpha channel of an already shared raster without copying it.
    pub fn from_shared(source: Arc<RgbaImage>) -> Self {
        let (width, height) = source.dimensions();
        let values = source
            .pixels()
            .map(|px| u32::from(px.0[3]) * 257)
            .collect();
        Self {
            source,
            width,
            height,
            values,
        }
    }

    /// Fresh matrix rebuilt from the backing raster.
    pub fn reloaded(&self) -> Self {
        Self::from_shared(Arc::clone(&self.source))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Return `true` when `(x, y)` lies inside the matrix.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.values[self.offset(x, y)]
    }

    /// Value at `(x, y)`, or `None` when out of bounds.
    pub fn checked_get(&self, x: u32, y: u32) -> Option<u32> {
        self.contains(x, y).then(|| self.values[self.index(x, y)])
    }

    /// Overwrite the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: u32) {
        let idx = self.offset(x, y);
        self.values[idx] = value;
    }

    /// Row-major view of every value.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Raster the matrix was built from.
    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            self.contains(x, y),
            "alpha matrix access ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.index(x, y)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/alpha.rs"]
mod tests;
