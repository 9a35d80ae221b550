use crate::raster::alpha::{ALPHA_CUTOFF, AlphaMatrix};

/// Manhattan distance from every pixel to the nearest pixel whose opacity exceeds
/// [`ALPHA_CUTOFF`].
///
/// Built with a forward and a backward sweep, four neighbour reads per pixel. Set pixels hold 0.
/// When the source has no set pixel at all, every value is `width + height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    width: u32,
    height: u32,
    values: Vec<u32>,
}

impl DistanceField {
    /// Compute the field from the current values of `matrix`.
    pub fn from_matrix(matrix: &AlphaMatrix) -> Self {
        let (w, h) = (matrix.width() as usize, matrix.height() as usize);
        let cap = matrix.width() + matrix.height();
        let mut values = matrix.values().to_vec();

        // top-left to bottom-right: pull from west and north
        for y in 0..h {
            for x in 0..w {
                let i = y * w + x;
                if values[i] > ALPHA_CUTOFF {
                    values[i] = 0;
                    continue;
                }
                let mut dist = cap;
                if x > 0 {
                    dist = dist.min(values[i - 1] + 1);
                }
                if y > 0 {
                    dist = dist.min(values[i - w] + 1);
                }
                values[i] = dist;
            }
        }

        // bottom-right to top-left: pull from east and south
        for y in (0..h).rev() {
            for x in (0..w).rev() {
                let i = y * w + x;
                let mut dist = values[i];
                if x + 1 < w {
                    dist = dist.min(values[i + 1] + 1);
                }
                if y + 1 < h {
                    dist = dist.min(values[i + w] + 1);
                }
                values[i] = dist;
            }
        }

        Self {
            width: matrix.width(),
            height: matrix.height(),
            values,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Value stored for pixels with no set pixel anywhere in the grid.
    ///
    /// Real distances never reach it: the farthest two cells are `width + height - 2` apart.
    pub fn unreachable(&self) -> u32 {
        self.width + self.height
    }

    /// Distance at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        assert!(
            x < self.width && y < self.height,
            "distance field access ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Row-major view of every distance.
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/distance.rs"]
mod tests;
