use serde::{Deserialize, Serialize};

/// A 2D heightfield storing elevation values as f32, row-major.
///
/// Convention: `get(x, y)` treats the first index as the row, so a consumer
/// iterating rows walks the x axis of the synthesized terrain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightField {
    /// Row-major elevation values.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl HeightField {
    /// Create a new HeightField filled with the given value.
    pub fn new(width: usize, height: usize, fill: f32) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    /// Create a flat (zero-elevation) square HeightField, `dim` cells per side.
    pub fn flat(dim: usize) -> Self {
        Self::new(dim, dim, 0.0)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    /// Sample the field at normalized coordinates `(u, v) ∈ [0, 1]²` using
    /// bilinear interpolation. Returns None outside the unit square.
    pub fn sample(&self, u: f32, v: f32) -> Option<f32> {
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }

        let fx = u * (self.width - 1) as f32;
        let fy = v * (self.height - 1) as f32;

        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let tx = fx - x0 as f32;
        let ty = fy - y0 as f32;

        let v00 = self.get(y0, x0);
        let v10 = self.get(y0, x1);
        let v01 = self.get(y1, x0);
        let v11 = self.get(y1, x1);

        let val = v00 * (1.0 - tx) * (1.0 - ty)
            + v10 * tx * (1.0 - ty)
            + v01 * (1.0 - tx) * ty
            + v11 * tx * ty;

        Some(val)
    }

    pub fn min_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_elevation(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_corners_return_exact_values() {
        let mut hf = HeightField::flat(4);
        hf.set(0, 0, 10.0);
        hf.set(0, 3, 20.0);
        hf.set(3, 0, 30.0);
        hf.set(3, 3, 40.0);

        assert_abs_diff_eq!(hf.sample(0.0, 0.0).unwrap(), 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(hf.sample(1.0, 0.0).unwrap(), 20.0, epsilon = 1e-5);
        assert_abs_diff_eq!(hf.sample(0.0, 1.0).unwrap(), 30.0, epsilon = 1e-5);
        assert_abs_diff_eq!(hf.sample(1.0, 1.0).unwrap(), 40.0, epsilon = 1e-5);
    }

    #[test]
    fn sample_interpolates_between_cells() {
        let mut hf = HeightField::new(2, 2, 0.0);
        hf.set(0, 1, 4.0);
        hf.set(1, 0, 4.0);
        // Center of a 2x2 field is the mean of all four corners.
        assert_abs_diff_eq!(hf.sample(0.5, 0.5).unwrap(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn sample_out_of_bounds_returns_none() {
        let hf = HeightField::flat(4);
        assert!(hf.sample(-0.1, 0.5).is_none());
        assert!(hf.sample(0.5, 1.1).is_none());
    }

    #[test]
    fn min_max_track_extremes() {
        let mut hf = HeightField::flat(3);
        hf.set(1, 1, -2.5);
        hf.set(2, 0, 7.0);
        assert_eq!(hf.min_elevation(), -2.5);
        assert_eq!(hf.max_elevation(), 7.0);
    }
}
