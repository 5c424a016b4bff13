//! Diamond-Square midpoint displacement.
//!
//! Recursive subdivision of a square grid: each level writes the center of
//! every sub-square from the average of its four corners plus a uniform
//! perturbation, then fills the half-stride midpoints the same way, then
//! recurses into the four quadrants. The perturbation bound stays constant
//! across levels (no per-level decay), which yields rougher terrain than the
//! textbook variant.

use rand::Rng;

use crate::heightfield::HeightField;

/// Elevation the four corner seeds are pinned to before subdivision.
const BASE_ELEVATION: f32 = 0.0;

/// Synthesize a `(size+1) x (size+1)` heightfield.
///
/// `roughness` bounds the uniform random offset added at every subdivision
/// step; it must be non-negative. Elevations are unbounded — rescaling to a
/// target range is the caller's business.
///
/// Power-of-two sizes subdivide cleanly down to unit squares. Any other size
/// stops recursing once `size / 2 < 1`, leaving cells no subdivision level
/// reaches at their zero initialization. That partial fill is well-defined
/// and documented rather than rejected.
pub fn generate_height_map<R: Rng>(size: usize, roughness: f32, rng: &mut R) -> HeightField {
    let mut field = HeightField::flat(size + 1);

    // Corner seeds.
    field.set(0, 0, BASE_ELEVATION);
    field.set(0, size, BASE_ELEVATION);
    field.set(size, 0, BASE_ELEVATION);
    field.set(size, size, BASE_ELEVATION);

    subdivide(&mut field, 0, 0, size, roughness, rng);

    // The square step writes each cell's center at (x+half, y+half), which
    // at the top level lands on the far corner (size, size). Re-pin all four
    // seeds so the corner contract holds for every synthesis.
    field.set(0, 0, BASE_ELEVATION);
    field.set(0, size, BASE_ELEVATION);
    field.set(size, 0, BASE_ELEVATION);
    field.set(size, size, BASE_ELEVATION);

    field
}

/// One subdivision level over the sub-square at `(origin_x, origin_y)`.
fn subdivide<R: Rng>(
    field: &mut HeightField,
    origin_x: usize,
    origin_y: usize,
    size: usize,
    roughness: f32,
    rng: &mut R,
) {
    let half = size / 2;
    if half < 1 {
        return;
    }

    let max = field.width - 1;

    // Diamond step: centers at half-stride, averaging the four diagonal
    // corners. Reads past the grid edge are clamped back to the boundary.
    for x in (origin_x + half..origin_x + size).step_by(half) {
        for y in (origin_y + half..origin_y + size).step_by(half) {
            let x0 = x - half;
            let x1 = (x + half).min(max);
            let y0 = y - half;
            let y1 = (y + half).min(max);

            let avg = (field.get(x0, y0)
                + field.get(x0, y1)
                + field.get(x1, y0)
                + field.get(x1, y1))
                / 4.0;

            field.set(x, y, avg + rng.gen_range(-roughness..=roughness));
        }
    }

    // Square step: walk the lattice at half-stride and write each cell's
    // center from its four corners. A cell whose far corner falls off the
    // grid is skipped, leaving that midpoint unset.
    for x in (origin_x..origin_x + size).step_by(half) {
        for y in (origin_y..origin_y + size).step_by(half) {
            let x1 = x + half;
            let y1 = y + half;
            if x1 > max || y1 > max {
                continue;
            }

            let avg = (field.get(x, y)
                + field.get(x, y1)
                + field.get(x1, y)
                + field.get(x1, y1))
                / 4.0;

            field.set(x1, y1, avg + rng.gen_range(-roughness..=roughness));
        }
    }

    subdivide(field, origin_x, origin_y, half, roughness, rng);
    subdivide(field, origin_x + half, origin_y, half, roughness, rng);
    subdivide(field, origin_x, origin_y + half, half, roughness, rng);
    subdivide(field, origin_x + half, origin_y + half, half, roughness, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn corners_stay_at_base_elevation() {
        // The far corner in particular is a square-step write target at
        // every recursion level and must still come back pinned.
        for (size, seed) in [(8usize, 42u64), (16, 7), (64, 99)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = generate_height_map(size, 0.75, &mut rng);
            assert_eq!(field.get(0, 0), BASE_ELEVATION);
            assert_eq!(field.get(0, size), BASE_ELEVATION);
            assert_eq!(field.get(size, 0), BASE_ELEVATION);
            assert_eq!(field.get(size, size), BASE_ELEVATION);
        }
    }

    #[test]
    fn zero_roughness_keeps_the_field_flat() {
        // With zero corners and no perturbation every midpoint is an average
        // of zeros, so the whole size-4 grid stays exactly zero.
        let mut rng = StdRng::seed_from_u64(7);
        let field = generate_height_map(4, 0.0, &mut rng);
        assert_eq!(field.width, 5);
        assert!(field.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn deterministic_under_a_fixed_seed() {
        let a = generate_height_map(16, 0.5, &mut StdRng::seed_from_u64(99));
        let b = generate_height_map(16, 0.5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.data, b.data);

        let c = generate_height_map(16, 0.5, &mut StdRng::seed_from_u64(100));
        assert_ne!(a.data, c.data);
    }

    #[test]
    fn perturbation_is_bounded_by_depth_times_roughness() {
        // Each level adds at most `roughness` on top of an average of values
        // from the level above, so |v| <= levels * roughness. Size 8 -> 3 levels.
        let mut rng = StdRng::seed_from_u64(42);
        let field = generate_height_map(8, 0.5, &mut rng);
        let bound = 3.0 * 0.5 + 1e-4;
        assert!(field.data.iter().all(|&v| v.abs() <= bound));
    }

    #[test]
    fn non_power_of_two_size_leaves_unreached_cells_at_zero() {
        // Size 3: half = 1 immediately, so the first row and column past the
        // corners are never written by either step.
        let mut rng = StdRng::seed_from_u64(5);
        let field = generate_height_map(3, 1.0, &mut rng);
        assert_eq!(field.width, 4);
        assert_eq!(field.get(0, 1), 0.0);
        assert_eq!(field.get(0, 2), 0.0);
        assert_eq!(field.get(1, 0), 0.0);
        assert_eq!(field.get(2, 0), 0.0);
        // The reachable interior did get displaced.
        assert!(field.data.iter().any(|&v| v != 0.0));
    }

    #[test]
    fn nonzero_roughness_produces_relief() {
        let mut rng = StdRng::seed_from_u64(42);
        let field = generate_height_map(64, 0.5, &mut rng);
        assert!(field.max_elevation() - field.min_elevation() > 0.01);
    }
}
