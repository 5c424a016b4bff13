//! Fast Poisson-disk sampling.
//!
//! Fills a rectangle with points no two of which are closer than a minimum
//! distance. A uniform occupancy grid with cell size `d / √2` keeps the
//! rejection test to a constant 5×5 cell scan: two points sharing a cell are
//! necessarily within `d` of each other, so one occupant per cell suffices.

use rand::Rng;

use crate::error::SampleError;
use crate::geom::{Point2, Rect};

/// Candidate attempts per frontier point when the caller passes 0.
pub const DEFAULT_ITERATIONS_PER_POINT: u32 = 30;

const INV_ROOT_TWO: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Uniform spatial grid mapping cell index to at most one accepted point.
struct OccupancyGrid {
    origin: Point2,
    cell_size: f32,
    /// Highest valid cell index per axis; cells span `0..=width` × `0..=height`.
    width: usize,
    height: usize,
    cells: Vec<Option<Point2>>,
}

impl OccupancyGrid {
    fn new(region: Rect, minimum_distance: f32) -> Self {
        let cell_size = minimum_distance * INV_ROOT_TWO;
        let width = (region.width() / cell_size).ceil() as usize;
        let height = (region.height() / cell_size).ceil() as usize;
        Self {
            origin: region.min,
            cell_size,
            width,
            height,
            cells: vec![None; (width + 1) * (height + 1)],
        }
    }

    /// Cell index of a point inside the region. Clamped so a point sitting
    /// exactly on the far edge still maps to an allocated cell.
    fn index_of(&self, p: Point2) -> (usize, usize) {
        let cx = ((p.x - self.origin.x) / self.cell_size).floor() as usize;
        let cy = ((p.y - self.origin.y) / self.cell_size).floor() as usize;
        (cx.min(self.width), cy.min(self.height))
    }

    fn insert(&mut self, p: Point2) {
        let (cx, cy) = self.index_of(p);
        self.cells[cy * (self.width + 1) + cx] = Some(p);
    }

    /// Scan the ±2-cell neighborhood of `p` for an occupant closer than
    /// `minimum_distance`. Squared-distance comparison, no square root.
    fn has_neighbor_within(&self, p: Point2, minimum_distance: f32) -> bool {
        let limit = minimum_distance * minimum_distance;
        let (cx, cy) = self.index_of(p);

        let x_lo = cx.saturating_sub(2);
        let x_hi = (cx + 2).min(self.width);
        let y_lo = cy.saturating_sub(2);
        let y_hi = (cy + 2).min(self.height);

        for gy in y_lo..=y_hi {
            for gx in x_lo..=x_hi {
                if let Some(q) = self.cells[gy * (self.width + 1) + gx] {
                    if q.distance_squared(p) <= limit {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Generate blue-noise sample points over `region`.
///
/// Every pair of returned points is at least `minimum_distance` apart and
/// every point lies inside `region` (boundary inclusive). The packing is
/// valid but not guaranteed maximal, and point order follows acceptance
/// order — reproducible only under a seeded `rng`.
///
/// `iterations_per_point` caps candidate attempts per frontier point;
/// passing 0 selects [`DEFAULT_ITERATIONS_PER_POINT`].
pub fn generate_samples<R: Rng>(
    region: Rect,
    minimum_distance: f32,
    iterations_per_point: u32,
    rng: &mut R,
) -> Result<Vec<Point2>, SampleError> {
    // `!(> 0)` rather than `<= 0` so NaN is rejected too.
    if !(minimum_distance > 0.0) {
        return Err(SampleError::NonPositiveDistance(minimum_distance));
    }
    if region.width() <= 0.0 || region.height() <= 0.0 {
        return Err(SampleError::DegenerateRegion {
            width: region.width(),
            height: region.height(),
        });
    }

    let budget = if iterations_per_point == 0 {
        DEFAULT_ITERATIONS_PER_POINT
    } else {
        iterations_per_point
    };

    let mut grid = OccupancyGrid::new(region, minimum_distance);
    let mut samples = Vec::new();
    let mut frontier = Vec::new();

    // Seed: one uniform point anywhere in the region.
    let seed = Point2::new(
        rng.gen_range(region.min.x..=region.max.x),
        rng.gen_range(region.min.y..=region.max.y),
    );
    grid.insert(seed);
    samples.push(seed);
    frontier.push(seed);

    while !frontier.is_empty() {
        let index = rng.gen_range(0..frontier.len());
        let point = frontier[index];

        let mut found = false;
        for _ in 0..budget {
            found |= try_grow(
                point,
                region,
                minimum_distance,
                &mut grid,
                &mut samples,
                &mut frontier,
                rng,
            );
        }

        // Exhausted only when a full budget round produced nothing; the
        // point itself stays in the sample set forever.
        if !found {
            frontier.remove(index);
        }
    }

    Ok(samples)
}

/// One candidate attempt around `point`. On acceptance the candidate joins
/// the samples, the frontier, and its grid cell.
fn try_grow<R: Rng>(
    point: Point2,
    region: Rect,
    minimum_distance: f32,
    grid: &mut OccupancyGrid,
    samples: &mut Vec<Point2>,
    frontier: &mut Vec<Point2>,
    rng: &mut R,
) -> bool {
    let (dx, dy) = annulus_offset(minimum_distance, 2.0 * minimum_distance, rng);
    let candidate = point.offset(dx, dy);

    if !region.contains(candidate) {
        return false;
    }
    if grid.has_neighbor_within(candidate, minimum_distance) {
        return false;
    }

    samples.push(candidate);
    frontier.push(candidate);
    grid.insert(candidate);
    true
}

/// Random offset into the annulus `r_min ≤ r ≤ r_max`: uniform angle, radius
/// drawn uniform in squared radius for area-uniform density.
fn annulus_offset<R: Rng>(r_min: f32, r_max: f32, rng: &mut R) -> (f32, f32) {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let radius = rng.gen_range(r_min * r_min..=r_max * r_max).sqrt();
    (radius * theta.cos(), radius * theta.sin())
}
