//! Placement of blue-noise points on a synthesized heightfield.
//!
//! Composes the two generators: scatter points over the field's physical
//! extent, then read the elevation under each point off the grid. What a
//! consumer does with the resulting triples (spawning, rendering) is its
//! own business.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SampleError;
use crate::geom::Rect;
use crate::heightfield::HeightField;
use crate::poisson;

/// A spawn location: planar position plus the elevation sampled under it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub elevation: f32,
    pub y: f32,
}

/// Scatter minimum-separation points across `extent` and pair each with the
/// bilinear elevation of `field` under it. `extent` is the physical footprint
/// the field spans; points are normalized into it before sampling.
pub fn scatter_on_heightfield<R: Rng>(
    field: &HeightField,
    extent: Rect,
    minimum_distance: f32,
    iterations_per_point: u32,
    rng: &mut R,
) -> Result<Vec<Placement>, SampleError> {
    let points = poisson::generate_samples(extent, minimum_distance, iterations_per_point, rng)?;

    let placements = points
        .into_iter()
        .map(|p| {
            let u = (p.x - extent.min.x) / extent.width();
            let v = (p.y - extent.min.y) / extent.height();
            // Accepted points lie inside the extent; the clamp only absorbs
            // float rounding at the far edge.
            let elevation = field
                .sample(u.clamp(0.0, 1.0), v.clamp(0.0, 1.0))
                .unwrap_or(0.0);
            Placement { x: p.x, elevation, y: p.y }
        })
        .collect();

    Ok(placements)
}
