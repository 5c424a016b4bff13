//! Synthetic terrain elevation and blue-noise point scattering.
//!
//! Two independent algorithms, usable in isolation:
//! - [`diamond_square`]: recursive midpoint-displacement synthesis of a
//!   square heightfield from zeroed corner seeds.
//! - [`poisson`]: grid-accelerated Poisson-disk sampling of a rectangle
//!   under a minimum-separation constraint.
//!
//! [`scatter`] composes the two, pairing accepted sample points with
//! elevations read off the synthesized field.
//!
//! All randomness is threaded through an explicit [`rand::Rng`]; seed a
//! `StdRng` for reproducible output.

pub mod diamond_square;
pub mod error;
pub mod geom;
pub mod heightfield;
pub mod poisson;
pub mod scatter;

pub use error::SampleError;
pub use geom::{Point2, Rect};
pub use heightfield::HeightField;
