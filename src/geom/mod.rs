//! Geometriekern: cirkelpassing en boogbemonstering.

pub mod arc;

pub use arc::{Arc, ArcError, ArcResult, arc_from_points, arc_points_to_coords, arc_to_coords};
