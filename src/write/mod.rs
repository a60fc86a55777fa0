//! Serialisatie naar externe tekstformaten.

pub mod wkt;

pub use wkt::{Case, Format, WktOptions, curve_to_wkt};
