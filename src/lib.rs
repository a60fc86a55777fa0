//! Conversies tussen drie representaties van gebogen vectorgeometrie,
//! zoals ruimtelijke databases die met cirkelbogen uitvoeren: WKT-achtige
//! curvetekst, een getypeerd curve-model, en gelineariseerde coördinaten
//! in GeoJSON-stijl.
//!
//! De kern bestaat uit een recursive-descent parser met een
//! normalisatiepas, een boogkern die de unieke cirkel door drie punten
//! reconstrueert, en de serialisatiepaden terug naar coördinaten en tekst.
//!
//! ```
//! use wkt_curves::{ParseOptions, WktOptions, curve_to_wkt, wkt_to_curve};
//!
//! let curve = wkt_to_curve("CIRCULARSTRING(0 0, 4 4, 8 2, 5 5, 3 5)", &ParseOptions::default())?;
//! assert_eq!(
//!     curve_to_wkt(&curve, &WktOptions::default()),
//!     "compoundcurve(circularstring(0 0, 4 4, 8 2), circularstring(8 2, 5 5, 3 5))"
//! );
//! # Ok::<(), wkt_curves::ParseError>(())
//! ```
//!
//! Alle conversies zijn pure functies over onveranderlijke waardebomen;
//! er is geen gedeelde toestand en elke aanroep is herstartbaar.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod convert;
pub mod curve;
pub mod geom;
pub mod parse;
pub mod write;

pub use convert::{
    CoordsError, CoordsOptions, CoordsResult, Geometry, LinearCoords, curve_to_coords,
    curve_to_geojson, regularize_midpoints,
};
pub use curve::{Coord, Curve, NormalizeError, NormalizeResult, normalize};
pub use geom::{Arc, ArcError, ArcResult, arc_from_points, arc_points_to_coords, arc_to_coords};
pub use parse::{ParseError, ParseOptions, ParseResult, wkt_to_curve};
pub use write::{Case, Format, WktOptions, curve_to_wkt};
