//! Het curve-model: de getypeerde boom waar alle conversies op werken.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeTuple, Serializer};

pub mod normalize;

pub use normalize::{NormalizeError, NormalizeResult, normalize};

/// Een 2D-coördinaat binnen een curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maak een coördinaat vanuit een `[x, y]` array.
    #[must_use]
    pub const fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    /// Converteer naar een `[x, y]` array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Coord {
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

// GeoJSON verwacht posities als arrays, niet als objecten.
impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.x)?;
        tuple.serialize_element(&self.y)?;
        tuple.end()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// De gesloten set curvetypes die het model ondersteunt.
///
/// Na normalisatie geldt bovendien (zie [`normalize`]):
/// - de wortel is een `CompoundCurve` of `CurvePolygon`;
/// - elke ring van een `CurvePolygon` is een `CompoundCurve`;
/// - elke `CircularString` bestaat uit precies 3 punten.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Rechte segmenten door opeenvolgende punten.
    LineString(Vec<Coord>),
    /// Cirkelbogen: elk overlappend venster van 3 punten bepaalt een boog.
    CircularString(Vec<Coord>),
    /// Aaneengesloten keten van lineaire en circulaire segmenten.
    CompoundCurve(Vec<Curve>),
    /// Polygoon waarvan de ringen samengestelde curves mogen zijn.
    CurvePolygon(Vec<Curve>),
}

impl Curve {
    /// Geeft de canonieke (kleine letters) tagnaam terug. Wordt gebruikt in
    /// WKT-uitvoer en foutmeldingen.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::LineString(_) => "linestring",
            Self::CircularString(_) => "circularstring",
            Self::CompoundCurve(_) => "compoundcurve",
            Self::CurvePolygon(_) => "curvepolygon",
        }
    }
}

impl fmt::Display for Curve {
    /// Rendert de curve als WKT met de standaardopties.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::write::curve_to_wkt(self, &crate::write::WktOptions::default()))
    }
}

impl FromStr for Curve {
    type Err = crate::parse::ParseError;

    /// Parseert WKT-curvetekst met de standaardopties (inclusief normalisatie).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::wkt_to_curve(s, &crate::parse::ParseOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_array_round_trip() {
        let coord = Coord::from_array([4.25, -16.9]);
        assert_eq!(coord.to_array(), [4.25, -16.9]);
    }

    #[test]
    fn coord_serializes_as_position_array() {
        let json = serde_json::to_string(&Coord::new(1.5, -2.0)).expect("serialize coord");
        assert_eq!(json, "[1.5,-2.0]");
    }

    #[test]
    fn tags_are_lowercase() {
        assert_eq!(Curve::LineString(vec![]).tag(), "linestring");
        assert_eq!(Curve::CircularString(vec![]).tag(), "circularstring");
        assert_eq!(Curve::CompoundCurve(vec![]).tag(), "compoundcurve");
        assert_eq!(Curve::CurvePolygon(vec![]).tag(), "curvepolygon");
    }

    #[test]
    fn display_renders_wkt() {
        let curve = Curve::CircularString(vec![
            Coord::new(0.0, 0.0),
            Coord::new(4.0, 4.0),
            Coord::new(8.0, 2.0),
        ]);
        assert_eq!(curve.to_string(), "circularstring(0 0, 4 4, 8 2)");
    }

    #[test]
    fn from_str_parses_and_normalizes() {
        let curve: Curve = "CIRCULARSTRING(0 0, 4 4, 8 2)".parse().expect("parse wkt");
        assert_eq!(curve.tag(), "compoundcurve");
    }
}
