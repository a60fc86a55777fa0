//! Linearisatie van curvebomen naar coördinaten en GeoJSON.

use serde::Serialize;
use thiserror::Error;

use crate::curve::{Coord, Curve};
use crate::geom::{ArcError, arc_points_to_coords};

/// Result type voor coördinaatconversies.
pub type CoordsResult<T> = Result<T, CoordsError>;

/// Beschrijft fouten tijdens het lineariseren.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordsError {
    /// Een cirkelboog in de boom is ontaard.
    #[error(transparent)]
    Arc(#[from] ArcError),
    /// Een `curvepolygon` levert ringen op en kan daarom niet binnen een
    /// doorlopend pad gelineariseerd worden.
    #[error("curvepolygon kan niet binnen een pad gelineariseerd worden")]
    NestedPolygon,
}

/// Opties voor [`curve_to_coords`] en [`curve_to_geojson`].
#[derive(Debug, Clone, Copy)]
pub struct CoordsOptions {
    /// Aantal monsters per cirkelboog. Standaard 64; waarden onder 2
    /// worden op 2 geklemd. Geldt uniform voor elke boog in de boom.
    pub steps: usize,
}

impl Default for CoordsOptions {
    fn default() -> Self {
        Self { steps: 64 }
    }
}

/// Gelineariseerde uitvoer: één doorlopend pad, of één reeks ringen voor
/// een `curvepolygon`.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearCoords {
    Path(Vec<Coord>),
    Rings(Vec<Vec<Coord>>),
}

/// GeoJSON-geometrie zoals [`curve_to_geojson`] die oplevert. Serialiseert
/// naar de standaardvorm met een `type`-veld en geneste positie-arrays;
/// geen CRS- of bbox-velden.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Coord> },
    Polygon { coordinates: Vec<Vec<Coord>> },
}

/// Benadert een curve lineair: cirkelbogen worden bemonsterd met
/// `options.steps` punten, rechte segmenten gaan ongewijzigd door. Bij een
/// `compoundcurve` wordt het eerste coördinaat van elk vervolgsegment
/// weggelaten; aansluitende segmenten delen dat randpunt al en dupliceren
/// zou de vertexsemantiek verderop bederven.
///
/// # Errors
///
/// [`CoordsError::Arc`] bij een ontaarde boog, [`CoordsError::NestedPolygon`]
/// wanneer een `curvepolygon` ergens anders dan als wortel voorkomt.
pub fn curve_to_coords(curve: &Curve, options: &CoordsOptions) -> CoordsResult<LinearCoords> {
    match curve {
        Curve::CurvePolygon(rings) => {
            let rings = rings
                .iter()
                .map(|ring| path_coords(ring, options))
                .collect::<CoordsResult<Vec<_>>>()?;
            Ok(LinearCoords::Rings(rings))
        }
        other => Ok(LinearCoords::Path(path_coords(other, options)?)),
    }
}

/// Benadert een curve lineair en verpakt het resultaat als
/// GeoJSON-geometrie: `Polygon` voor een `curvepolygon`, anders
/// `LineString`.
///
/// # Errors
///
/// Zie [`curve_to_coords`].
pub fn curve_to_geojson(curve: &Curve, options: &CoordsOptions) -> CoordsResult<Geometry> {
    match curve_to_coords(curve, options)? {
        LinearCoords::Path(coordinates) => Ok(Geometry::LineString { coordinates }),
        LinearCoords::Rings(coordinates) => Ok(Geometry::Polygon { coordinates }),
    }
}

fn path_coords(curve: &Curve, options: &CoordsOptions) -> CoordsResult<Vec<Coord>> {
    match curve {
        Curve::LineString(coords) => Ok(coords.clone()),
        Curve::CircularString(coords) => {
            // ook ongenormaliseerde kettingen met meerdere bogen toestaan:
            // overlappende vensters van 3 punten, stap 2
            let mut out = Vec::new();
            let mut i = 0;
            while i + 2 < coords.len() {
                out.extend(arc_points_to_coords(&coords[i..i + 3], options.steps)?);
                i += 2;
            }
            Ok(out)
        }
        Curve::CompoundCurve(children) => {
            let mut out = Vec::new();
            for (i, child) in children.iter().enumerate() {
                let coords = path_coords(child, options)?;
                if i > 0 {
                    out.extend(coords.into_iter().skip(1));
                } else {
                    out.extend(coords);
                }
            }
            Ok(out)
        }
        Curve::CurvePolygon(_) => Err(CoordsError::NestedPolygon),
    }
}

/// Herschrijft een curve zodat het opgeslagen middelste punt van elke
/// cirkelboog exact op de gepaste cirkel ligt: de boog wordt opnieuw
/// bemonsterd met precies 3 punten (start, geometrisch middelpunt, eind).
/// Vooral bedoeld voor het tonen van UI-handvatten. Andere knopen gaan
/// ongewijzigd door.
///
/// # Errors
///
/// [`ArcError::Collinear`] wanneer een boog in de boom ontaard is.
pub fn regularize_midpoints(curve: &Curve) -> Result<Curve, ArcError> {
    match curve {
        Curve::CurvePolygon(rings) => {
            let rings = rings
                .iter()
                .map(regularize_midpoints)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Curve::CurvePolygon(rings))
        }
        Curve::CompoundCurve(children) => {
            let children = children
                .iter()
                .map(regularize_midpoints)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Curve::CompoundCurve(children))
        }
        Curve::CircularString(coords) if coords.len() >= 3 => Ok(Curve::CircularString(
            arc_points_to_coords(coords, 3)?,
        )),
        other => Ok(other.clone()),
    }
}
