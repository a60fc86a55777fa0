//! Normalisatie van curvebomen naar de canonieke vorm.
//!
//! Na normalisatie geldt:
//! - het wortelelement is een `compoundcurve` of `curvepolygon`;
//! - elke ring van een `curvepolygon` is een `compoundcurve`;
//! - elke `circularstring` bestaat uit precies 3 punten (langere worden
//!   gesplitst in overlappende vensters van 3, met gedeelde randpunten).

use thiserror::Error;

use super::{Coord, Curve};

/// Result type voor normalisatie.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Beschrijft fouten tijdens het normaliseren.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Splitsen in overlappende 3-puntsvensters vereist een oneven aantal
    /// punten; bij een even aantal blijft er een ongepaard punt over.
    #[error("circularstring met een even aantal punten ({0}) is niet splitsbaar")]
    EvenPointCount(usize),
}

/// Herschrijft een curve naar de canonieke vorm.
///
/// # Errors
///
/// [`NormalizeError::EvenPointCount`] wanneer een `circularstring` met meer
/// dan 3 punten een even aantal punten heeft.
pub fn normalize(curve: Curve) -> NormalizeResult<Curve> {
    match curve {
        // alles wordt een compoundcurve, ook een kale circularstring
        Curve::CircularString(coords) => Ok(Curve::CompoundCurve(split_circular(coords)?)),
        Curve::CompoundCurve(children) => {
            let mut segments = Vec::with_capacity(children.len());
            for child in children {
                match child {
                    Curve::CircularString(coords) => segments.extend(split_circular(coords)?),
                    other => segments.push(other),
                }
            }
            Ok(Curve::CompoundCurve(segments))
        }
        // elke ring afzonderlijk normaliseren; in de praktijk meestal 1 ring
        Curve::CurvePolygon(rings) => {
            let rings = rings
                .into_iter()
                .map(normalize)
                .collect::<NormalizeResult<Vec<_>>>()?;
            Ok(Curve::CurvePolygon(rings))
        }
        // een kale linestring kan alleen als wortel of ring voorkomen
        Curve::LineString(coords) => {
            Ok(Curve::CompoundCurve(vec![Curve::LineString(coords)]))
        }
    }
}

/// Splitst een puntenketen in overlappende 3-puntsbogen: vensters
/// `[0,1,2], [2,3,4], ...` met stap 2. Ketens van 3 of minder punten gaan
/// ongewijzigd door.
fn split_circular(coords: Vec<Coord>) -> NormalizeResult<Vec<Curve>> {
    if coords.len() <= 3 {
        return Ok(vec![Curve::CircularString(coords)]);
    }
    if coords.len() % 2 == 0 {
        return Err(NormalizeError::EvenPointCount(coords.len()));
    }

    let arcs = (0..coords.len() - 2)
        .step_by(2)
        .map(|i| Curve::CircularString(coords[i..i + 3].to_vec()))
        .collect::<Vec<_>>();
    log::debug!("circularstring van {} punten gesplitst in {} bogen", coords.len(), arcs.len());
    Ok(arcs)
}
