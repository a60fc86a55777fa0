//! Cirkelboog-kern: cirkel door drie punten en hoekbemonstering.
//!
//! Hoeken worden gemeten in radialen, met de klok mee vanaf de positieve
//! X-as. Dat is het spiegelbeeld van de wiskundige conventie, omdat de
//! Y-as in schermcoördinaten naar beneden wijst; bij het terugrekenen naar
//! posities wordt de Y-component daarom weer met omgekeerd teken gebruikt
//! (zie [`arc_to_coords`]).

use std::f64::consts::PI;

use thiserror::Error;

use crate::curve::Coord;

/// Result type voor boogberekeningen.
pub type ArcResult<T> = Result<T, ArcError>;

/// Beschrijft fouten in de boogkern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArcError {
    /// Drie collineaire punten bepalen geen eindige cirkel.
    #[error("collineaire punten bepalen geen cirkel")]
    Collinear,
    /// Er zijn minstens drie punten nodig om een boog te passen.
    #[error("cirkelboog vereist minstens drie punten, kreeg {0}")]
    PointCount(usize),
}

/// De unieke cirkelboog door drie punten. Wordt op aanvraag berekend en
/// nooit opgeslagen in het curve-model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Coord,
    pub radius: f64,
    /// Hoek van het startpunt.
    pub start: f64,
    /// Hoek van het middelste punt. `None` in het volledige-cirkelgeval.
    pub mid: Option<f64>,
    /// Hoek van het eindpunt.
    pub end: f64,
    /// Draairichting van start naar eind, via het middelste punt.
    /// `None` in het volledige-cirkelgeval; bemonstering behandelt dat als
    /// met de klok mee. Bekende asymmetrie, bewust niet "gerepareerd".
    pub anticlockwise: Option<bool>,
}

/// Berekent de unieke boog door drie punten.
///
/// Vallen eerste en laatste punt exact samen, dan is het een volledige
/// cirkel: middelpunt halverwege `a` en `b`, straal de halve afstand, en
/// een veegbereik van −π tot π.
///
/// # Errors
///
/// [`ArcError::Collinear`] wanneer de drie punten op één lijn liggen.
pub fn arc_from_points(a: Coord, b: Coord, c: Coord) -> ArcResult<Arc> {
    if a.x == c.x && a.y == c.y {
        // volledige cirkel; mid en draairichting blijven onbepaald
        let radius = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt() / 2.0;
        return Ok(Arc {
            center: Coord::new(a.x + (b.x - a.x) / 2.0, a.y + (b.y - a.y) / 2.0),
            radius,
            start: -PI,
            mid: None,
            end: PI,
            anticlockwise: None,
        });
    }

    // cirkelvergelijking x² + y² + 2gx + 2fy + c = 0, met middelpunt
    // (-g, -f) en straal² = g² + f² - c
    let (x1, y1, x2, y2, x3, y3) = (a.x, a.y, b.x, b.y, c.x, c.y);
    let x12 = x1 - x2;
    let x13 = x1 - x3;
    let y12 = y1 - y2;
    let y13 = y1 - y3;
    let y31 = y3 - y1;
    let y21 = y2 - y1;
    let x31 = x3 - x1;
    let x21 = x2 - x1;

    let sx13 = x1 * x1 - x3 * x3;
    let sy13 = y1 * y1 - y3 * y3;
    let sx21 = x2 * x2 - x1 * x1;
    let sy21 = y2 * y2 - y1 * y1;

    let f = (sx13 * x12 + sy13 * x12 + sx21 * x13 + sy21 * x13)
        / (2.0 * (y31 * x12 - y21 * x13));
    let g = (sx13 * y12 + sy13 * y12 + sx21 * y13 + sy21 * y13)
        / (2.0 * (x31 * y12 - x21 * y13));

    let cc = -(x1 * x1) - y1 * y1 - 2.0 * g * x1 - 2.0 * f * y1;
    let center = Coord::new(-g, -f);
    let radius = (g * g + f * f - cc).sqrt();
    if !radius.is_finite() {
        return Err(ArcError::Collinear);
    }

    // hoeken met de klok mee vanaf oost (teken omgeklapt voor scherm-Y)
    let start = -(a.y - center.y).atan2(a.x - center.x);
    let mid = -(b.y - center.y).atan2(b.x - center.x);
    let end = -(c.y - center.y).atan2(c.x - center.x);

    // met de klok mee als precies één cyclische ordening stijgend is
    let clockwise = (start < mid && mid < end)
        || (end < start && start < mid)
        || (mid < end && end < start);

    Ok(Arc {
        center,
        radius,
        start,
        mid: Some(mid),
        end,
        anticlockwise: Some(!clockwise),
    })
}

/// Bemonstert `steps` punten met gelijke hoekafstand langs de boog.
/// Waarden onder 2 worden op 2 geklemd.
#[must_use]
pub fn arc_to_coords(arc: &Arc, steps: usize) -> Vec<Coord> {
    let steps = steps.max(2);
    let anticlockwise = arc.anticlockwise.unwrap_or(false);

    let mut start = arc.start;
    let mut end = arc.end;
    // maak de veeg monotoon in de gekozen richting
    if anticlockwise && start < end {
        start += 2.0 * PI;
    } else if !anticlockwise && end < start {
        end += 2.0 * PI;
    }

    let step_angle = (end - start) / (steps - 1) as f64;
    let mut coords = Vec::with_capacity(steps);
    for i in 0..steps {
        let angle = start + i as f64 * step_angle;
        coords.push(Coord::new(
            arc.center.x + arc.radius * angle.cos(),
            arc.center.y - arc.radius * angle.sin(),
        ));
    }
    coords
}

/// Past een boog door de eerste drie punten en bemonstert die, waarna het
/// eerste en laatste monster exact worden vervangen door de oorspronkelijke
/// eindpunten. De rondreis door de goniometrie is niet bit-exact; zonder
/// deze correctie ontstaan zichtbare kieren tussen aansluitende segmenten.
///
/// # Errors
///
/// [`ArcError::PointCount`] bij minder dan drie punten,
/// [`ArcError::Collinear`] bij een ontaarde invoer.
pub fn arc_points_to_coords(points: &[Coord], steps: usize) -> ArcResult<Vec<Coord>> {
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Err(ArcError::PointCount(0));
    };
    if points.len() < 3 {
        return Err(ArcError::PointCount(points.len()));
    }

    let arc = arc_from_points(points[0], points[1], points[2])?;
    let mut coords = arc_to_coords(&arc, steps);

    coords[0] = first;
    let last_index = coords.len() - 1;
    coords[last_index] = last;
    Ok(coords)
}
