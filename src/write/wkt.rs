//! Serialisatie van curvebomen naar WKT-tekst.

use std::fmt::Write as _;

use crate::curve::{Coord, Curve};

/// Hoofdlettergebruik van tagnamen in de uitvoer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Case {
    #[default]
    Lower,
    Upper,
}

impl Case {
    fn apply(self, tag: &str) -> String {
        match self {
            Self::Lower => tag.to_owned(),
            Self::Upper => tag.to_ascii_uppercase(),
        }
    }
}

/// Uitvoerformaat: platte WKT, of een HTML-weergave met regeleinden en
/// inspringing voor visuele presentatie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Wkt,
    Html,
}

/// Opties voor [`curve_to_wkt`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WktOptions {
    pub case: Case,
    pub format: Format,
}

/// Rendert een curve als WKT-tekst.
///
/// Een `linestring` genest in een `compoundcurve` wordt als kale
/// haakjeslijst geschreven, precies de impliciete vorm die de parser
/// accepteert. Coördinaten renderen via de standaard
/// getal-naar-tekstconversie, zonder vaste precisie.
///
/// Het HTML-formaat is een weergavepad: vaste hoofdlettertags met
/// regeleinden en inspringing; de `case`-optie geldt daar niet.
#[must_use]
pub fn curve_to_wkt(curve: &Curve, options: &WktOptions) -> String {
    match options.format {
        Format::Wkt => plain(curve, options.case),
        Format::Html => html(curve),
    }
}

fn plain(curve: &Curve, case: Case) -> String {
    match curve {
        Curve::CompoundCurve(children) | Curve::CurvePolygon(children) => {
            let inner = children
                .iter()
                .map(|child| plain(child, case))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({inner})", case.apply(curve.tag()))
        }
        // kale lijst; alleen zinvol binnen een compoundcurve
        Curve::LineString(coords) => coords_to_wkt(coords),
        Curve::CircularString(coords) => {
            format!("{}{}", case.apply(curve.tag()), coords_to_wkt(coords))
        }
    }
}

fn coords_to_wkt(coords: &[Coord]) -> String {
    let mut out = String::from("(");
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{} {}", coord.x, coord.y);
    }
    out.push(')');
    out
}

fn html(curve: &Curve) -> String {
    match curve {
        Curve::CompoundCurve(children) | Curve::CurvePolygon(children) => {
            let inner = children.iter().map(html).collect::<Vec<_>>().join(",");
            format!("{}({inner})", curve.tag().to_ascii_uppercase())
        }
        Curve::LineString(coords) => html_coords(coords),
        Curve::CircularString(coords) => {
            format!("{}{}", curve.tag().to_ascii_uppercase(), html_coords(coords))
        }
    }
}

fn html_coords(coords: &[Coord]) -> String {
    let inner = coords
        .iter()
        .map(|coord| format!("({} {})", coord.x, coord.y))
        .collect::<Vec<_>>()
        .join(",<br>&nbsp;&nbsp;");
    format!("(<br>&nbsp;&nbsp;{inner}<br>)")
}
