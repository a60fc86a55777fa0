//! Parser voor WKT-achtige curvetekst.
//!
//! De grammatica is bewust minimaal en sluit aan op wat PostGIS voor
//! curvegeometrieën uitvoert:
//!
//! ```text
//! Element    := Tag '(' List ')' | '(' List ')' | Coordinaat
//! Tag        := letters                  (hoofdletterongevoelig)
//! List       := Element (',' Element)*
//! Coordinaat := getal witruimte getal
//! ```
//!
//! Een lijst zonder tag wordt gelezen als `linestring`. Er vindt geen
//! semantische validatie plaats (ringsluiting, minimale puntaantallen);
//! syntactisch geldige maar betekenisloze invoer levert een geldige maar
//! betekenisloze boom op.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::curve::{Coord, Curve, NormalizeError, normalize};

/// Result type voor het parsen van curvetekst.
pub type ParseResult<T> = Result<T, ParseError>;

/// Beschrijft fouten tijdens het parsen.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Een verwacht token ontbreekt op de huidige positie.
    #[error("syntaxfout op positie {position}: verwachtte {expected}")]
    Syntax {
        expected: &'static str,
        position: usize,
    },
    /// De invoer past op geen enkele productie (geen taglijst, geen getal).
    #[error("onverwacht element op positie {position}")]
    UnexpectedElement { position: usize },
    /// Een tagnaam buiten de ondersteunde curvetypes.
    #[error("niet-ondersteund curvetype: {0}")]
    UnsupportedType(String),
    /// Fout tijdens het converteren van numerieke waarden.
    #[error("ongeldige numerieke waarde: {0}")]
    Number(#[from] ParseFloatError),
    /// Een coördinaat bestaat uit precies twee getallen (x y).
    #[error("coördinaat op positie {position} vereist twee getallen, kreeg {count}")]
    CoordinateArity { position: usize, count: usize },
    /// Coördinaten en subcurves mogen niet gemengd worden binnen één element.
    #[error("element op positie {position} hoort niet thuis in {tag}")]
    ChildKind {
        tag: &'static str,
        position: usize,
    },
    /// Het wortelelement is een kaal coördinaat; dat is geen curve.
    #[error("wortelelement op positie {position} moet een curve zijn, geen kaal coördinaat")]
    BareCoordinate { position: usize },
    /// De geparseerde boom kon niet genormaliseerd worden.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Opties voor [`wkt_to_curve`].
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Normaliseer het resultaat naar de canonieke vorm (zie
    /// [`crate::curve::normalize`]). Standaard aan.
    pub normalize: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { normalize: true }
    }
}

/// Parseert WKT-curvetekst naar een [`Curve`].
///
/// Tagnamen worden hoofdletterongevoelig gelezen en canoniek in kleine
/// letters opgeslagen. Tekst die na het wortelelement overblijft wordt
/// genegeerd.
///
/// # Errors
///
/// Zie [`ParseError`]; de parse faalt atomair, er is geen gedeeltelijk
/// resultaat.
pub fn wkt_to_curve(input: &str, options: &ParseOptions) -> ParseResult<Curve> {
    log::debug!("start parsing WKT-curvetekst ({} bytes)", input.len());
    let mut cursor = Cursor::new(input);
    let curve = match cursor.element()? {
        Element::Curve(curve) => curve,
        Element::Coord(_) => return Err(ParseError::BareCoordinate { position: 0 }),
    };
    if options.normalize {
        Ok(normalize(curve)?)
    } else {
        Ok(curve)
    }
}

/// Tussenvorm tijdens het parsen: binnen haakjes weten we pas achteraf of
/// een element een coördinaat of een subcurve is.
enum Element {
    Coord(Coord),
    Curve(Curve),
}

/// Expliciete parseerstatus: één voorwaartse bytecursor over de invoer,
/// zonder backtracking.
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Consumeer één verwacht teken.
    fn expect(&mut self, byte: u8, expected: &'static str) -> ParseResult<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(ParseError::Syntax {
                expected,
                position: self.pos,
            })
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Eén element: een taglijst, een impliciete `linestring`-lijst, of een
    /// coördinaat. De tagnaam telt alleen als tag wanneer er direct een `(`
    /// op volgt; anders proberen we een coördinaat.
    fn element(&mut self) -> ParseResult<Element> {
        let start = self.pos;
        let letters = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        if self.input.as_bytes().get(start + letters) == Some(&b'(') {
            let tag = self.input[start..start + letters].to_ascii_lowercase();
            self.pos += letters;
            let children = self.list()?;
            return Ok(Element::Curve(build_curve(&tag, children, start)?));
        }

        match self.peek() {
            Some(b) if b.is_ascii_digit() || b == b'-' => Ok(Element::Coord(self.coordinate()?)),
            _ => Err(ParseError::UnexpectedElement { position: self.pos }),
        }
    }

    /// Een haakjeslijst van komma-gescheiden elementen.
    fn list(&mut self) -> ParseResult<Vec<Element>> {
        self.expect(b'(', "'('")?;
        let mut items = Vec::new();
        while self.peek() != Some(b')') {
            items.push(self.element()?);
            if self.eat(b',') {
                self.skip_whitespace();
            }
        }
        self.expect(b')', "')'")?;
        self.skip_whitespace();
        Ok(items)
    }

    /// Een coördinaat: alles tot de volgende `,` of `)`, gesplitst op
    /// witruimte en gelezen als getallen.
    fn coordinate(&mut self) -> ParseResult<Coord> {
        let start = self.pos;
        let rest = self.rest();
        let len = rest.find([',', ')']).unwrap_or(rest.len());
        if len == 0 {
            return Err(ParseError::Syntax {
                expected: "coördinaat",
                position: start,
            });
        }
        self.pos += len;

        let mut numbers = [0.0_f64; 2];
        let mut count = 0;
        for token in rest[..len].split_ascii_whitespace() {
            if count < 2 {
                numbers[count] = token.parse()?;
            }
            count += 1;
        }
        if count != 2 {
            return Err(ParseError::CoordinateArity {
                position: start,
                count,
            });
        }
        Ok(Coord::new(numbers[0], numbers[1]))
    }
}

/// Zet een tagnaam en zijn kinderen om naar een knoop in het curve-model.
/// Een lege tag (impliciete lijst) geldt als `linestring`.
fn build_curve(tag: &str, children: Vec<Element>, position: usize) -> ParseResult<Curve> {
    match tag {
        "" | "linestring" => Ok(Curve::LineString(coords_only(
            children,
            "linestring",
            position,
        )?)),
        "circularstring" => Ok(Curve::CircularString(coords_only(
            children,
            "circularstring",
            position,
        )?)),
        "compoundcurve" => Ok(Curve::CompoundCurve(curves_only(
            children,
            "compoundcurve",
            position,
        )?)),
        "curvepolygon" => Ok(Curve::CurvePolygon(curves_only(
            children,
            "curvepolygon",
            position,
        )?)),
        other => Err(ParseError::UnsupportedType(other.to_owned())),
    }
}

fn coords_only(
    children: Vec<Element>,
    tag: &'static str,
    position: usize,
) -> ParseResult<Vec<Coord>> {
    children
        .into_iter()
        .map(|element| match element {
            Element::Coord(coord) => Ok(coord),
            Element::Curve(_) => Err(ParseError::ChildKind { tag, position }),
        })
        .collect()
}

fn curves_only(
    children: Vec<Element>,
    tag: &'static str,
    position: usize,
) -> ParseResult<Vec<Curve>> {
    children
        .into_iter()
        .map(|element| match element {
            Element::Curve(curve) => Ok(curve),
            Element::Coord(_) => Err(ParseError::ChildKind { tag, position }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: ParseOptions = ParseOptions { normalize: false };

    fn c(x: f64, y: f64) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn parses_circularstring_with_lowercased_tag() {
        let curve = wkt_to_curve("CIRCULARSTRING(0 0, 4 4, 8 2)", &RAW).expect("parse");
        assert_eq!(
            curve,
            Curve::CircularString(vec![c(0.0, 0.0), c(4.0, 4.0), c(8.0, 2.0)])
        );
        assert_eq!(curve.tag(), "circularstring");
    }

    #[test]
    fn parses_compoundcurve_with_implicit_linestring() {
        let curve = wkt_to_curve(
            "CompoundCurve(CircularString(5.5 0, 6 -1, 6 -2), (6 -2, 3 4))",
            &RAW,
        )
        .expect("parse");
        assert_eq!(
            curve,
            Curve::CompoundCurve(vec![
                Curve::CircularString(vec![c(5.5, 0.0), c(6.0, -1.0), c(6.0, -2.0)]),
                Curve::LineString(vec![c(6.0, -2.0), c(3.0, 4.0)]),
            ])
        );
    }

    #[test]
    fn parses_curvepolygon() {
        let curve = wkt_to_curve(
            "CurvePolygon(CompoundCurve(CircularString(5.5 0, 6 -1, 6 -2), (6 -2, 3 4)),CircularString(5.75 -0.5, 6 -0.5, 6 -0.8))",
            &RAW,
        )
        .expect("parse");
        assert_eq!(
            curve,
            Curve::CurvePolygon(vec![
                Curve::CompoundCurve(vec![
                    Curve::CircularString(vec![c(5.5, 0.0), c(6.0, -1.0), c(6.0, -2.0)]),
                    Curve::LineString(vec![c(6.0, -2.0), c(3.0, 4.0)]),
                ]),
                Curve::CircularString(vec![c(5.75, -0.5), c(6.0, -0.5), c(6.0, -0.8)]),
            ])
        );
    }

    #[test]
    fn tolerates_decimals_and_loose_whitespace() {
        let curve = wkt_to_curve(
            "CURVEPOLYGON(COMPOUNDCURVE(CIRCULARSTRING(0 0,2 0, 2 1, 2 3, 4 3),(4 3, 4 5, 1 4, 0 0)), CIRCULARSTRING(1.7 1, 1.4 0.4, 1.6 0.4, 1.6 0.5, 1.7 1) ) ",
            &RAW,
        )
        .expect("parse");
        assert_eq!(
            curve,
            Curve::CurvePolygon(vec![
                Curve::CompoundCurve(vec![
                    Curve::CircularString(vec![
                        c(0.0, 0.0),
                        c(2.0, 0.0),
                        c(2.0, 1.0),
                        c(2.0, 3.0),
                        c(4.0, 3.0),
                    ]),
                    Curve::LineString(vec![c(4.0, 3.0), c(4.0, 5.0), c(1.0, 4.0), c(0.0, 0.0)]),
                ]),
                Curve::CircularString(vec![
                    c(1.7, 1.0),
                    c(1.4, 0.4),
                    c(1.6, 0.4),
                    c(1.6, 0.5),
                    c(1.7, 1.0),
                ]),
            ])
        );
    }

    #[test]
    fn normalization_is_on_by_default() {
        let curve = wkt_to_curve("CIRCULARSTRING(0 0, 4 4, 8 2, 5 5, 3 5)", &ParseOptions::default())
            .expect("parse");
        assert_eq!(
            curve,
            Curve::CompoundCurve(vec![
                Curve::CircularString(vec![c(0.0, 0.0), c(4.0, 4.0), c(8.0, 2.0)]),
                Curve::CircularString(vec![c(8.0, 2.0), c(5.0, 5.0), c(3.0, 5.0)]),
            ])
        );
    }

    #[test]
    fn unsupported_tag_is_rejected() {
        let err = wkt_to_curve("point(1 2)", &RAW).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedType(tag) if tag == "point"));
    }

    #[test]
    fn unexpected_element_is_rejected() {
        let err = wkt_to_curve("compoundcurve(@)", &RAW).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedElement { position: 14 }));
    }

    #[test]
    fn unterminated_list_is_rejected() {
        assert!(wkt_to_curve("circularstring(0 0, 4 4", &RAW).is_err());
    }

    #[test]
    fn coordinate_needs_exactly_two_numbers() {
        let err = wkt_to_curve("linestring(1, 2 2)", &RAW).unwrap_err();
        assert!(matches!(err, ParseError::CoordinateArity { count: 1, .. }));
        let err = wkt_to_curve("linestring(1 2 3, 4 5 6)", &RAW).unwrap_err();
        assert!(matches!(err, ParseError::CoordinateArity { count: 3, .. }));
    }

    #[test]
    fn mixed_children_are_rejected() {
        let err = wkt_to_curve("compoundcurve(1 2, 3 4)", &RAW).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ChildKind {
                tag: "compoundcurve",
                ..
            }
        ));
        let err = wkt_to_curve("circularstring((1 2, 3 4))", &RAW).unwrap_err();
        assert!(matches!(
            err,
            ParseError::ChildKind {
                tag: "circularstring",
                ..
            }
        ));
    }

    #[test]
    fn bare_coordinate_root_is_rejected() {
        let err = wkt_to_curve("1 2", &RAW).unwrap_err();
        assert!(matches!(err, ParseError::BareCoordinate { position: 0 }));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(matches!(
            wkt_to_curve("linestring(1 abc, 2 2)", &RAW).unwrap_err(),
            ParseError::Number(_)
        ));
    }
}
