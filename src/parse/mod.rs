//! Parsers voor externe tekstformaten.

pub mod wkt;

pub use wkt::{ParseError, ParseOptions, ParseResult, wkt_to_curve};
