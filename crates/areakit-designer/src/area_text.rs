//! Parser and formatter for the line-oriented area description language.
//!
//! One area per line:
//!
//! ```text
//! Label,(x1,y1),(x2,y2),(x3,y3)[,...]
//! ```
//!
//! Labels are trimmed and truncated to five characters (empty becomes `AREA`),
//! coordinates are signed decimals, and each line needs at least three valid
//! coordinate pairs. Blank lines are ignored.

use std::sync::OnceLock;

use areakit_core::constants::MIN_POLYGON_POINTS;
use areakit_core::{AreaError, DocumentError, LineError};
use regex::Regex;

use crate::model::{normalize_label, Area, Point, Provenance};

fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("invalid regex pattern"))
}

fn tuple_regex() -> &'static Regex {
    static TUPLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TUPLE_REGEX.get_or_init(|| Regex::new(r"\(([^()]*)\)").expect("invalid regex pattern"))
}

/// A successfully parsed area line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArea {
    pub label: String,
    pub points: Vec<Point>,
}

/// Result of parsing a whole area description.
///
/// Holds every area that parsed, plus the failures of the other lines.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub areas: Vec<Area>,
    pub errors: Vec<LineError>,
}

/// Extracts the first two numbers found anywhere in `text`.
///
/// `"(12, -3.5)"`, `"x=12 y=-3.5"` and `"12 -3.5"` all give `(12, -3.5)`.
pub fn parse_point(text: &str) -> Result<Point, AreaError> {
    let mut numbers = number_regex().find_iter(text).map(|m| m.as_str());
    let (Some(x), Some(y)) = (numbers.next(), numbers.next()) else {
        return Err(AreaError::invalid_format(text.trim()));
    };

    let parse = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| AreaError::invalid_format(text.trim()))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

/// Parses a width or height typed into a form field.
///
/// Empty, non-numeric, non-finite and non-positive input all fail.
pub fn parse_dimension(dimension: &str, text: &str) -> Result<f64, AreaError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| AreaError::invalid_dimension(dimension))
}

/// Parses one `Label,(x,y),(x,y),(x,y)...` line.
///
/// Tuples that do not hold two numbers are skipped; the line fails only when
/// fewer than three valid pairs remain.
pub fn parse_area_line(line: &str) -> Result<ParsedArea, AreaError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(AreaError::EmptyInput);
    }

    let (label, rest) = line.split_once(',').ok_or(AreaError::MissingSeparator)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(AreaError::MissingPoints);
    }

    let points: Vec<Point> = tuple_regex()
        .captures_iter(rest)
        .filter_map(|caps| parse_point(&caps[1]).ok())
        .collect();

    if points.len() < MIN_POLYGON_POINTS {
        return Err(AreaError::InsufficientPoints {
            found: points.len(),
            required: MIN_POLYGON_POINTS,
        });
    }

    Ok(ParsedArea {
        label: normalize_label(label),
        points,
    })
}

/// Parses a full area description.
///
/// Each non-blank line is parsed on its own; a bad line never stops the others.
/// Every parsed line becomes a batch area with a fresh id. Line numbers in the
/// errors refer to the original text (1-based, blank lines counted).
///
/// Fails with a [`DocumentError`] when there are non-blank lines but none of
/// them parsed. A document with no non-blank lines yields zero areas.
pub fn parse_document(text: &str) -> Result<ParsedDocument, DocumentError> {
    let mut areas = Vec::new();
    let mut errors = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_area_line(line) {
            Ok(parsed) => areas.push(Area::new(&parsed.label, parsed.points, Provenance::Batch)),
            Err(error) => errors.push(LineError::new(index + 1, error)),
        }
    }

    if areas.is_empty() && !errors.is_empty() {
        return Err(DocumentError::new(errors));
    }
    Ok(ParsedDocument { areas, errors })
}

/// Serializes an area as one description line with integer-rounded coordinates.
pub fn format_area_line(label: &str, points: &[Point]) -> String {
    let mut line = normalize_label(label);
    for p in points {
        let (x, y) = p.rounded();
        line.push_str(&format!(",({},{})", x, y));
    }
    line
}

/// Serializes areas as a description, one line per area.
pub fn format_document(areas: &[Area]) -> String {
    areas
        .iter()
        .map(|a| format_area_line(a.label(), a.points()))
        .collect::<Vec<_>>()
        .join("\n")
}
