//! TSPLIB-style coordinate file parsing.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::models::Point;

/// Reads city coordinates from a TSPLIB-style node coordinate file.
///
/// Header lines are skipped until a line equal to `NODE_COORD_SECTION`;
/// after that each line is `<id> <x> <y>` (whitespace separated, the id is
/// ignored) until an optional `EOF` line or the end of input. The input
/// order of the coordinate lines defines the city indices `0..n`.
///
/// # Examples
///
/// ```
/// use tsp_search::io::read_coords;
///
/// let file = "NAME: square\nNODE_COORD_SECTION\n1 0.0 0.0\n2 0.0 3.0\nEOF\n";
/// let points = read_coords(file.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].y, 3.0);
/// ```
pub fn read_coords(reader: impl BufRead) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut in_section = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !in_section {
            if trimmed == "NODE_COORD_SECTION" {
                in_section = true;
            }
            continue;
        }
        if trimmed == "EOF" {
            break;
        }
        points.push(parse_coord_line(trimmed, index + 1)?);
    }

    if points.is_empty() {
        return Err(Error::invalid_input(
            "no coordinates found (missing NODE_COORD_SECTION?)",
        ));
    }
    Ok(points)
}

fn parse_coord_line(line: &str, line_number: usize) -> Result<Point> {
    let mut fields = line.split_whitespace();
    let (Some(_id), Some(x), Some(y)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(Error::invalid_input(format!(
            "line {line_number}: expected '<id> <x> <y>', got '{line}'"
        )));
    };
    if fields.next().is_some() {
        return Err(Error::invalid_input(format!(
            "line {line_number}: trailing fields after '<id> <x> <y>': '{line}'"
        )));
    }
    let x: f64 = x.parse().map_err(|_| {
        Error::invalid_input(format!("line {line_number}: invalid x coordinate '{x}'"))
    })?;
    let y: f64 = y.parse().map_err(|_| {
        Error::invalid_input(format!("line {line_number}: invalid y coordinate '{y}'"))
    })?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
NAME: rect
TYPE: TSP
DIMENSION: 4
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 0.0 0.0
2 0.0 3.0
3 4.0 3.0
4 4.0 0.0
EOF
";

    #[test]
    fn test_reads_sample() {
        let points = read_coords(SAMPLE.as_bytes()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[2], Point::new(4.0, 3.0));
    }

    #[test]
    fn test_order_preserved() {
        let points = read_coords(SAMPLE.as_bytes()).unwrap();
        assert_eq!(points[3], Point::new(4.0, 0.0));
    }

    #[test]
    fn test_missing_section_is_error() {
        let err = read_coords("1 0.0 0.0\n2 1.0 1.0\n".as_bytes());
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(read_coords("".as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_line_is_error() {
        let file = "NODE_COORD_SECTION\n1 0.0\n";
        let err = read_coords(file.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_bad_number_is_error() {
        let file = "NODE_COORD_SECTION\n1 zero 0.0\n";
        assert!(read_coords(file.as_bytes()).is_err());
    }

    #[test]
    fn test_eof_optional() {
        let file = "NODE_COORD_SECTION\n1 1.0 2.0\n";
        let points = read_coords(file.as_bytes()).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let file = "NODE_COORD_SECTION\n\n1 1.0 2.0\n\n2 3.0 4.0\n";
        let points = read_coords(file.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
    }
}
