use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Reads points from the file at `path`.
///
/// The format is line-oriented: one point per line as whitespace- or
/// tab-delimited `id x y` fields, kept in input order. Blank lines are
/// skipped.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be opened or read, and
/// [`Error::MalformedRecord`] for any line that does not parse.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point<f64>>> {
    parse_points(BufReader::new(File::open(path)?))
}

/// Parses `id x y` records from `reader`, one per non-blank line.
///
/// # Example
/// ```
/// use tsp_brute::io::parse_points;
///
/// let input = "1 0 0\n2 3 4\n";
/// let points = parse_points(input.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].id, 2);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point<f64>>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::malformed_record(
                number,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let id = fields[0].parse::<u32>().map_err(|e| {
            Error::malformed_record(number, format!("bad id {:?}: {}", fields[0], e))
        })?;
        let x = parse_coordinate(fields[1], number)?;
        let y = parse_coordinate(fields[2], number)?;

        points.push(Point::new(id, x, y));
    }

    Ok(points)
}

fn parse_coordinate(field: &str, line: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|e| {
        Error::malformed_record(line, format!("bad coordinate {:?}: {}", field, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_space_and_tab_delimited_records() {
        let input = "1 0 0\n2\t10\t20\n3   5.5 -7\n";
        let points = parse_points(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].id, 1);
        assert_eq!(points[1].x, 10.0);
        assert_eq!(points[2].y, -7.0);
    }

    #[test]
    fn test_skips_blank_lines() {
        let input = "1 0 0\n\n  \n2 1 1\n";
        let points = parse_points(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_rejects_wrong_field_count_with_line_number() {
        let input = "1 0 0\n2 1\n";
        match parse_points(input.as_bytes()) {
            Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unparseable_coordinate() {
        let input = "1 zero 0\n";
        match parse_points(input.as_bytes()) {
            Err(Error::MalformedRecord { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("coordinate"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_read_points_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 0 0\n2 1 0\n3 2 0\n").unwrap();

        let points = read_points(file.path()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].x, 2.0);
    }
}
