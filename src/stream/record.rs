use thiserror::Error;

/// Errors raised while interpreting decomposition output lines.
///
/// Only these two shapes exist: a comma-bearing line whose fields are not
/// two floats, and a trailing timing line that is not a single float.
/// Everything else a stream can contain is either a valid record or a
/// skippable opaque line.
#[derive(Debug, Error, PartialEq)]
pub enum StreamError {
    #[error("Bad coordinate line: {content:?}")]
    BadCoordinate { content: String },
    #[error("Bad timing value: {content:?}")]
    BadTiming { content: String },
}

/// One classified line of a multi-polygon stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Blank line: closes the polygon block in progress.
    Separator,
    /// A `x,y` vertex. Whitespace around either field is tolerated, so both
    /// `1.0,2.0` and `1.0, 2.0` parse.
    Coordinate { x: f64, y: f64 },
    /// Non-blank line without a comma. The decomposer's trailing timing
    /// line arrives as one of these; the renderer skips them.
    Opaque(String),
}

/// Classify one input line by its comma discriminant: blank means
/// separator, comma means coordinate pair, anything else is opaque.
///
/// A line that contains a comma but does not split into exactly two floats
/// is an error, never an opaque line.
pub fn classify_line(line: &str) -> Result<Record, StreamError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Record::Separator);
    }
    if !trimmed.contains(',') {
        return Ok(Record::Opaque(trimmed.to_string()));
    }

    let bad = || StreamError::BadCoordinate {
        content: trimmed.to_string(),
    };
    let mut fields = trimmed.split(',');
    let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(bad());
    };
    let x = first.trim().parse::<f64>().map_err(|_| bad())?;
    let y = second.trim().parse::<f64>().map_err(|_| bad())?;
    Ok(Record::Coordinate { x, y })
}

/// Parse a decomposition file's trailing timing line: one float, elapsed
/// seconds.
pub fn parse_timing(line: &str) -> Result<f64, StreamError> {
    let trimmed = line.trim();
    trimmed.parse::<f64>().map_err(|_| StreamError::BadTiming {
        content: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_separators() {
        assert_eq!(classify_line("").unwrap(), Record::Separator);
        assert_eq!(classify_line("   \t").unwrap(), Record::Separator);
    }

    #[test]
    fn test_coordinate_with_and_without_space() {
        assert_eq!(
            classify_line("1.5,2.25").unwrap(),
            Record::Coordinate { x: 1.5, y: 2.25 }
        );
        assert_eq!(
            classify_line("0.125, -3.5").unwrap(),
            Record::Coordinate { x: 0.125, y: -3.5 }
        );
    }

    #[test]
    fn test_comma_free_line_is_opaque() {
        assert_eq!(
            classify_line("42.37").unwrap(),
            Record::Opaque("42.37".to_string())
        );
        assert_eq!(
            classify_line("done").unwrap(),
            Record::Opaque("done".to_string())
        );
    }

    #[test]
    fn test_malformed_coordinate_lines_fail() {
        assert!(classify_line("1.0,abc").is_err());
        assert!(classify_line("1.0,2.0,3.0").is_err());
        assert!(classify_line("1.0,").is_err());
        assert!(classify_line(",").is_err());
    }

    #[test]
    fn test_parse_timing() {
        assert_eq!(parse_timing("42.37").unwrap(), 42.37);
        assert_eq!(parse_timing("  0.001 ").unwrap(), 0.001);
        assert!(parse_timing("fast").is_err());
        assert!(parse_timing("").is_err());
    }
}
