//! Plain-text vector format
//!
//! One value per line, fixed number of decimal places, no header. Values
//! that have no decimal rendering are written as `inf`, `-inf` and `nan`.
//! This is the format the independent reference implementation reads and
//! writes, so it has to stay byte-compatible.

use dist_core::{Error, NumericVector, Result};
use std::io;

/// Decimal places written by default
pub const DEFAULT_PRECISION: usize = 6;

/// How vectors are rendered to text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistencePolicy {
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PersistencePolicy {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Text rendering of a single value
    pub fn format_value(&self, value: f64) -> String {
        if value.is_nan() {
            "nan".to_string()
        } else if value == f64::INFINITY {
            "inf".to_string()
        } else if value == f64::NEG_INFINITY {
            "-inf".to_string()
        } else {
            format!("{:.*}", self.precision, value)
        }
    }

    /// The value a reader gets back after `value` is persisted
    pub fn quantize(&self, value: f64) -> f64 {
        parse_value(&self.format_value(value)).unwrap_or(f64::NAN)
    }

    /// Write `vector` to `writer`, one value per line
    pub fn write<W: io::Write>(&self, writer: W, vector: &NumericVector) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        for &value in vector {
            wtr.write_record([self.format_value(value)])?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Render `vector` to a string
    pub fn to_text(&self, vector: &NumericVector) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, vector)?;
        String::from_utf8(buffer)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Parse one persisted value
///
/// Accepts anything `f64::from_str` does, which covers the `inf`, `-inf`
/// and `nan` spellings in any case.
pub fn parse_value(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Read a vector written in the plain-text format
///
/// Blank lines are skipped. A line with more than one field is a
/// `Schema` error; a field that is not a number is a `Parse` error.
/// The result carries no grid descriptor.
pub fn read<R: io::Read>(reader: R) -> Result<NumericVector> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(values.len() + 1);
        if record.len() != 1 {
            return Err(Error::Schema(format!(
                "Line {line}: expected one value, found {} fields",
                record.len()
            )));
        }
        let field = &record[0];
        let value = parse_value(field).ok_or_else(|| Error::Parse {
            line,
            value: field.to_string(),
        })?;
        values.push(value);
    }
    Ok(NumericVector::from_values(values))
}

/// Read a vector from a string
pub fn from_text(text: &str) -> Result<NumericVector> {
    read(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_six_decimal_places() {
        let policy = PersistencePolicy::default();
        let vector = NumericVector::from_values(vec![0.0, 1.0 / 3.0, -2.5, 1234.56789]);
        let text = policy.to_text(&vector).unwrap();
        assert_eq!(text, "0.000000\n0.333333\n-2.500000\n1234.567890\n");
    }

    #[test]
    fn test_non_finite_spelling() {
        let policy = PersistencePolicy::default();
        let vector = NumericVector::from_values(vec![f64::NEG_INFINITY, f64::INFINITY, f64::NAN]);
        let text = policy.to_text(&vector).unwrap();
        assert_eq!(text, "-inf\ninf\nnan\n");

        let back = from_text(&text).unwrap();
        assert_eq!(back.values()[0], f64::NEG_INFINITY);
        assert_eq!(back.values()[1], f64::INFINITY);
        assert!(back.values()[2].is_nan());
    }

    #[test]
    fn test_read_tolerates_other_spellings() {
        let vector = from_text("1\n\n  2.5 \nInf\n-infinity\nNaN\n1e-3\n").unwrap();
        assert_eq!(vector.len(), 6);
        assert_eq!(vector.values()[1], 2.5);
        assert_eq!(vector.values()[2], f64::INFINITY);
        assert_eq!(vector.values()[3], f64::NEG_INFINITY);
        assert!(vector.values()[4].is_nan());
        assert_eq!(vector.values()[5], 0.001);
        assert!(vector.grid().is_none());
    }

    #[test]
    fn test_parse_error_reports_line() {
        match from_text("0.1\n0.2\nabc\n") {
            Err(Error::Parse { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_fields_is_schema_error() {
        assert!(matches!(from_text("0,1.5\n"), Err(Error::Schema(_))));
    }

    #[test]
    fn test_quantize() {
        let policy = PersistencePolicy::default();
        assert_abs_diff_eq!(policy.quantize(0.123_456_789), 0.123_457, epsilon = 1e-15);
        assert_eq!(policy.quantize(f64::INFINITY), f64::INFINITY);

        let coarse = PersistencePolicy::new(2);
        assert_eq!(coarse.format_value(1.23456), "1.23");
        assert_abs_diff_eq!(coarse.quantize(1.23456), 1.23, epsilon = 1e-15);
    }

    #[test]
    fn test_empty_vector() {
        let policy = PersistencePolicy::default();
        let text = policy.to_text(&NumericVector::from_values(vec![])).unwrap();
        assert!(text.is_empty());
        assert!(from_text(&text).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn prop_quantize_within_half_unit(x in -1e6..1e6f64) {
            let policy = PersistencePolicy::default();
            let error = (policy.quantize(x) - x).abs();
            prop_assert!(error <= 0.5e-6 + 1e-12 * x.abs(), "{} -> {}", x, policy.quantize(x));
        }
    }
}
