use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A graph must contain at least one vertex.
    InvalidVertexCount(usize),

    /// Indicates an attempt to access a vertex index that exceeds the graph size (N).
    VertexOutOfBounds(usize),

    /// Edge weights must be finite; "no edge" is expressed by leaving the edge out.
    InvalidWeight(f64),

    /// Edge density must be a finite probability in the closed interval [0, 1].
    InvalidDensity(f64),

    /// The inclusive weight bounds are inverted (`min > max`).
    InvalidWeightRange { min: i64, max: i64 },

    /// A row of the supplied matrix does not match the number of rows.
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidVertexCount(n) => {
                write!(f, "Vertex count must be at least 1, got {}.", n)
            }

            Error::VertexOutOfBounds(v) => write!(f, "Vertex index {} is out of bounds.", v),

            Error::InvalidWeight(w) => write!(f, "Edge weight must be finite, got {}.", w),

            Error::InvalidDensity(d) => {
                write!(f, "Density must be within [0.0, 1.0], got {}.", d)
            }

            Error::InvalidWeightRange { min, max } => write!(
                f,
                "Weight range is empty: min ({}) is greater than max ({}).",
                min, max
            ),

            Error::NonSquareMatrix {
                row,
                expected,
                found,
            } => write!(
                f,
                "Matrix is not square: row {} has {} entries, expected {}.",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let msg = Error::NonSquareMatrix {
            row: 2,
            expected: 3,
            found: 1,
        }
        .to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("expected 3"));

        assert_eq!(
            Error::InvalidDensity(1.5).to_string(),
            "Density must be within [0.0, 1.0], got 1.5."
        );
        assert_eq!(
            Error::InvalidWeight(f64::NAN).to_string(),
            "Edge weight must be finite, got NaN."
        );
    }
}
