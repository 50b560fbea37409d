use std::fmt;
use thiserror::Error;

/// Smallest accepted side length. Anything below cannot hold a run of four.
pub const MIN_SIZE: usize = 4;

/// The nitrogenous bases a row may contain.
pub const BASES: [u8; 4] = [b'A', b'T', b'C', b'G'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("DNA sequence is missing")]
    Missing,

    #[error("DNA matrix must be at least 4x4, got {size} rows")]
    TooSmall { size: usize },

    #[error("Row {row} is missing (matrix must be NxN)")]
    MissingRow { row: usize },

    #[error("Row {row} has length {found}, expected {expected} (matrix must be NxN)")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row} has invalid base '{symbol}' at column {col} (allowed: A, T, C, G)")]
    InvalidBase { row: usize, col: usize, symbol: char },
}

/// A validated, square DNA matrix stored row-major in a flat buffer.
///
/// The only way to obtain one is through validation, so every `Grid`
/// upholds `rows == cols == size >= MIN_SIZE` over the `BASES` alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

/// Validates a nullable payload, as decoded from `{"dna": [..]}`.
///
/// Never panics: malformed input comes back as the `Err` describing the
/// first rule it breaks.
pub fn validate(rows: Option<&[Option<String>]>) -> Result<Grid, ValidationError> {
    let rows = rows.ok_or(ValidationError::Missing)?;
    check_rows(rows.iter().map(|r| r.as_deref()))
}

fn check_rows<'a, I>(rows: I) -> Result<Grid, ValidationError>
where
    I: ExactSizeIterator<Item = Option<&'a str>>,
{
    let size = rows.len();
    if size < MIN_SIZE {
        return Err(ValidationError::TooSmall { size });
    }

    let mut cells = Vec::with_capacity(size * size);

    for (row, line) in rows.enumerate() {
        let line = line.ok_or(ValidationError::MissingRow { row })?;

        let found = line.chars().count();
        if found != size {
            return Err(ValidationError::RowLength {
                row,
                expected: size,
                found,
            });
        }

        if let Some((col, symbol)) = line.chars().enumerate().find(|(_, ch)| !is_base(*ch)) {
            return Err(ValidationError::InvalidBase { row, col, symbol });
        }

        cells.extend_from_slice(line.as_bytes());
    }

    Ok(Grid { size, cells })
}

pub fn is_base(ch: char) -> bool {
    ch.is_ascii() && BASES.contains(&(ch as u8))
}

impl Grid {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ValidationError> {
        check_rows(rows.iter().map(|r| Some(r.as_ref())))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.cells[r * self.size + c]
    }

    pub fn row(&self, r: usize) -> &[u8] {
        let start = r * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|r| String::from_utf8_lossy(r).into_owned())
            .collect()
    }

    /// Mirrors the matrix across its main diagonal.
    pub fn transpose(&self) -> Grid {
        let n = self.size;
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..n {
            for c in 0..n {
                cells.push(self.get(c, r));
            }
        }
        Grid { size: n, cells }
    }

    /// Mirrors the matrix left to right.
    pub fn flip_horizontal(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.rows() {
            cells.extend(row.iter().rev());
        }
        Grid {
            size: self.size,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_row_reports_position() {
        let rows = vec![
            Some("ATGC".to_string()),
            None,
            Some("TTAT".to_string()),
            Some("AGAC".to_string()),
        ];
        assert_eq!(
            validate(Some(rows.as_slice())),
            Err(ValidationError::MissingRow { row: 1 })
        );
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let g = Grid::from_rows(&["AAAA", "TTTT", "CCCC", "GGGG"]).unwrap();
        let t = g.transpose();
        assert_eq!(t.to_rows(), vec!["ATCG"; 4]);
        assert_eq!(t.transpose(), g);
    }
}
