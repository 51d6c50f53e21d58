//! Matchup Table
//!
//! Full pairwise outcome matrix for a catalog. Row = first move,
//! column = second move, cell = outcome for the row move.

use serde::Serialize;

use super::catalog::{MoveCatalog, MoveIndex};
use super::rules::{resolve, Outcome};

/// Precomputed `n x n` outcome matrix.
///
/// Pure function of the catalog; rebuilding it is always safe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchupTable {
    catalog: MoveCatalog,
    /// Row-major cells.
    cells: Vec<Outcome>,
}

impl MatchupTable {
    /// Build the matrix for `catalog`.
    pub fn build(catalog: &MoveCatalog) -> Self {
        let n = catalog.len();
        let mut cells = Vec::with_capacity(n * n);

        for row in catalog.iter() {
            for column in catalog.iter() {
                // Diagonal is a draw by construction
                let outcome = if row == column {
                    Outcome::Draw
                } else {
                    resolve(row, column, catalog)
                };
                cells.push(outcome);
            }
        }

        Self {
            catalog: catalog.clone(),
            cells,
        }
    }

    /// Catalog the table was built from.
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.catalog.len()
    }

    /// Outcome for `row` against `column`.
    pub fn get(&self, row: MoveIndex, column: MoveIndex) -> Option<Outcome> {
        let n = self.size();
        if row >= n || column >= n {
            return None;
        }
        Some(self.cells[row * n + column])
    }

    /// One row of the matrix.
    pub fn row(&self, row: MoveIndex) -> Option<&[Outcome]> {
        let n = self.size();
        if row >= n {
            return None;
        }
        Some(&self.cells[row * n..(row + 1) * n])
    }

    /// Iterate `(move name, row cells)` in catalog order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> + '_ {
        self.catalog.iter().zip(self.cells.chunks(self.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::resolve_index;

    #[test]
    fn test_diagonal_is_draw() {
        let catalog = MoveCatalog::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let table = MatchupTable::build(&catalog);
        for i in 0..table.size() {
            assert_eq!(table.get(i, i), Some(Outcome::Draw));
        }
    }

    #[test]
    fn test_matches_resolver() {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        let table = MatchupTable::build(&catalog);
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(table.get(i, j), Some(resolve_index(i, j, 5)));
            }
        }
    }

    #[test]
    fn test_antisymmetric() {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors"]).unwrap();
        let table = MatchupTable::build(&catalog);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(table.get(i, j).map(Outcome::flip), table.get(j, i));
            }
        }
    }

    #[test]
    fn test_row_access() {
        let catalog = MoveCatalog::new(["Rock", "Paper", "Scissors"]).unwrap();
        let table = MatchupTable::build(&catalog);

        assert_eq!(
            table.row(0),
            Some(&[Outcome::Draw, Outcome::Win, Outcome::Lose][..])
        );
        assert!(table.row(3).is_none());
        assert!(table.get(0, 3).is_none());

        let names: Vec<&str> = table.rows().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let catalog = MoveCatalog::new(["x", "y", "z"]).unwrap();
        assert_eq!(MatchupTable::build(&catalog), MatchupTable::build(&catalog));
    }
}
