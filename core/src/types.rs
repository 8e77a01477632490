use lettergrid_protocol::WireCoords;
use ndarray::Array2;

use crate::*;

/// Single coordinate axis used for grid height, width and positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Letter stored in cells that hold nothing yet.
pub const BLANK: char = ' ';

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Converts backend coordinates, failing when they don't fit a [`Coord`].
pub fn coords_from_wire((row, col): WireCoords) -> Option<Coord2> {
    Some((row.try_into().ok()?, col.try_into().ok()?))
}

pub trait GridExt {
    /// Grid size as `(rows, columns)`.
    fn size(&self) -> Coord2;

    fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(PuzzleError::InvalidCoords)
        }
    }

    fn iter_coords(&self) -> CoordIter {
        CoordIter::new(self.size())
    }
}

impl<T> GridExt for Array2<T> {
    fn size(&self) -> Coord2 {
        let (rows, cols) = self.dim();
        (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        )
    }
}

/// Row-major walk over every position of a grid.
#[derive(Debug)]
pub struct CoordIter {
    size: Coord2,
    next: Option<Coord2>,
}

impl CoordIter {
    fn new(size: Coord2) -> Self {
        let next = (size.0 > 0 && size.1 > 0).then_some((0, 0));
        Self { size, next }
    }
}

impl Iterator for CoordIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (row, col) = current;
        self.next = if col + 1 < self.size.1 {
            Some((row, col + 1))
        } else if row + 1 < self.size.0 {
            Some((row + 1, 0))
        } else {
            None
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn coord_iter_walks_row_major() {
        let grid: Array2<char> = Array2::from_elem([2, 3], BLANK);

        let coords: Vec<_> = grid.iter_coords().collect();

        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn coord_iter_is_empty_for_empty_grid() {
        let grid: Array2<char> = Array2::from_elem([0, 3], BLANK);

        assert_eq!(grid.iter_coords().count(), 0);
    }

    #[test]
    fn validate_coords_rejects_out_of_range() {
        let grid: Array2<char> = Array2::from_elem([2, 2], BLANK);

        assert_eq!(grid.validate_coords((1, 1)), Ok((1, 1)));
        assert_eq!(grid.validate_coords((2, 0)), Err(PuzzleError::InvalidCoords));
    }

    #[test]
    fn wire_coords_must_fit() {
        assert_eq!(coords_from_wire((3, 4)), Some((3, 4)));
        assert_eq!(coords_from_wire((300, 0)), None);
    }
}
