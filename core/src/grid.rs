use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular `rows x cols` storage indexed by `(row, col)`.
///
/// [`Grid::get`] and [`Grid::get_mut`] are the bounds-checked accessors, out of range lookups are
/// simply absent. Indexing with `grid[coords]` panics on out of range coordinates and is meant for
/// coordinates that were already validated or came out of a [`NeighborIter`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    pub fn from_fn(size: Coord2, mut f: impl FnMut(Coord2) -> T) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            f((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn get(&self, coords: Coord2) -> Option<&T> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, coords: Coord2) -> Option<&mut T> {
        self.cells.get_mut(coords.to_nd_index())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<T> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T: Clone> Grid<T> {
    pub fn from_elem(size: Coord2, elem: T) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), elem),
        }
    }
}

impl<T> Index<Coord2> for Grid<T> {
    type Output = T;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl<T> IndexMut<Coord2> for Grid<T> {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn out_of_bounds_lookups_are_absent() {
        let mut grid = Grid::from_elem((2, 3), 0u8);

        assert_eq!(grid.get((1, 2)), Some(&0));
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.get((0, 3)), None);
        assert!(grid.get_mut((5, 5)).is_none());
    }

    #[test]
    fn coords_are_row_major() {
        let grid = Grid::from_fn((2, 2), |coords| coords);
        let coords: Vec<_> = grid.coords().collect();

        assert_eq!(coords, [(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid[(1, 0)], (1, 0));
        assert_eq!(grid.total_cells(), 4);
    }
}
