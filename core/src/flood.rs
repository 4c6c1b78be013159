use alloc::vec::Vec;

use crate::*;

impl Board {
    /// Opens `start` and, while zero-count cells are found, their covered neighbors.
    ///
    /// `start` must be a covered non-mine cell. Cells with a positive count are opened but not
    /// expanded and mines are never opened. Flagged cells reached by the flood are opened and lose
    /// their flag. Returns the opened cells in the order they were uncovered.
    pub(crate) fn flood_reveal(&mut self, start: Coord2) -> Vec<Coord2> {
        let mut opened = Vec::new();
        let mut to_visit = Vec::from([start]);

        while let Some(coords) = to_visit.pop() {
            let cell = self.cells[coords];
            // pushed more than once before being opened
            if !cell.covered || cell.is_mine() {
                continue;
            }

            if cell.flagged {
                self.cells[coords].flagged = false;
                self.flag_count -= 1;
            }
            self.uncover(coords);
            opened.push(coords);
            log::trace!("Opened {:?} with {:?}", coords, cell.adjacency);

            if cell.adjacency.is_zero() {
                to_visit.extend(
                    self.cells
                        .iter_neighbors(coords)
                        .filter(|&pos| self.cells[pos].covered && !self.cells[pos].is_mine()),
                );
            }
        }

        log::debug!("Flood from {:?} opened {} cells", start, opened.len());
        opened
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(Difficulty::new(size.0, size.1, 0), FixedPlacer::new(mines)).unwrap()
    }

    fn opened_set(board: &Board) -> BTreeSet<Coord2> {
        board
            .cells
            .coords()
            .filter(|&coords| !board.cells[coords].covered)
            .collect()
    }

    /// Cells reachable from `start` through zero-count cells, plus their direct neighbors.
    fn expected_region(board: &Board, start: Coord2) -> BTreeSet<Coord2> {
        let mut region = BTreeSet::from([start]);
        let mut stack = Vec::from([start]);
        while let Some(coords) = stack.pop() {
            if !board.cells[coords].adjacency.is_zero() {
                continue;
            }
            for pos in board.cells.iter_neighbors(coords) {
                if !board.cells[pos].is_mine() && region.insert(pos) {
                    stack.push(pos);
                }
            }
        }
        region
    }

    #[test]
    fn zero_region_stops_at_numbered_boundary() {
        // 0 0 1 .
        // 0 0 1 *
        // 1 1 2 .
        // . * . .
        let mut board = board((4, 4), &[(1, 3), (3, 1)]);

        let opened = board.flood_reveal((0, 0));

        let opened: BTreeSet<_> = opened.into_iter().collect();
        let expected = BTreeSet::from([
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ]);
        assert_eq!(opened, expected);
        assert!(board.cells[(0, 3)].covered);
        assert!(board.cells[(3, 3)].covered);
        assert_eq!(board.uncovered_count(), 9);
    }

    #[test]
    fn each_cell_opens_once() {
        let mut board = board((6, 6), &[]);

        let opened = board.flood_reveal((3, 3));

        assert_eq!(opened.len(), 36);
        assert_eq!(opened.iter().collect::<BTreeSet<_>>().len(), 36);
        assert_eq!(board.covered_count(), 0);
    }

    #[test]
    fn flood_opens_flagged_cells_and_clears_their_flag() {
        let mut board = board((3, 3), &[]);
        board.toggle_flag((1, 1));
        board.toggle_flag((2, 2));

        let opened = board.flood_reveal((0, 0));

        assert_eq!(opened.len(), 9);
        assert!(!board.cells[(1, 1)].covered);
        assert!(!board.cells[(1, 1)].flagged);
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.mines_left(), 0);
    }

    #[test]
    fn flag_on_a_chokepoint_does_not_stop_the_flood() {
        let mut board = board((1, 3), &[]);
        board.toggle_flag((0, 1));

        let result = board.reveal_cell((0, 0));

        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(result.opened.len(), 3);
        assert_eq!(board.covered_count(), 0);
        assert_eq!(board.flag_count(), 0);
    }

    #[test]
    fn flags_on_mines_survive_the_flood() {
        let mut board = board((3, 3), &[(2, 2)]);
        board.toggle_flag((2, 2));

        let opened = board.flood_reveal((0, 0));

        assert_eq!(opened.len(), 8);
        assert!(board.cells[(2, 2)].covered);
        assert!(board.cells[(2, 2)].flagged);
        assert_eq!(board.flag_count(), 1);
    }

    #[test]
    fn flood_matches_reachability_on_random_boards() {
        for seed in 0..30 {
            let mut board = new_board(12, 9, 14, seed).unwrap();
            let Some(start) = board
                .cells
                .coords()
                .find(|&coords| board.cells[coords].adjacency.is_zero())
            else {
                continue;
            };
            let expected = expected_region(&board, start);

            board.flood_reveal(start);

            assert_eq!(opened_set(&board), expected, "seed {seed}");
        }
    }

    #[test]
    fn large_open_board_does_not_recurse() {
        let mut board = board((255, 255), &[(254, 254)]);

        let opened = board.flood_reveal((0, 0));

        assert_eq!(opened.len(), 255 * 255 - 1);
    }
}
