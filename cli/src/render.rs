use sweeper_core::{Board, CellView, Coord, Coord2, Outcome, Session};

fn digits(n: Coord) -> usize {
    n.checked_ilog10().unwrap_or(0) as usize + 1
}

fn glyph(view: CellView, triggered: bool) -> char {
    match view {
        _ if triggered => 'X',
        CellView {
            covered: true,
            flagged: true,
            is_mine: Some(false),
            ..
        } => '!',
        CellView { flagged: true, .. } => 'F',
        CellView { covered: true, .. } => '#',
        CellView {
            is_mine: Some(true),
            ..
        } => '*',
        CellView {
            adjacent_mines: Some(0),
            ..
        } => '.',
        CellView {
            adjacent_mines: Some(count),
            ..
        } => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView { .. } => '?',
    }
}

/// Draws the board as a text grid with row and column numbers.
pub(crate) fn board(board: &Board) -> String {
    let (rows, cols) = board.size();
    let row_width = digits(rows - 1);
    let cell_width = digits(cols - 1) + 1;

    let mut out = String::new();
    out.push_str(&format!("{:row_width$}", ""));
    for col in 0..cols {
        out.push_str(&format!("{col:>cell_width$}"));
    }
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("{row:>row_width$}"));
        for col in 0..cols {
            let coords: Coord2 = (row, col);
            let triggered = board.triggered_mine() == Some(coords);
            let glyph = board
                .cell_view(coords)
                .map_or(' ', |view| glyph(view, triggered));
            out.push_str(&format!("{glyph:>cell_width$}"));
        }
        out.push('\n');
    }
    out
}

/// One line summary shown above the board.
pub(crate) fn status(session: &Session) -> String {
    let secs = session.elapsed().as_secs();
    match session.outcome() {
        Outcome::Playing => format!(
            "Mines left: {}  Click mode: {}  Time: {}s",
            session.board().mines_left(),
            session.click_mode(),
            secs
        ),
        Outcome::Won => format!("You won in {secs} seconds."),
        Outcome::Lost => "You lost.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{Difficulty, FixedPlacer};

    fn fixed(size: Coord2, mines: &[Coord2]) -> Board {
        Board::new(Difficulty::new(size.0, size.1, 0), FixedPlacer::new(mines)).unwrap()
    }

    #[test]
    fn covered_board_hides_everything() {
        let board = fixed((2, 3), &[(0, 0)]);
        assert_eq!(super::board(&board), "  0 1 2\n0 # # #\n1 # # #\n");
    }

    #[test]
    fn open_cells_show_counts_and_flags() {
        let mut board = fixed((2, 3), &[(0, 0)]);
        board.toggle_flag((0, 0));
        board.reveal_cell((0, 2));

        assert_eq!(super::board(&board), "  0 1 2\n0 F 1 .\n1 # 1 .\n");
    }

    #[test]
    fn lost_board_marks_triggered_mine_and_wrong_flags() {
        let mut board = fixed((2, 3), &[(0, 0), (1, 2)]);
        board.toggle_flag((1, 1));
        board.reveal_cell((0, 0));

        assert_eq!(super::board(&board), "  0 1 2\n0 X # #\n1 # ! *\n");
    }

    #[test]
    fn wide_boards_pad_columns() {
        let board = fixed((1, 11), &[]);
        let drawn = super::board(&board);
        assert!(drawn.starts_with("   0  1  2"));
        assert!(drawn.ends_with(" 10\n0  #  #  #  #  #  #  #  #  #  #  #\n"));
    }

    #[test]
    fn status_reports_outcome() {
        let board = fixed((1, 2), &[(0, 0)]);
        let mut session = Session::with_board(0, board);
        assert_eq!(
            status(&session),
            "Mines left: 1  Click mode: Clear  Time: 0s"
        );

        session.tick(std::time::Duration::from_secs(4));
        session.reveal((0, 1));
        assert_eq!(status(&session), "You won in 4 seconds.");
    }
}
