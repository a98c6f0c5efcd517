use crate::board::{Board, Cell, Side, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won(Side, WinningLine),
    Drawn,
}

impl RoundOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side, _) => Some(*side),
            _ => None,
        }
    }
}

/// Reads the board and reports the first complete line, a draw, or neither.
pub fn evaluate(board: &Board) -> RoundOutcome {
    for line in Board::all_winning_lines() {
        let [a, b, c] = line.cells;
        if let Cell::Filled(side) = board.occupant_at(a.0, a.1) {
            if board.occupant_at(b.0, b.1) == Cell::Filled(side)
                && board.occupant_at(c.0, c.1) == Cell::Filled(side)
            {
                return RoundOutcome::Won(side, *line);
            }
        }
    }

    if board.is_full() {
        RoundOutcome::Drawn
    } else {
        RoundOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::WINNING_LINES;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            for (col, ch) in text.chars().enumerate() {
                match ch {
                    'O' => board.place(row, col, Side::Human).unwrap(),
                    'X' => board.place(row, col, Side::Opponent).unwrap(),
                    _ => {},
                }
            }
        }
        board
    }

    #[test]
    fn test_in_progress() {
        assert_eq!(evaluate(&Board::new()), RoundOutcome::InProgress);
        let board = board_from(["OX.", ".O.", "X.."]);
        assert_eq!(evaluate(&board), RoundOutcome::InProgress);
    }

    #[test]
    fn test_won() {
        let board = board_from(["O..", ".O.", "..O"]);
        assert_eq!(evaluate(&board), RoundOutcome::Won(Side::Human, WINNING_LINES[6]));

        let board = board_from(["O.X", "O.X", "..X"]);
        assert_eq!(evaluate(&board), RoundOutcome::Won(Side::Opponent, WINNING_LINES[5]));

        let board = board_from(["..X", ".X.", "X.."]);
        assert_eq!(evaluate(&board), RoundOutcome::Won(Side::Opponent, WINNING_LINES[7]));
    }

    #[test]
    fn test_won_on_full_board_is_not_drawn() {
        let board = board_from(["XOX", "OXO", "OXX"]);
        assert_eq!(evaluate(&board), RoundOutcome::Won(Side::Opponent, WINNING_LINES[6]));
    }

    #[test]
    fn test_drawn() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), RoundOutcome::Drawn);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // unreachable in alternating play, but must resolve deterministically
        let board = board_from(["XXX", "OOO", "..."]);
        assert_eq!(evaluate(&board), RoundOutcome::Won(Side::Opponent, WINNING_LINES[0]));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = board_from(["OX.", "...", "..."]);
        let before = board.clone();
        evaluate(&board);
        assert_eq!(board, before);
    }

    fn explore(board: &Board, to_move: Side, finished: &mut usize) {
        let outcome = evaluate(board);
        if let RoundOutcome::Won(side, line) = outcome {
            assert!(board.count(side) >= 3);
            assert!(line.cells.iter().all(|&(r, c)| board.occupant_at(r, c) == Cell::Filled(side)));
            *finished += 1;
            return;
        }
        if board.is_full() {
            assert_eq!(outcome, RoundOutcome::Drawn);
            *finished += 1;
            return;
        }
        assert_eq!(outcome, RoundOutcome::InProgress);

        for (row, col) in board.empty_cells() {
            let mut next = board.clone();
            next.place(row, col, to_move).unwrap();
            explore(&next, to_move.other(), finished);
        }
    }

    #[test]
    fn test_every_legal_game() {
        let mut finished = 0;
        explore(&Board::new(), Side::Human, &mut finished);
        assert_eq!(finished, 255168);
    }
}
