use crate::game::{Board, Cell, Player, COLS, ROWS, WINDOW};

/// Value of a decided game, far outside the heuristic range.
pub const WIN_VALUE: f64 = 1_000_000.0;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> f64;
}

/// Default heuristic: scans all 4-cell windows and scores threats, with a
/// bonus for occupying the two center columns.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
        if own == 4 {
            // Only reachable as a depth-0 fallback; real wins are caught by
            // the terminal leaf value.
            1000.0
        } else if own == 3 && empty == 1 {
            10.0
        } else if own == 2 && empty == 2 {
            5.0
        } else if opp == 3 && empty == 1 {
            // Blocking weighs heavier than the symmetric own-3 score.
            -80.0
        } else if opp == 2 && empty == 2 {
            -10.0
        } else {
            0.0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0.0;

        // Center bonus: the middle pair of columns participates in the most
        // windows.
        for col in [COLS / 2 - 1, COLS / 2] {
            for row in 0..ROWS {
                if board.get(row, col) == own_cell {
                    score += 5.0;
                }
            }
        }

        // Scan all 4-cell windows

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..WINDOW {
                    match board.get(row, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..WINDOW {
                    match board.get(row + i, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..WINDOW {
                    match board.get(row + i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in WINDOW - 1..ROWS {
            for col in 0..=COLS - WINDOW {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..WINDOW {
                    match board.get(row - i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}

/// Leaf evaluation shared by both search variants, from Red's perspective:
/// a decided game dominates everything, a full board draws at zero, and an
/// undecided depth-0 leaf falls back to the net heuristic
/// `evaluate(Red) - evaluate(Yellow)`.
pub fn leaf_value(board: &Board, heuristic: &dyn Heuristic) -> f64 {
    if board.has_four_in_row(Cell::Red) {
        WIN_VALUE
    } else if board.has_four_in_row(Cell::Yellow) {
        -WIN_VALUE
    } else if board.is_full() {
        0.0
    } else {
        heuristic.evaluate(board, Player::Red) - heuristic.evaluate(board, Player::Yellow)
    }
}
