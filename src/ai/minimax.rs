use crate::game::{Board, Cell, GameState, RandomSource, StdRandom};

use super::agent::Agent;
use super::heuristic::{leaf_value, Heuristic, WindowHeuristic};

/// Depth-limited minimax with alpha-beta pruning, from Red's perspective.
///
/// This is the dice-blind baseline: move generation always spans the full
/// column range, regardless of any dice cap in force for the real turn.
/// Returns the chosen column (`None` at a leaf or when no column is open)
/// and the backed-up value. Equal-valued columns are tie-broken by a fair
/// coin flip from `random`.
///
/// The board is mutated in place (apply, recurse, undo) and is restored to
/// its input state before returning.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    heuristic: &dyn Heuristic,
    random: &mut dyn RandomSource,
) -> (Option<usize>, f64) {
    if depth == 0 || board.is_terminal() {
        return (None, leaf_value(board, heuristic));
    }

    // Full 0..=6 range: this variant deliberately ignores dice caps.
    let moves = board.reachable_columns(6);
    if moves.is_empty() {
        return (None, leaf_value(board, heuristic));
    }

    let piece = if maximizing { Cell::Red } else { Cell::Yellow };
    let mut column = moves[random.pick(moves.len())];
    let mut value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for &col in &moves {
        let Some(row) = board.drop_piece(col, piece) else {
            continue;
        };
        let (_, score) = minimax(board, depth - 1, alpha, beta, !maximizing, heuristic, random);
        board.undo_drop(row, col);

        let improved = if maximizing {
            score > value
        } else {
            score < value
        };
        if improved {
            value = score;
            column = col;
        } else if score == value && random.coin_flip() {
            column = col;
        }

        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if alpha >= beta {
            break;
        }
    }

    (Some(column), value)
}

/// Agent wrapping the alpha-beta search. Ignores the turn's dice roll by
/// design; it exists as the unrestricted baseline next to [`super::ExpectimaxAgent`].
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    random: Box<dyn RandomSource>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_parts(depth, Box::new(WindowHeuristic), Box::new(StdRandom::new()))
    }

    /// Deterministic agent for reproducible matches.
    pub fn seeded(depth: usize, seed: u64) -> Self {
        Self::with_parts(
            depth,
            Box::new(WindowHeuristic),
            Box::new(StdRandom::seeded(seed)),
        )
    }

    pub fn with_parts(
        depth: usize,
        heuristic: Box<dyn Heuristic>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            random,
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState, _dice: u8) -> Option<usize> {
        let mut board = *state.board();
        let (column, _) = minimax(
            &mut board,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            state.current_player().maximizes(),
            self.heuristic.as_ref(),
            self.random.as_mut(),
        );
        column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::WIN_VALUE;
    use crate::game::Player;

    fn search(board: &mut Board, depth: usize, maximizing: bool) -> (Option<usize>, f64) {
        let mut random = StdRandom::seeded(7);
        minimax(
            board,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            maximizing,
            &WindowHeuristic,
            &mut random,
        )
    }

    #[test]
    fn empty_board_depth_one_returns_in_range() {
        let mut board = Board::new();
        let (column, value) = search(&mut board, 1, true);
        let column = column.expect("a column must be chosen");
        assert!(column < 7);
        assert!(value.is_finite());
        assert_eq!(board, Board::new(), "search must restore the board");
    }

    #[test]
    fn takes_immediate_win() {
        // Red threatens at cols 0..=2; col 3 completes four in a row
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
            board.drop_piece(col, Cell::Yellow).unwrap();
        }

        let (column, value) = search(&mut board, 1, true);
        assert_eq!(column, Some(3));
        assert_eq!(value, WIN_VALUE);
    }

    #[test]
    fn blocks_opponent_win() {
        // Yellow owns the bottom of cols 0..=2; Red must answer at col 3
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        board.drop_piece(6, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Red).unwrap();

        let (column, _) = search(&mut board, 2, true);
        assert_eq!(column, Some(3));
    }

    #[test]
    fn prefers_win_over_block() {
        // Red on the bottom row, Yellow stacked above: both threaten col 3
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
            board.drop_piece(col, Cell::Yellow).unwrap();
        }

        let (column, value) = search(&mut board, 3, true);
        assert_eq!(column, Some(3));
        assert_eq!(value, WIN_VALUE);
    }

    #[test]
    fn minimizing_side_takes_its_win() {
        let mut board = Board::new();
        for col in 2..5 {
            board.drop_piece(col, Cell::Yellow).unwrap();
            board.drop_piece(col, Cell::Red).unwrap();
        }

        let (column, value) = search(&mut board, 1, false);
        assert!(column == Some(1) || column == Some(5), "got {column:?}");
        assert_eq!(value, -WIN_VALUE);
    }

    #[test]
    fn seeded_searches_are_reproducible() {
        let board = Board::new();
        let results: Vec<Option<usize>> = (0..3)
            .map(|_| {
                let mut b = board;
                let mut random = StdRandom::seeded(99);
                minimax(
                    &mut b,
                    4,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    true,
                    &WindowHeuristic,
                    &mut random,
                )
                .0
            })
            .collect();
        assert_eq!(results[0], results[1]);
        assert_eq!(results[1], results[2]);
    }

    #[test]
    fn agent_ignores_dice_cap() {
        // Winning column 3 stays available even under a dice roll of 0
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }
        assert_eq!(state.current_player(), Player::Red);

        let mut agent = MinimaxAgent::seeded(4, 11);
        assert_eq!(agent.select_column(&state, 0), Some(3));
    }

    #[test]
    fn beats_random_agent() {
        use crate::ai::RandomAgent;
        use crate::game::GameOutcome;

        let games_per_color: u64 = 10;
        let mut minimax_wins: u64 = 0;

        for game in 0..games_per_color * 2 {
            let minimax_plays_red = game % 2 == 0;
            let mut minimax_agent = MinimaxAgent::seeded(4, game);
            let mut random_agent = RandomAgent::seeded(game + 1000);
            let mut dice = StdRandom::seeded(game + 2000);
            let mut state = GameState::initial();

            while !state.is_terminal() {
                let roll = dice.roll_dice();
                let red_to_move = state.current_player() == Player::Red;
                let column = if red_to_move == minimax_plays_red {
                    minimax_agent.select_column(&state, roll)
                } else {
                    random_agent.select_column(&state, roll)
                };
                state = state.apply_move(column.unwrap()).unwrap();
            }

            let minimax_side = if minimax_plays_red {
                Player::Red
            } else {
                Player::Yellow
            };
            if state.outcome() == Some(GameOutcome::Winner(minimax_side)) {
                minimax_wins += 1;
            }
        }

        let total = games_per_color * 2;
        assert!(
            minimax_wins * 10 >= total * 8,
            "minimax should beat random >=80% of the time, got {minimax_wins}/{total}"
        );
    }
}
