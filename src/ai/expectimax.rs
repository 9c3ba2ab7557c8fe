use crate::game::{Board, GameState, Player, RandomSource, StdRandom};

use super::agent::Agent;
use super::heuristic::{leaf_value, Heuristic, WindowHeuristic};

/// Probability that a uniform dice roll in `[0, 6]` permits reaching each
/// column: column `c` is reachable whenever the roll is `>= c`, so
/// `p(c) = (7 - c) / 7`.
const COLUMN_PROBABILITY: [f64; 7] = [
    7.0 / 7.0,
    6.0 / 7.0,
    5.0 / 7.0,
    4.0 / 7.0,
    3.0 / 7.0,
    2.0 / 7.0,
    1.0 / 7.0,
];

/// Kind of expectimax node, tagged explicitly instead of the two-boolean
/// encoding that leaves ambiguous flag states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// `player` picks its best column: max for Red, min for Yellow.
    Decision(Player),
    /// `player`'s upcoming dice roll is unknown: value is the expectation
    /// over columns of `player`'s play there, weighted by reachability.
    Chance(Player),
}

/// Depth-limited expectimax modelling the dice-constrained game, from Red's
/// perspective.
///
/// The root enters as `Node::Decision(side_to_move)` with the real dice cap;
/// every deeper call passes `dice = None` and generates moves over the full
/// column range, since future turns are averaged by the chance nodes. After
/// each decision the next ply is a chance node for the opponent, and each
/// chance node resolves into a decision node for the same side.
///
/// If a dice cap leaves no reachable column, a fresh roll is drawn from
/// `random` and the same node is retried at the same depth: a mandatory
/// reroll, not a skipped turn. The board is restored before returning.
pub fn expectimax(
    board: &mut Board,
    depth: usize,
    node: Node,
    dice: Option<u8>,
    heuristic: &dyn Heuristic,
    random: &mut dyn RandomSource,
) -> (Option<usize>, f64) {
    if depth == 0 || board.is_terminal() {
        return (None, leaf_value(board, heuristic));
    }

    let moves = board.reachable_columns(dice.unwrap_or(6));
    if moves.is_empty() {
        return match dice {
            Some(_) => {
                let fresh = random.roll_dice();
                expectimax(board, depth, node, Some(fresh), heuristic, random)
            }
            // Unreachable for a non-terminal board, but the contract stands:
            // no move, terminal-style evaluation.
            None => (None, leaf_value(board, heuristic)),
        };
    }

    match node {
        Node::Decision(player) => {
            let piece = player.to_cell();
            let maximizing = player.maximizes();
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
                let (_, score) = expectimax(
                    board,
                    depth - 1,
                    Node::Chance(player.other()),
                    None,
                    heuristic,
                    random,
                );
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
                // No alpha-beta here: expectation nodes cannot be pruned
                // against a simple bound.
            }

            (Some(column), value)
        }
        Node::Chance(player) => {
            let piece = player.to_cell();
            let mut expected = 0.0;
            for &col in &moves {
                let Some(row) = board.drop_piece(col, piece) else {
                    continue;
                };
                let (_, score) = expectimax(
                    board,
                    depth - 1,
                    Node::Decision(player),
                    None,
                    heuristic,
                    random,
                );
                board.undo_drop(row, col);
                expected += COLUMN_PROBABILITY[col] * score;
            }
            (None, expected)
        }
    }
}

/// Agent wrapping the dice-aware expectimax. This is the mode the real game
/// uses: the turn's dice roll caps its root moves.
pub struct ExpectimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    random: Box<dyn RandomSource>,
}

impl ExpectimaxAgent {
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
        ExpectimaxAgent {
            depth,
            heuristic,
            random,
        }
    }
}

impl Agent for ExpectimaxAgent {
    fn select_column(&mut self, state: &GameState, dice: u8) -> Option<usize> {
        let mut board = *state.board();
        let (column, _) = expectimax(
            &mut board,
            self.depth,
            Node::Decision(state.current_player()),
            Some(dice),
            self.heuristic.as_ref(),
            self.random.as_mut(),
        );
        column
    }

    fn name(&self) -> &str {
        "Expectimax"
    }
}
