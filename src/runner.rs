//! The turn loop: rolls the dice, asks each side's agent for a column,
//! applies it to the state machine, and reports every turn to an observer
//! for rendering.

use crate::ai::Agent;
use crate::error::MatchError;
use crate::game::{GameOutcome, GameState, Player, RandomSource};

/// One real move as it happened: who moved, what they rolled, where they
/// played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub player: Player,
    pub dice: u8,
    pub column: usize,
}

/// Play a single game to completion. The starting side is decided by a coin
/// flip from `dice`, each turn draws a fresh roll, and the observer sees
/// every applied turn together with the resulting state.
///
/// Agent misbehavior surfaces as a [`MatchError`]: returning no column on a
/// live board, or naming a full or out-of-range column. The dice cap is not
/// enforced here; the dice-blind minimax mode ignores it by design.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    dice: &mut dyn RandomSource,
    mut observer: impl FnMut(&TurnRecord, &GameState),
) -> Result<GameOutcome, MatchError> {
    let first = if dice.coin_flip() {
        Player::Red
    } else {
        Player::Yellow
    };
    let mut state = GameState::starting_with(first);

    while !state.is_terminal() {
        let roll = dice.roll_dice();
        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        let column = agent
            .select_column(&state, roll)
            .ok_or(MatchError::NoColumnChosen {
                player: player.name(),
            })?;

        if state.board().is_column_full(column) {
            return Err(MatchError::IllegalColumn {
                player: player.name(),
                column,
                open: state.legal_actions(),
            });
        }

        state = state
            .apply_move(column)
            .map_err(|_| MatchError::IllegalColumn {
                player: player.name(),
                column,
                open: Vec::new(),
            })?;

        let record = TurnRecord {
            player,
            dice: roll,
            column,
        };
        observer(&record, &state);
    }

    state.outcome().ok_or(MatchError::MissingOutcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{ExpectimaxAgent, RandomAgent};
    use crate::game::StdRandom;

    struct StubAgent(Option<usize>);

    impl Agent for StubAgent {
        fn select_column(&mut self, _state: &GameState, _dice: u8) -> Option<usize> {
            self.0
        }

        fn name(&self) -> &str {
            "Stub"
        }
    }

    #[test]
    fn test_random_game_completes() {
        let mut red = RandomAgent::seeded(1);
        let mut yellow = RandomAgent::seeded(2);
        let mut dice = StdRandom::seeded(3);

        let mut turns = 0;
        let outcome = play_game(&mut red, &mut yellow, &mut dice, |record, state| {
            turns += 1;
            assert!(record.dice <= 6);
            assert!(record.column < 7);
            assert!(state.legal_actions().len() <= 7);
        })
        .unwrap();

        assert!(turns <= 42, "a 6x7 board holds at most 42 moves");
        assert!(matches!(
            outcome,
            GameOutcome::Winner(_) | GameOutcome::Draw
        ));
    }

    #[test]
    fn test_expectimax_game_completes() {
        let mut red = ExpectimaxAgent::seeded(2, 10);
        let mut yellow = ExpectimaxAgent::seeded(2, 11);
        let mut dice = StdRandom::seeded(12);

        let outcome = play_game(&mut red, &mut yellow, &mut dice, |_, _| {});
        assert!(outcome.is_ok());
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let run = || {
            let mut red = ExpectimaxAgent::seeded(2, 20);
            let mut yellow = RandomAgent::seeded(21);
            let mut dice = StdRandom::seeded(22);
            let mut records = Vec::new();
            let outcome = play_game(&mut red, &mut yellow, &mut dice, |record, _| {
                records.push(*record);
            })
            .unwrap();
            (records, outcome)
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_out_of_range_column_is_an_error() {
        let mut red = StubAgent(Some(9));
        let mut yellow = StubAgent(Some(9));
        let mut dice = StdRandom::seeded(4);

        let err = play_game(&mut red, &mut yellow, &mut dice, |_, _| {}).unwrap_err();
        assert!(matches!(err, MatchError::IllegalColumn { column: 9, .. }));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut red = StubAgent(None);
        let mut yellow = StubAgent(None);
        let mut dice = StdRandom::seeded(5);

        let err = play_game(&mut red, &mut yellow, &mut dice, |_, _| {}).unwrap_err();
        assert!(matches!(err, MatchError::NoColumnChosen { .. }));
    }
}
