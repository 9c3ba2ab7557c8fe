use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on the column dice; rolls are uniform over `0..=6`.
pub const DICE_FACES: u8 = 7;

/// Injectable source of every random decision the engine makes: the
/// per-turn dice roll, the 50% tie-break between equally scored columns,
/// and the pre-seeding of a decision node's chosen column. Injecting it
/// keeps search outcomes reproducible under test.
pub trait RandomSource {
    /// Uniform dice roll in `[0, 6]`, capping reachable columns for a turn.
    fn roll_dice(&mut self) -> u8;

    /// Fair coin flip, used to break exact score ties.
    fn coin_flip(&mut self) -> bool;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production [`RandomSource`] backed by a [`StdRng`].
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        StdRandom {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible matches and tests.
    pub fn seeded(seed: u64) -> Self {
        StdRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn roll_dice(&mut self) -> u8 {
        self.rng.random_range(0..DICE_FACES)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Scripted [`RandomSource`] for tests: dice rolls come from a fixed
/// sequence (repeating the last entry once exhausted), ties never flip,
/// and picks always take index 0.
#[cfg(test)]
pub struct ScriptedRandom {
    rolls: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn with_rolls(rolls: Vec<u8>) -> Self {
        assert!(!rolls.is_empty());
        ScriptedRandom { rolls, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn roll_dice(&mut self) -> u8 {
        let roll = self.rolls[self.next.min(self.rolls.len() - 1)];
        self.next += 1;
        roll
    }

    fn coin_flip(&mut self) -> bool {
        false
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_stay_in_range() {
        let mut random = StdRandom::new();
        for _ in 0..1000 {
            let roll = random.roll_dice();
            assert!(roll <= 6, "roll {roll} out of range");
        }
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut random = StdRandom::new();
        for len in 1..=7 {
            for _ in 0..100 {
                assert!(random.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        for _ in 0..50 {
            assert_eq!(a.roll_dice(), b.roll_dice());
            assert_eq!(a.coin_flip(), b.coin_flip());
            assert_eq!(a.pick(7), b.pick(7));
        }
    }

    #[test]
    fn test_scripted_rolls_repeat_last() {
        let mut random = ScriptedRandom::with_rolls(vec![2, 6]);
        assert_eq!(random.roll_dice(), 2);
        assert_eq!(random.roll_dice(), 6);
        assert_eq!(random.roll_dice(), 6);
    }
}
