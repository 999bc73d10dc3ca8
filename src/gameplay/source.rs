//! Opponent move providers.
//!
//! The resolver never reaches for ambient randomness: whoever owns the
//! [`GameState`](super::GameState) also owns a [`Source`] and lends it to
//! each round. Production play uses [`Uniform`]; tests force the
//! opponent's hand with [`Scripted`] or a closure.

/// Something that picks the opponent's move. Implementations used for
/// real play must draw each of the three moves with probability 1/3,
/// independent of previous draws.
pub trait Source {
    fn draw(&mut self) -> Move;
}

impl<F> Source for F
where
    F: FnMut() -> Move,
{
    fn draw(&mut self) -> Move {
        self()
    }
}

/// Uniform draw over [`Move::all`] from any `rand` generator.
#[derive(Debug, Clone)]
pub struct Uniform<R = SmallRng>(R);

impl Uniform<SmallRng> {
    /// reproducible sequence of opponent moves
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    pub fn entropy() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> From<R> for Uniform<R> {
    fn from(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> Source for Uniform<R> {
    fn draw(&mut self) -> Move {
        Move::all()[self.0.random_range(0..Move::all().len())]
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end.
/// An empty script always plays [`Move::default`].
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    /// one of each move, in order: the balanced opponent
    pub fn balanced() -> Self {
        Self::from(Move::all())
    }
}

impl From<Vec<Move>> for Scripted {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves, cursor: 0 }
    }
}

impl From<&[Move]> for Scripted {
    fn from(moves: &[Move]) -> Self {
        Self::from(moves.to_vec())
    }
}

impl Source for Scripted {
    fn draw(&mut self) -> Move {
        match self.moves.len() {
            0 => Move::default(),
            n => {
                let next = self.moves[self.cursor % n];
                self.cursor = (self.cursor + 1) % n;
                next
            }
        }
    }
}

use super::moves::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
