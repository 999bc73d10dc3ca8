/// What happened in one resolved round. Display layers render this
/// alongside the updated [`GameState`](super::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(number: u32, player: Move, opponent: Move) -> Self {
        Self {
            number,
            player,
            opponent,
            outcome: Outcome::from((player, opponent)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Round {:<3} {:>8} vs {:<8} {}",
            self.number, self.player, self.opponent, self.outcome
        )
    }
}

use super::moves::Move;
use super::outcome::Outcome;
use serde::Deserialize;
use serde::Serialize;
