/// Result of a round, always from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub const fn all() -> &'static [Self] {
        &[Self::Win, Self::Lose, Self::Draw]
    }
    pub const fn banner(&self) -> &'static str {
        match self {
            Self::Win => "You Win!",
            Self::Lose => "You Lose!",
            Self::Draw => "It's a Draw!",
        }
    }
}

/// (player, opponent) -> outcome
impl From<(Move, Move)> for Outcome {
    fn from((player, opponent): (Move, Move)) -> Self {
        if player == opponent {
            Self::Draw
        } else if player.beats(&opponent) {
            Self::Win
        } else {
            Self::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Win => "win",
            Self::Lose => "lose",
            Self::Draw => "draw",
        })
    }
}

use super::moves::Move;
use serde::Deserialize;
use serde::Serialize;
