/// Scores, round counter, and the busy gate.
///
/// The state is a plain value owned by whoever drives the game. It moves
/// through two phases: [`Phase::Idle`], where a new move is accepted, and
/// [`Phase::Resolving`], entered by [`GameState::resolve`] and left by
/// [`GameState::settle`] once the round has been shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player_score: Score,
    pub opponent_score: Score,
    pub round_number: u32,
    pub busy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Resolving,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            round_number: 1,
            busy: false,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.busy {
            true => Phase::Resolving,
            false => Phase::Idle,
        }
    }

    /// Play one round against a move drawn from `source`.
    ///
    /// Leaves the state in [`Phase::Resolving`]; the caller clears it with
    /// [`GameState::settle`] when presentation of the round is finished.
    /// A move submitted while resolving is rejected and nothing changes.
    pub fn resolve(&mut self, player: Move, source: &mut impl Source) -> Result<Round, GameError> {
        if self.busy {
            log::debug!("rejecting {} during round {}", player, self.round_number);
            return Err(GameError::Busy);
        }
        self.busy = true;
        let round = Round::new(self.round_number, player, source.draw());
        match round.outcome {
            Outcome::Win => self.player_score = self.player_score.saturating_add(1),
            Outcome::Lose => self.opponent_score = self.opponent_score.saturating_add(1),
            Outcome::Draw => {}
        }
        self.round_number = self.round_number.saturating_add(1);
        log::debug!("{}", round);
        Ok(round)
    }

    /// Resolving -> Idle
    pub fn settle(&mut self) {
        self.busy = false;
    }

    /// Back to the initial scores and round. Allowed mid-round: an
    /// in-flight round is abandoned and the gate reopens.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Round {}  You {} - {} Opponent",
            self.round_number, self.player_score, self.opponent_score
        )
    }
}

use super::error::GameError;
use super::moves::Move;
use super::outcome::Outcome;
use super::round::Round;
use super::source::Source;
use crate::Score;
use serde::Deserialize;
use serde::Serialize;
