/// Notifications fanned out to the [`Player`](super::Player) while a
/// session runs. Display layers render these; nothing here feeds back
/// into the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// the gate is open, a move will be accepted
    Ready(GameState),
    /// a move was accepted, the reveal is under way
    Resolving(u32),
    /// both moves are revealed and the scores updated
    Played(Round, GameState),
    Reset(GameState),
    Rejected(GameError),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Ready(state) => write!(f, "ready    {}", state),
            Self::Resolving(n) => write!(f, "resolving round {}", n),
            Self::Played(round, _) => write!(f, "played   {}", round),
            Self::Reset(state) => write!(f, "reset    {}", state),
            Self::Rejected(e) => write!(f, "rejected {}", e),
        }
    }
}

use crate::gameplay::GameError;
use crate::gameplay::GameState;
use crate::gameplay::Round;
