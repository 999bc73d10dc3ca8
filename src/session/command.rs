/// What a player asked for. Produced by the input layer from a key or a
/// typed word, consumed by [`Session::handle`](super::Session::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
    Quit,
}

impl Command {
    /// the keys a terminal player can type
    pub const fn keys() -> &'static str {
        "r = rock, p = paper, s = scissors, esc = reset, q = quit"
    }
}

impl TryFrom<&str> for Command {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "esc" | "escape" | "reset" => Ok(Self::Reset),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Move::try_from(s).map(Self::Play),
        }
    }
}

impl From<Move> for Command {
    fn from(m: Move) -> Self {
        Self::Play(m)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Play(m) => write!(f, "play {}", m),
            Self::Reset => write!(f, "reset"),
            Self::Quit => write!(f, "quit"),
        }
    }
}

use crate::gameplay::GameError;
use crate::gameplay::Move;
