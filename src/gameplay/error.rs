/// Errors raised at the edges of the rules: a move submitted while a
/// round is still being presented, or input that maps to no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Busy,
    UnknownKey(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Busy => write!(f, "round in progress"),
            Self::UnknownKey(key) => write!(f, "unknown key: {:?}", key),
        }
    }
}

impl std::error::Error for GameError {}
