#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const fn all() -> &'static [Self] {
        &[Self::Rock, Self::Paper, Self::Scissors]
    }
    /// the move this one defeats
    pub const fn victim(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// the move that defeats this one
    pub const fn nemesis(&self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.victim() == *other
    }
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Rock => "🪨",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }
    /// the single key that selects this move
    pub const fn key(&self) -> char {
        match self {
            Self::Rock => 'r',
            Self::Paper => 'p',
            Self::Scissors => 's',
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(GameError::UnknownKey(s.to_string())),
        }
    }
}

impl std::str::FromStr for Move {
    type Err = GameError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        })
    }
}

impl crate::Arbitrary for Move {
    fn random() -> Self {
        use rand::Rng;
        Self::all()[rand::rng().random_range(0..Self::all().len())]
    }
}

use super::error::GameError;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_relation() {
        assert!(Move::Rock.beats(&Move::Scissors));
        assert!(Move::Paper.beats(&Move::Rock));
        assert!(Move::Scissors.beats(&Move::Paper));
        for m in Move::all() {
            assert!(!m.beats(m));
            assert!(m.nemesis().beats(m));
            assert!(m.victim().nemesis() == *m);
        }
    }

    #[test]
    fn exactly_one_winner_off_diagonal() {
        for a in Move::all() {
            for b in Move::all().iter().filter(|b| *b != a) {
                assert!(a.beats(b) != b.beats(a));
            }
        }
    }

    #[test]
    fn parse_keys_and_names() {
        assert_eq!(Move::try_from("R"), Ok(Move::Rock));
        assert_eq!(Move::try_from(" paper "), Ok(Move::Paper));
        assert_eq!("Scissors".parse::<Move>(), Ok(Move::Scissors));
        assert!(Move::try_from("lizard").is_err());
    }

    #[test]
    fn key_roundtrip() {
        for m in Move::all() {
            assert_eq!(Move::try_from(m.key().to_string().as_str()), Ok(*m));
        }
    }

    #[test]
    fn arbitrary_in_range() {
        use crate::Arbitrary;
        for _ in 0..32 {
            assert!(Move::all().contains(&Move::random()));
        }
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Move::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
    }
}
