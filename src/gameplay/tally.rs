/// Running count of outcomes across a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn total(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
            Outcome::Draw => self.draws,
        }
    }
    /// observed share of `outcome`, zero before any round
    pub fn frequency(&self, outcome: Outcome) -> Probability {
        match self.total() {
            0 => 0.,
            n => self.count(outcome) as Probability / n as Probability,
        }
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<T: IntoIterator<Item = Outcome>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut tally, outcome| {
            tally.record(outcome);
            tally
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for outcome in Outcome::all() {
            writeln!(
                f,
                "{:<5} {:>8} {:>7.2}%",
                outcome,
                self.count(*outcome),
                100. * self.frequency(*outcome)
            )?;
        }
        Ok(())
    }
}

use super::outcome::Outcome;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;

    #[test]
    fn empty_frequency_is_zero() {
        let tally = Tally::default();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.frequency(Outcome::Win), 0.);
    }

    #[test]
    fn collects_outcomes() {
        let tally = [Outcome::Win, Outcome::Draw, Outcome::Win, Outcome::Lose]
            .into_iter()
            .collect::<Tally>();
        assert_eq!((tally.wins, tally.losses, tally.draws), (2, 1, 1));
        assert_eq!(tally.frequency(Outcome::Win), 0.5);
    }

    #[test]
    fn balanced_opponent_splits_evenly() {
        const N: usize = 3 * 1024;
        for strategy in Move::all() {
            let mut state = GameState::new();
            let mut source = Scripted::balanced();
            let tally = (0..N)
                .map(|_| {
                    let round = state.resolve(*strategy, &mut source).unwrap();
                    state.settle();
                    round.outcome
                })
                .collect::<Tally>();
            for outcome in Outcome::all() {
                assert_eq!(tally.count(*outcome), N / 3);
                assert!((tally.frequency(*outcome) - 1. / 3.).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn uniform_opponent_converges() {
        const N: usize = 60_000;
        let mut state = GameState::new();
        let mut source = Uniform::seeded(0xC0FFEE);
        let tally = (0..N)
            .map(|_| {
                let round = state.resolve(Move::Rock, &mut source).unwrap();
                state.settle();
                round.outcome
            })
            .collect::<Tally>();
        for outcome in Outcome::all() {
            assert!((tally.frequency(*outcome) - 1. / 3.).abs() < 0.015);
        }
        assert_eq!(state.player_score as usize, tally.wins);
        assert_eq!(state.opponent_score as usize, tally.losses);
    }
}
