/// How a [`Robot`] picks its next move.
#[derive(Debug, Clone)]
pub enum Strategy {
    Always(Move),
    /// rock, paper, scissors, rock, ...
    Cycle,
    Random(Uniform),
}

/// A player that never asks anyone. Used for batch simulation.
#[derive(Debug, Clone)]
pub struct Robot {
    strategy: Strategy,
    cycle: Scripted,
}

impl Robot {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            cycle: Scripted::balanced(),
        }
    }
}

impl From<Move> for Robot {
    fn from(m: Move) -> Self {
        Self::new(Strategy::Always(m))
    }
}

impl Player for Robot {
    fn decide(&mut self, _: &GameState) -> Command {
        Command::Play(match self.strategy {
            Strategy::Always(m) => m,
            Strategy::Cycle => self.cycle.draw(),
            Strategy::Random(ref mut source) => source.draw(),
        })
    }
    fn notify(&mut self, event: &Event) {
        log::trace!("{}", event);
    }
}

use crate::gameplay::GameState;
use crate::gameplay::Move;
use crate::gameplay::Scripted;
use crate::gameplay::Source;
use crate::gameplay::Uniform;
use crate::session::Command;
use crate::session::Event;
use crate::session::Player;

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(robot: &mut Robot, n: usize) -> Vec<Move> {
        (0..n)
            .map(|_| match robot.decide(&GameState::default()) {
                Command::Play(m) => m,
                command => panic!("robot sent {}", command),
            })
            .collect()
    }

    #[test]
    fn always_repeats() {
        let mut robot = Robot::from(Move::Paper);
        assert_eq!(moves(&mut robot, 3), vec![Move::Paper; 3]);
    }

    #[test]
    fn cycle_walks_all_moves() {
        let mut robot = Robot::new(Strategy::Cycle);
        assert_eq!(
            moves(&mut robot, 4),
            vec![Move::Rock, Move::Paper, Move::Scissors, Move::Rock]
        );
    }

    #[test]
    fn random_is_seeded() {
        let mut a = Robot::new(Strategy::Random(Uniform::seeded(9)));
        let mut b = Robot::new(Strategy::Random(Uniform::seeded(9)));
        assert_eq!(moves(&mut a, 32), moves(&mut b, 32));
    }
}
