use crate::gameplay::Move;
use crate::gameplay::Tally;
use crate::gameplay::Uniform;
use crate::players::Human;
use crate::players::Robot;
use crate::players::Strategy;
use crate::session::Session;
use crate::session::Settings;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// seed the opponent for a reproducible game
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// pause between accepting a move and the reveal
    #[arg(long, global = true, default_value_t = 1500)]
    pub reveal_ms: u64,
    /// pause between the reveal and the next move
    #[arg(long, global = true, default_value_t = 2000)]
    pub cooldown_ms: u64,
    /// log debug output to the terminal
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
    /// only log warnings to the terminal
    #[arg(short, long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    #[command(about = "Play against the computer at the terminal")]
    Play,
    #[command(about = "Let a robot play a batch of rounds", alias = "sim")]
    Simulate {
        #[arg(short = 'n', long, default_value_t = 1000)]
        rounds: usize,
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Random)]
        strategy: StrategyArg,
        /// print the final state and tally as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Rock,
    Paper,
    Scissors,
    Cycle,
    Random,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => log::LevelFilter::Debug,
            (_, true) => log::LevelFilter::Warn,
            _ => log::LevelFilter::Info,
        }
    }

    pub fn settings(&self) -> Settings {
        match self.mode {
            Mode::Simulate { .. } => Settings::instant(),
            Mode::Play => Settings {
                reveal: Duration::from_millis(self.reveal_ms),
                cooldown: Duration::from_millis(self.cooldown_ms),
            },
        }
    }

    pub fn opponent(&self) -> Uniform {
        match self.seed {
            Some(seed) => Uniform::seeded(seed),
            None => Uniform::entropy(),
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut session = Session::new(self.opponent(), self.settings());
        match self.mode {
            Mode::Play => {
                log::info!("starting interactive game");
                let tally = session.run(&mut Human, None);
                println!("{}", tally);
            }
            Mode::Simulate {
                rounds,
                strategy,
                json,
            } => {
                log::info!("simulating {} rounds of {:?}", rounds, strategy);
                let mut robot = Robot::new(self.strategy(strategy));
                let tally = session.run(&mut robot, Some(rounds));
                match json {
                    true => println!("{}", serde_json::to_string_pretty(&Summary::from(&session))?),
                    false => println!("{}\n{}", session.state(), tally),
                }
            }
        }
        Ok(())
    }

    fn strategy(&self, arg: StrategyArg) -> Strategy {
        match arg {
            StrategyArg::Rock => Strategy::Always(Move::Rock),
            StrategyArg::Paper => Strategy::Always(Move::Paper),
            StrategyArg::Scissors => Strategy::Always(Move::Scissors),
            StrategyArg::Cycle => Strategy::Cycle,
            StrategyArg::Random => Strategy::Random(match self.seed {
                Some(seed) => Uniform::seeded(seed.wrapping_add(1)),
                None => Uniform::entropy(),
            }),
        }
    }
}

/// `--json` output of a simulation
#[derive(Debug, serde::Serialize)]
pub struct Summary {
    pub state: crate::gameplay::GameState,
    pub tally: Tally,
}

impl<S: crate::gameplay::Source> From<&Session<S>> for Summary {
    fn from(session: &Session<S>) -> Self {
        Self {
            state: *session.state(),
            tally: *session.tally(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simulate() {
        let args = Args::try_parse_from([
            "roshambo", "--seed", "3", "simulate", "-n", "30", "--strategy", "cycle", "--json",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.settings(), Settings::instant());
        assert!(matches!(
            args.mode,
            Mode::Simulate {
                rounds: 30,
                strategy: StrategyArg::Cycle,
                json: true
            }
        ));
    }

    #[test]
    fn parse_play_defaults() {
        let args = Args::try_parse_from(["roshambo", "play"]).unwrap();
        assert_eq!(args.settings(), Settings::default());
        assert_eq!(args.level(), log::LevelFilter::Info);
    }

    #[test]
    fn verbosity_flags() {
        let args = Args::try_parse_from(["roshambo", "-v", "play"]).unwrap();
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert!(Args::try_parse_from(["roshambo", "-v", "-q", "play"]).is_err());
    }

    #[test]
    fn seeded_simulation_is_reproducible() {
        let args = Args::try_parse_from(["roshambo", "--seed", "11", "simulate"]).unwrap();
        let summary = |args: &Args| {
            let mut session = Session::new(args.opponent(), args.settings());
            session.run(&mut Robot::new(args.strategy(StrategyArg::Random)), Some(300));
            serde_json::to_string(&Summary::from(&session)).unwrap()
        };
        assert_eq!(summary(&args), summary(&args));
    }
}
