#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn decide(&mut self, _: &GameState) -> Command {
        match Self::prompt() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("input closed: {}", e);
                Command::Quit
            }
        }
    }
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Ready(state) => {
                println!("{}", Self::scoreboard(state));
                println!("{}", "Ready to play!".green());
            }
            Event::Resolving(n) => {
                println!("{}", format!("Round {}", n).bold());
                println!("{}", "Battle in progress...".yellow());
            }
            Event::Played(round, _) => {
                println!(
                    "   You {} {:<8}  vs  {:>8} {} Opponent",
                    round.player.icon(),
                    round.player,
                    round.opponent,
                    round.opponent.icon()
                );
                println!("   {}", Self::banner(round.outcome));
            }
            Event::Reset(state) => {
                println!("{}", "Choose your move!".cyan());
                println!("{}", Self::scoreboard(state));
            }
            Event::Rejected(e) => println!("{}", e.to_string().red()),
        }
    }
}

impl Human {
    fn prompt() -> Result<Command, dialoguer::Error> {
        let input = Input::<String>::new()
            .with_prompt(Command::keys())
            .validate_with(|i: &String| -> Result<(), String> {
                Command::try_from(i.as_str())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .report(false)
            .interact_text()?;
        Ok(Command::try_from(input.as_str()).unwrap_or(Command::Quit))
    }
    fn scoreboard(state: &GameState) -> String {
        format!(
            "{}  You {} - {} Opponent",
            format!("Round {}", state.round_number).bold(),
            state.player_score.to_string().green(),
            state.opponent_score.to_string().red()
        )
    }
    fn banner(outcome: Outcome) -> ColoredString {
        match outcome {
            Outcome::Win => outcome.banner().green().bold(),
            Outcome::Lose => outcome.banner().red().bold(),
            Outcome::Draw => outcome.banner().yellow().bold(),
        }
    }
}

use crate::gameplay::GameState;
use crate::gameplay::Outcome;
use crate::session::Command;
use crate::session::Event;
use crate::session::Player;
use colored::ColoredString;
use colored::Colorize;
use dialoguer::Input;
