/// Owns one game: the state, the opponent's move source, and what has
/// been played since the last reset.
///
/// The session is the only caller of the state transitions. It holds the
/// busy gate closed for the whole reveal and cooldown, then settles it.
pub struct Session<S: Source> {
    state: GameState,
    source: S,
    settings: Settings,
    history: Vec<Round>,
    tally: Tally,
    played: usize,
}

/// Result of a handled [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Played(Round),
    Reset,
    Quit,
}

impl<S: Source> Session<S> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            source,
            settings,
            history: Vec::new(),
            tally: Tally::default(),
            played: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    /// rounds since the last reset, oldest first
    pub fn history(&self) -> &[Round] {
        &self.history
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// rounds played over the session's lifetime, resets included
    pub fn played(&self) -> usize {
        self.played
    }

    /// Apply one command. A move leaves the gate closed until [`Session::settle`].
    pub fn handle(&mut self, command: Command) -> Result<Reply, GameError> {
        match command {
            Command::Play(m) => {
                let round = self.state.resolve(m, &mut self.source)?;
                self.history.push(round);
                self.tally.record(round.outcome);
                self.played += 1;
                Ok(Reply::Played(round))
            }
            Command::Reset => {
                log::info!("resetting after {} rounds", self.history.len());
                self.state.reset();
                self.history.clear();
                self.tally = Tally::default();
                Ok(Reply::Reset)
            }
            Command::Quit => Ok(Reply::Quit),
        }
    }

    pub fn settle(&mut self) {
        self.state.settle();
    }

    /// Drive `player` until it quits or `limit` rounds have been played.
    pub fn run(&mut self, player: &mut impl Player, limit: Option<usize>) -> Tally {
        let start = self.played;
        player.notify(&Event::Ready(self.state));
        while limit.map_or(true, |n| self.played - start < n) {
            let command = player.decide(&self.state);
            match self.handle(command) {
                Ok(Reply::Quit) => break,
                Ok(Reply::Reset) => player.notify(&Event::Reset(self.state)),
                Ok(Reply::Played(round)) => {
                    player.notify(&Event::Resolving(round.number));
                    Self::pause(self.settings.reveal);
                    player.notify(&Event::Played(round, self.state));
                    Self::pause(self.settings.cooldown);
                    self.settle();
                    player.notify(&Event::Ready(self.state));
                }
                Err(e) => {
                    log::warn!("{}", e);
                    player.notify(&Event::Rejected(e));
                }
            }
        }
        log::info!("session over after {} rounds", self.played - start);
        self.tally
    }

    fn pause(duration: std::time::Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

use super::command::Command;
use super::event::Event;
use super::player::Player;
use super::settings::Settings;
use crate::gameplay::GameError;
use crate::gameplay::GameState;
use crate::gameplay::Round;
use crate::gameplay::Source;
use crate::gameplay::Tally;
