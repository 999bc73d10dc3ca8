use super::command::Command;
use super::event::Event;
use crate::gameplay::GameState;

/// Trait for entities that pick moves.
/// Implementations can be a human at a terminal, a scripted robot, a
/// browser page, etc. The session doesn't care where commands come from.
pub trait Player {
    /// Called whenever the gate is open and the session wants a command.
    fn decide(&mut self, state: &GameState) -> Command;
    /// Receive notification of session events.
    /// Useful for rendering, logging, or keeping local statistics.
    fn notify(&mut self, event: &Event);
}
