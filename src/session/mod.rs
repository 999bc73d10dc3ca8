pub mod command;
pub use command::*;

pub mod controller;
pub use controller::*;

pub mod event;
pub use event::*;

pub mod player;
pub use player::*;

pub mod settings;
pub use settings::*;
