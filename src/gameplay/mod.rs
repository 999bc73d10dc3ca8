pub mod error;
pub use error::*;

pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod source;
pub use source::*;

pub mod state;
pub use state::*;

pub mod tally;
pub use tally::*;
