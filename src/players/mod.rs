//! Player implementations for a [`Session`](crate::session::Session).
//!
//! - [`Human`] — interactive terminal player (requires `cli` feature)
//! - [`Robot`] — non-interactive player following a fixed [`Strategy`]
#[cfg(feature = "cli")]
mod human;
mod robot;

#[cfg(feature = "cli")]
pub use human::*;
pub use robot::*;
