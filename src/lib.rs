//! Single-player rock-paper-scissors.
//!
//! The rules live in [`gameplay`]: a caller-owned [`gameplay::GameState`]
//! is advanced one round at a time by [`gameplay::GameState::resolve`],
//! drawing the opponent's move from an injected [`gameplay::Source`].
//! Everything that shows or collects moves sits outside of it:
//!
//! - [`session`] owns the state, enforces the busy gate and paces rounds;
//!   it maps keys to [`session::Command`]s and fans out events
//! - [`players`] collects commands and renders those events
//! - `wasm` exposes the same loop to a browser page
//! - `cli` parses the `roshambo` binary's arguments (requires `cli` feature)

pub mod gameplay;
pub mod players;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub type Score = u32;
pub type Probability = f32;

/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
