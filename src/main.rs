//! Rock-paper-scissors at the terminal.
//!
//! `roshambo play` for an interactive game, `roshambo simulate` for a batch.

use clap::Parser;
use roshambo::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    roshambo::log(args.level())?;
    args.run()
}
