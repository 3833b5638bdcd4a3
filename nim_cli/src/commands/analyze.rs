use crate::rules::Rules;
use anyhow::Result;
use clap::{self, Parser};
use nim::{
    game::Game,
    impartial::{ImpartialGame, Outcome, outcome},
};
use std::io::{self, Write};

/// Analyze a single position
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    rules: Rules,
}

fn analyze(game: &Game, output: &mut impl Write) -> Result<()> {
    writeln!(output, "Game: {}", game)?;
    writeln!(output, "Nim sum: {}", game.nim_sum().value())?;
    writeln!(output, "Nim value: {}", game.nim_value())?;

    let description = match outcome(game) {
        Some(Outcome::P) => "P (player to move loses)",
        Some(Outcome::N) => "N (player to move wins)",
        None => "unknown (misère play with a take limit)",
    };
    writeln!(output, "Outcome: {}", description)?;

    let m = game.optimal_move()?;
    writeln!(output, "Optimal move: {}", m)?;

    let mut next = game.clone();
    next.apply(m)?;
    if outcome(game) == Some(Outcome::N) && outcome(&next) == Some(Outcome::N) {
        eprintln!("Warning: suggested move does not win against perfect play");
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let game = args.rules.game()?;
    analyze(&game, &mut io::stdout())
}
