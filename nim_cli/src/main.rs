use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod commands;
mod rules;

#[derive(Subcommand, Debug)]
enum Command {
    Play(play::Args),
    Analyze(analyze::Args),
}

/// Play the game of Nim
#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Play(args) => play::run(args),
        Command::Analyze(args) => analyze::run(args),
    }
}
