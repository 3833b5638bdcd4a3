use crate::rules::Rules;
use anyhow::{Result, bail};
use clap::{self, Parser, ValueEnum};
use nim::{
    game::{Game, Move},
    strategy::{Optimal, Random, Strategy},
};
use std::io::{self, BufRead, Write};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsAi,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Nim-sum strategy
    Optimal,
    /// Random legal moves
    Random,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum First {
    Human,
    Ai,
}

/// Play an interactive game
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    rules: Rules,

    /// Game mode
    #[arg(long, value_enum, default_value_t = Mode::HumanVsAi)]
    mode: Mode,

    /// Strategy of the computer player
    #[arg(long, value_enum, default_value_t = Difficulty::Optimal)]
    difficulty: Difficulty,

    /// Who moves first in human vs AI mode
    #[arg(long, value_enum, default_value_t = First::Human)]
    first: First,

    /// Seed for the random computer player
    #[arg(long, default_value = None)]
    seed: Option<u64>,
}

enum Controller {
    Human,
    Computer(Box<dyn Strategy>),
}

struct Seat {
    name: &'static str,
    controller: Controller,
}

impl Seat {
    const fn human(name: &'static str) -> Self {
        Self {
            name,
            controller: Controller::Human,
        }
    }
}

fn seats(args: &Args) -> [Seat; 2] {
    match args.mode {
        Mode::HumanVsHuman => [Seat::human("Player 1"), Seat::human("Player 2")],
        Mode::HumanVsAi => {
            let strategy: Box<dyn Strategy> = match (args.difficulty, args.seed) {
                (Difficulty::Optimal, _) => Box::new(Optimal),
                (Difficulty::Random, Some(seed)) => Box::new(Random::seeded(seed)),
                (Difficulty::Random, None) => Box::new(Random::new()),
            };
            let ai = Seat {
                name: "AI",
                controller: Controller::Computer(strategy),
            };
            match args.first {
                First::Human => [Seat::human("Human"), ai],
                First::Ai => [ai, Seat::human("Human")],
            }
        }
    }
}

fn print_heaps(game: &Game, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "\nCurrent heaps:")?;
    for (idx, size) in game.heaps().iter().enumerate() {
        writeln!(output, "Heap {}: {}", idx, size)?;
    }
    Ok(())
}

fn read_line(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended before the game was finished");
    }
    Ok(line.trim().to_owned())
}

/// Ask until the human enters a move that the game accepts
fn read_move(game: &Game, input: &mut impl BufRead, output: &mut impl Write) -> Result<Move> {
    loop {
        let heap = read_line("Enter heap index (0-based): ", input, output)?;
        let Ok(heap) = heap.parse::<usize>() else {
            writeln!(output, "Please enter valid numbers")?;
            continue;
        };
        let count = read_line("Enter number of objects to remove: ", input, output)?;
        let Ok(count) = count.parse::<u32>() else {
            writeln!(output, "Please enter valid numbers")?;
            continue;
        };
        match game.validate_move(heap, count) {
            Ok(()) => return Ok(Move::new(heap, count)),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// Run the turn loop until the game is over, returning the index of the winning seat
fn play(
    mut game: Game,
    seats: &mut [Seat; 2],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<usize> {
    writeln!(output, "Welcome to Nim!")?;
    if game.is_misere() {
        writeln!(output, "Playing in misère mode (last player to move loses)")?;
    }
    if let Some(max_take) = game.max_take() {
        writeln!(output, "Maximum objects per move: {}", max_take)?;
    }

    let mut turn = 0;
    while !game.is_terminal() {
        print_heaps(&game, output)?;
        let seat = &mut seats[turn % 2];
        writeln!(output, "\n{}'s turn", seat.name)?;

        let m = match &mut seat.controller {
            Controller::Human => read_move(&game, input, output)?,
            Controller::Computer(strategy) => strategy.choose(&game)?,
        };
        writeln!(
            output,
            "{} removes {} objects from heap {}",
            seat.name, m.count, m.heap
        )?;
        game.apply(m)?;
        turn += 1;
    }

    let last_mover = (turn - 1) % 2;
    let winner = match game.winner() {
        Some(true) => last_mover,
        _ => 1 - last_mover,
    };
    log::info!("game finished after {} moves", turn);
    writeln!(output, "\nGame over! {} wins!", seats[winner].name)?;
    Ok(winner)
}

pub fn run(args: Args) -> Result<()> {
    let game = args.rules.game()?;
    let mut seats = seats(&args);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(game, &mut seats, &mut stdin.lock(), &mut stdout)?;
    Ok(())
}
