use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::game::Game;

/// Initial position and rule set shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct Rules {
    /// Initial sizes of the heaps
    #[arg(long, num_args = 1.., required = true)]
    pub heaps: Vec<u32>,

    /// Play in misère mode (last player to move loses)
    #[arg(long, default_value_t = false)]
    pub misere: bool,

    /// Maximum number of objects that can be taken in one move
    #[arg(long)]
    pub max_take: Option<u32>,
}

impl Rules {
    pub fn game(&self) -> Result<Game> {
        Game::new(&self.heaps, self.misere, self.max_take).context("Could not set up the game")
    }
}
