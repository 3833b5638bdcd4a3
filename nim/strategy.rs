//! Automated players

use crate::game::{Game, GameError, Move};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

/// Policy picking the next move in a game
pub trait Strategy {
    /// Choose a legal move for the player to move
    ///
    /// # Errors
    ///
    /// [`GameError::GameAlreadyOver`] if all heaps are empty
    fn choose(&mut self, game: &Game) -> Result<Move, GameError>;
}

/// Nim-sum strategy, see [`Game::optimal_move`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimal;

impl Strategy for Optimal {
    #[inline]
    fn choose(&mut self, game: &Game) -> Result<Move, GameError> {
        game.optimal_move()
    }
}

/// Uniformly random non-empty heap, then uniformly random count within the take limit
#[derive(Debug, Clone)]
pub struct Random<R = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    /// Random player seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Random player with reproducible choices
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R> Random<R>
where
    R: Rng,
{
    /// Random player using given source of randomness
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Strategy for Random<R>
where
    R: Rng,
{
    fn choose(&mut self, game: &Game) -> Result<Move, GameError> {
        let non_empty = game
            .heaps()
            .iter()
            .enumerate()
            .filter(|(_, size)| **size > 0)
            .collect::<Vec<_>>();
        let &(heap, &size) = non_empty
            .choose(&mut self.rng)
            .ok_or(GameError::GameAlreadyOver)?;
        let limit = game.max_take().map_or(size, |max_take| size.min(max_take));
        Ok(Move::new(heap, self.rng.random_range(1..=limit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn optimal_follows_game() {
        let game = Game::normal(&[3, 4, 5]).unwrap();
        assert_eq!(Optimal.choose(&game), game.optimal_move());
    }

    #[test]
    fn random_is_reproducible() {
        let game = Game::normal(&[10, 20, 30]).unwrap();
        let mut a = Random::seeded(7);
        let mut b = Random::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.choose(&game), b.choose(&game));
        }
    }

    #[test]
    fn random_with_custom_rng() {
        let game = Game::new(&[10, 20, 30], false, Some(4)).unwrap();
        let mut custom = Random::with_rng(StdRng::seed_from_u64(7));
        let mut seeded = Random::seeded(7);
        for _ in 0..16 {
            let m = custom.choose(&game).unwrap();
            assert_eq!(Ok(m), seeded.choose(&game));
            assert!(m.count <= 4);
        }
    }

    #[test]
    fn random_on_finished_game() {
        let mut game = Game::normal(&[2]).unwrap();
        game.make_move(0, 2).unwrap();
        assert_eq!(
            Random::seeded(0).choose(&game),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn random_only_picks_non_empty_heaps() {
        let mut game = Game::normal(&[4, 1, 4]).unwrap();
        game.make_move(0, 4).unwrap();
        game.make_move(2, 4).unwrap();
        let mut random = Random::seeded(42);
        for _ in 0..16 {
            assert_eq!(random.choose(&game), Ok(Move::new(1, 1)));
        }
    }

    quickcheck! {
        fn random_moves_are_legal(game: Game, seed: u64) -> bool {
            let mut random = Random::seeded(seed);
            let mut game = game;
            while !game.is_terminal() {
                let Ok(m) = random.choose(&game) else {
                    return false;
                };
                if game.apply(m).is_err() {
                    return false;
                }
            }
            game.winner() == Some(!game.is_misere())
        }
    }
}
