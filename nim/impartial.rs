//! Impartial game - both players have the same moves
//!
//! Nim is the canonical impartial game: by the Sprague-Grundy theorem the value of a Nim
//! position without a take limit is the nim-sum of its heaps. Computing the value by
//! recursion over all options gives an independent check of [`Game::optimal_move`], and
//! the true value of positions with a take limit, which the nim-sum strategy ignores.

use crate::{game::Game, numeric::nimber::Nimber};

/// Impartial game
pub trait ImpartialGame: Sized {
    /// Get a list of moves from the position
    fn moves(&self) -> Vec<Self>;

    /// Calculate the Nim value of the position
    fn nim_value(&self) -> Nimber {
        nim_value_by_mex(self)
    }
}

/// Outcome class of a position
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// Previous player wins, the player to move loses against perfect play
    P,

    /// Next player, the one to move, wins with perfect play
    N,
}

impl ImpartialGame for Game {
    fn moves(&self) -> Vec<Self> {
        self.legal_moves()
            .into_iter()
            .filter_map(|m| {
                let mut next = self.clone();
                next.apply(m).ok()?;
                Some(next)
            })
            .collect()
    }

    /// Value is computed in closed form: each heap of size `h` with take limit `k` is
    /// worth `h mod (k + 1)`, and the position is worth the nim-sum of its heaps.
    fn nim_value(&self) -> Nimber {
        let value: Nimber = self
            .heaps()
            .iter()
            .map(|&heap| {
                // Limit of u32::MAX can never bind, the heap keeps its full value
                let period = self.max_take().and_then(|max_take| max_take.checked_add(1));
                Nimber::new(period.map_or(heap, |period| heap % period))
            })
            .sum();
        log::trace!("nim value of {} is {}", self, value);
        value
    }
}

/// Nim value computed by recursion over all options, ignoring any closed form
pub fn nim_value_by_mex<G>(game: &G) -> Nimber
where
    G: ImpartialGame,
{
    Nimber::mex(game.moves().iter().map(nim_value_by_mex).collect())
}

/// Outcome class of the position under its own rules.
///
/// Normal play follows the Nim value. Misère play without a take limit follows Bouton's
/// rule: if every heap holds at most one object the player to move loses exactly when an
/// odd number of heaps are non-empty, otherwise the nim-sum decides as in normal play.
/// Returns `None` for misère play with a take limit.
pub fn outcome(game: &Game) -> Option<Outcome> {
    let losing = match (game.is_misere(), game.max_take()) {
        (false, _) => game.nim_value().is_zero(),
        (true, None) if game.heaps().iter().all(|&heap| heap <= 1) => {
            game.heaps().iter().filter(|&&heap| heap == 1).count() % 2 == 1
        }
        (true, None) => game.is_p_position(),
        (true, Some(_)) => return None,
    };
    Some(if losing { Outcome::P } else { Outcome::N })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn moves_of_single_heap() {
        let game = Game::normal(&[3]).unwrap();
        let heaps = game
            .moves()
            .iter()
            .map(|next| next.heaps().to_vec())
            .collect::<Vec<_>>();
        assert_eq!(heaps, vec![vec![2], vec![1], vec![0]]);
    }

    #[test]
    fn moves_keep_rules() {
        let game = Game::new(&[2, 2], true, Some(1)).unwrap();
        let moves = game.moves();
        assert_eq!(moves.len(), 2);
        assert!(
            moves
                .iter()
                .all(|next| next.is_misere() && next.max_take() == Some(1))
        );
    }

    #[test]
    fn value_of_nim_is_nim_sum() {
        for heaps in [[1, 2, 3], [2, 3, 4], [2, 2, 1], [1, 1, 1]] {
            let game = Game::normal(&heaps).unwrap();
            assert_eq!(nim_value_by_mex(&game), game.nim_sum());
            assert_eq!(game.nim_value(), game.nim_sum());
        }
    }

    #[test]
    fn value_with_max_take_is_reduced_modulo() {
        let game = Game::new(&[5, 3], false, Some(2)).unwrap();
        // 5 mod 3 = 2, 3 mod 3 = 0
        assert_eq!(nim_value_by_mex(&game), Nimber::new(2));
        assert_eq!(game.nim_value(), Nimber::new(2));
    }

    #[test]
    fn clamped_optimal_move_is_not_always_winning() {
        // [1, 6] with max take 3 is worth *1 + *2 = *3, a win for the player to move.
        // The clamped nim-sum move leaves [1, 3] which is still worth *1 + *3 = *2, so
        // the opponent is handed a winning position.
        let mut game = Game::new(&[1, 6], false, Some(3)).unwrap();
        assert!(!game.nim_value().is_zero());
        game.apply(game.optimal_move().unwrap()).unwrap();
        assert_eq!(game.heaps(), &[1, 3]);
        assert!(!nim_value_by_mex(&game).is_zero());
    }

    #[test]
    fn value_with_unbounded_max_take() {
        let game = Game::new(&[5, 3], false, Some(u32::MAX)).unwrap();
        assert_eq!(game.nim_value(), Nimber::new(6));
        assert_eq!(game.nim_value(), nim_value_by_mex(&game));

        let game = Game::new(&[u32::MAX], false, Some(u32::MAX)).unwrap();
        assert_eq!(game.nim_value(), Nimber::new(u32::MAX));
    }

    #[test]
    fn trait_default_value_uses_recursion() {
        struct Heap(u32);

        impl ImpartialGame for Heap {
            fn moves(&self) -> Vec<Self> {
                (0..self.0).map(Heap).collect()
            }
        }

        assert_eq!(Heap(0).nim_value(), Nimber::new(0));
        assert_eq!(Heap(5).nim_value(), Nimber::new(5));
    }

    #[test]
    fn misere_outcomes() {
        let outcome_of = |heaps: &[u32]| outcome(&Game::new(heaps, true, None).unwrap());

        assert_eq!(outcome_of(&[1]), Some(Outcome::P));
        assert_eq!(outcome_of(&[1, 1]), Some(Outcome::N));
        assert_eq!(outcome_of(&[1, 1, 1]), Some(Outcome::P));
        assert_eq!(outcome_of(&[2]), Some(Outcome::N));
        assert_eq!(outcome_of(&[2, 2]), Some(Outcome::P));
        assert_eq!(outcome_of(&[1, 2]), Some(Outcome::N));
        assert_eq!(outcome(&Game::new(&[1], true, Some(2)).unwrap()), None);
    }

    #[test]
    fn normal_outcomes() {
        assert_eq!(outcome(&Game::normal(&[1]).unwrap()), Some(Outcome::N));
        assert_eq!(outcome(&Game::normal(&[1, 1]).unwrap()), Some(Outcome::P));
        assert_eq!(
            outcome(&Game::new(&[3, 3, 4], false, Some(3)).unwrap()),
            Some(Outcome::P)
        );
    }

    /// Misère outcome by exhaustive search: the player facing empty heaps has won, since
    /// the opponent took the last object
    fn misere_outcome_by_search(game: &Game) -> Outcome {
        if game.is_terminal()
            || game
                .moves()
                .iter()
                .any(|next| misere_outcome_by_search(next) == Outcome::P)
        {
            Outcome::N
        } else {
            Outcome::P
        }
    }

    fn small(game: &Game) -> Game {
        let heaps = game
            .heaps()
            .iter()
            .take(3)
            .map(|heap| heap % 3 + 1)
            .collect::<Vec<_>>();
        Game::new(&heaps, game.is_misere(), game.max_take()).unwrap()
    }

    quickcheck! {
        fn closed_form_matches_recursion(game: Game) -> bool {
            let game = small(&game);
            game.nim_value() == nim_value_by_mex(&game)
        }

        fn misere_rule_matches_search(game: Game) -> bool {
            let game = Game::new(small(&game).heaps(), true, None).unwrap();
            outcome(&game) == Some(misere_outcome_by_search(&game))
        }

        fn optimal_move_without_max_take_wins(game: Game) -> bool {
            let mut game = Game::normal(small(&game).heaps()).unwrap();
            if game.nim_value().is_zero() {
                return true;
            }
            game.apply(game.optimal_move().unwrap()).unwrap();
            nim_value_by_mex(&game).is_zero()
        }
    }
}
