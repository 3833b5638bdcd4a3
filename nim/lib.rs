//! Nim game engine.
//!
//! The [`Game`](crate::game::Game) value holds heap sizes together with the rule set
//! (normal or misère play, optional per-move take limit), validates and applies moves,
//! and computes the nim-sum optimal move. Positions can also be analysed as
//! [impartial games](crate::impartial::ImpartialGame) and played automatically through
//! a [`Strategy`](crate::strategy::Strategy).

#![warn(missing_docs)]

pub mod game;
pub mod impartial;
pub mod numeric;
pub mod strategy;

mod display;
