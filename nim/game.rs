//! Nim game state: heaps, rule set, move validation and nim-sum optimal play.
//!
//! Players alternately remove objects from a single heap. Under normal play the player
//! who empties the last heap wins, under misère play that player loses. An optional take
//! limit caps how many objects may be removed in one move.
//!
//! # Known limitations
//!
//! [`Game::optimal_move`] uses the normal-play nim-sum strategy regardless of rules.
//! With a take limit the nim-sum move is clamped to the limit, which is not optimal in
//! general (see [`ImpartialGame`](crate::impartial::ImpartialGame) for the true values),
//! and misère endgames are not treated specially.

use crate::{display, numeric::nimber::Nimber};
use std::fmt::{self, Display};

/// Reason why a game could not be constructed
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigurationError {
    /// No heaps were given
    EmptyHeaps,

    /// Heap at the given index is empty at the start of the game
    NonPositiveHeap {
        /// Index of the offending heap
        index: usize,
    },

    /// Take limit is zero
    NonPositiveMaxTake,
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyHeaps => write!(f, "at least one heap is required"),
            ConfigurationError::NonPositiveHeap { index } => {
                write!(f, "heap {} must start with a positive size", index)
            }
            ConfigurationError::NonPositiveMaxTake => write!(f, "max take must be positive"),
        }
    }
}

/// Errors reported by [`Game`] operations
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    /// Game cannot be constructed from the given heaps and rules
    InvalidConfiguration(ConfigurationError),

    /// All heaps are empty, there is no move to compute
    GameAlreadyOver,

    /// Heap index is out of range
    InvalidHeapIndex {
        /// Requested heap index
        heap: usize,
        /// Number of heaps in the game
        heap_count: usize,
    },

    /// Move removes no objects
    InvalidMoveCount,

    /// Move removes more objects than the heap holds
    InsufficientHeapSize {
        /// Requested heap index
        heap: usize,
        /// Objects currently in the heap
        available: u32,
        /// Objects requested to remove
        requested: u32,
    },

    /// Move removes more objects than the take limit allows
    MaxTakeExceeded {
        /// Take limit of the game
        max_take: u32,
        /// Objects requested to remove
        requested: u32,
    },
}

impl Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfiguration(err) => write!(f, "Invalid configuration: {}", err),
            GameError::GameAlreadyOver => write!(f, "Game is already over"),
            GameError::InvalidHeapIndex { heap, heap_count } => write!(
                f,
                "Heap index {} is out of range, must be between 0 and {}",
                heap,
                heap_count.saturating_sub(1)
            ),
            GameError::InvalidMoveCount => write!(f, "Must remove at least one object"),
            GameError::InsufficientHeapSize {
                heap,
                available,
                requested,
            } => write!(
                f,
                "Cannot remove {} objects, heap {} only has {}",
                requested, heap, available
            ),
            GameError::MaxTakeExceeded {
                max_take,
                requested,
            } => write!(
                f,
                "Cannot remove {} objects, at most {} can be taken in one move",
                requested, max_take
            ),
        }
    }
}

impl std::error::Error for GameError {}

impl From<ConfigurationError> for GameError {
    fn from(value: ConfigurationError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

/// Removal of objects from a single heap
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Zero-based heap index
    pub heap: usize,

    /// Number of objects to remove
    pub count: u32,
}

impl Move {
    /// Construct new move
    #[inline]
    pub const fn new(heap: usize, count: u32) -> Self {
        Self { heap, count }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remove {} from heap {}", self.count, self.heap)
    }
}

/// Nim position together with its rule set
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    // Invariant: non-empty, length fixed after construction
    heaps: Vec<u32>,
    misere: bool,
    // Invariant: positive when present
    max_take: Option<u32>,
}

impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::brackets(f, |f| display::commas(f, self.heaps()))?;
        if self.misere {
            write!(f, " misère")?;
        }
        if let Some(max_take) = self.max_take {
            write!(f, " max take {}", max_take)?;
        }
        Ok(())
    }
}

impl Game {
    /// Create a new game from initial heap sizes.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::EmptyHeaps`] if `heaps` is empty
    /// - [`ConfigurationError::NonPositiveHeap`] if any heap is empty
    /// - [`ConfigurationError::NonPositiveMaxTake`] if `max_take` is `Some(0)`
    pub fn new(heaps: &[u32], misere: bool, max_take: Option<u32>) -> Result<Self, GameError> {
        if heaps.is_empty() {
            Err(ConfigurationError::EmptyHeaps)?
        }
        if let Some(index) = heaps.iter().position(|&heap| heap == 0) {
            Err(ConfigurationError::NonPositiveHeap { index })?
        }
        if max_take == Some(0) {
            Err(ConfigurationError::NonPositiveMaxTake)?
        }

        Ok(Self {
            heaps: heaps.to_vec(),
            misere,
            max_take,
        })
    }

    /// Create a new normal play game without a take limit
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`]
    #[inline]
    pub fn normal(heaps: &[u32]) -> Result<Self, GameError> {
        Self::new(heaps, false, None)
    }

    /// Current heap sizes
    #[inline]
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Number of heaps, constant for the whole game
    #[inline]
    pub fn heap_count(&self) -> usize {
        self.heaps.len()
    }

    /// Check if the player who makes the last move loses
    #[inline]
    pub const fn is_misere(&self) -> bool {
        self.misere
    }

    /// Maximum number of objects that can be removed in a single move
    #[inline]
    pub const fn max_take(&self) -> Option<u32> {
        self.max_take
    }

    /// Number of objects left on the board
    pub fn total_objects(&self) -> u64 {
        self.heaps.iter().map(|&heap| heap as u64).sum()
    }

    /// Bitwise xor of all heap sizes
    pub fn nim_sum(&self) -> Nimber {
        self.heaps.iter().copied().map(Nimber::new).sum()
    }

    /// Check if the player to move loses against perfect normal play
    #[inline]
    pub fn is_p_position(&self) -> bool {
        self.nim_sum().is_zero()
    }

    /// Check if all heaps are empty
    pub fn is_terminal(&self) -> bool {
        self.heaps.iter().all(|&heap| heap == 0)
    }

    #[inline]
    fn clamp_to_max_take(&self, count: u32) -> u32 {
        self.max_take.map_or(count, |max_take| count.min(max_take))
    }

    /// Compute a move using the nim-sum strategy.
    ///
    /// In an N-position the move leaves a position with zero nim-sum, taken from the first
    /// heap that can be reduced to `heap ^ nim_sum`. The removal is clamped to the take
    /// limit, so with a limit the result may not be a P-position. In a P-position one
    /// object is taken from the first non-empty heap.
    ///
    /// # Errors
    ///
    /// [`GameError::GameAlreadyOver`] if all heaps are empty
    pub fn optimal_move(&self) -> Result<Move, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let nim_sum = self.nim_sum().value();
        let winning = if nim_sum == 0 {
            None
        } else {
            self.heaps.iter().enumerate().find_map(|(heap, &size)| {
                let target = size ^ nim_sum;
                (target < size).then(|| Move::new(heap, self.clamp_to_max_take(size - target)))
            })
        };

        let m = match winning {
            Some(m) => m,
            None => {
                let heap = self
                    .heaps
                    .iter()
                    .position(|&size| size > 0)
                    .ok_or(GameError::GameAlreadyOver)?;
                Move::new(heap, 1)
            }
        };
        log::debug!("optimal move in {} (nim-sum {}): {}", self, nim_sum, m);
        Ok(m)
    }

    /// Check if a move would be accepted by [`Game::make_move`] without applying it
    ///
    /// # Errors
    ///
    /// The first violated rule, checked in order: heap index, positive count, heap size,
    /// take limit
    pub fn validate_move(&self, heap: usize, count: u32) -> Result<(), GameError> {
        let Some(&available) = self.heaps.get(heap) else {
            return Err(GameError::InvalidHeapIndex {
                heap,
                heap_count: self.heap_count(),
            });
        };
        if count == 0 {
            return Err(GameError::InvalidMoveCount);
        }
        if count > available {
            return Err(GameError::InsufficientHeapSize {
                heap,
                available,
                requested: count,
            });
        }
        if let Some(max_take) = self.max_take {
            if count > max_take {
                return Err(GameError::MaxTakeExceeded {
                    max_take,
                    requested: count,
                });
            }
        }
        Ok(())
    }

    /// Remove `count` objects from heap at index `heap`
    ///
    /// # Errors
    ///
    /// See [`Game::validate_move`]. Game is left unchanged on error.
    pub fn make_move(&mut self, heap: usize, count: u32) -> Result<(), GameError> {
        self.validate_move(heap, count)?;
        self.heaps[heap] -= count;
        log::debug!("removed {} from heap {}, heaps now {}", count, heap, self);
        Ok(())
    }

    /// Apply a move, see [`Game::make_move`]
    ///
    /// # Errors
    ///
    /// See [`Game::validate_move`]
    #[inline]
    pub fn apply(&mut self, m: Move) -> Result<(), GameError> {
        self.make_move(m.heap, m.count)
    }

    /// All moves accepted by [`Game::make_move`], ordered by heap then by count
    pub fn legal_moves(&self) -> Vec<Move> {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| {
                (1..=self.clamp_to_max_take(size)).map(move |count| Move::new(heap, count))
            })
            .collect()
    }

    /// Outcome of a finished game, seen from the player who made the last move.
    ///
    /// Returns `None` while the game is in progress, `Some(true)` if the last mover wins
    /// (normal play) and `Some(false)` if they lose (misère play).
    pub fn winner(&self) -> Option<bool> {
        self.is_terminal().then_some(!self.misere)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Game {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        let max_heaps = g.size().clamp(1, 8);
        let heap_count = usize::arbitrary(g) % max_heaps + 1;
        let heaps = (0..heap_count)
            .map(|_| u32::arbitrary(g) % 32 + 1)
            .collect::<Vec<_>>();
        let max_take = Option::<u32>::arbitrary(g).map(|max_take| max_take % 8 + 1);

        Game {
            heaps,
            misere: bool::arbitrary(g),
            max_take,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        let misere = self.misere;
        let max_take = self.max_take;
        Box::new(
            self.heaps
                .shrink()
                .filter(|heaps| !heaps.is_empty() && heaps.iter().all(|&heap| heap > 0))
                .map(move |heaps| Game {
                    heaps,
                    misere,
                    max_take,
                }),
        )
    }
}
