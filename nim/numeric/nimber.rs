//! Nimber is a number that represents a Nim heap of a given size.

use auto_ops::impl_op_ex;
use std::{fmt::Display, iter::Sum};

/// Number that represents a Nim heap of given size.
///
/// Addition is overloaded to Nim sum, so the value of a whole Nim position is the sum of
/// its heaps.
#[repr(transparent)]
#[derive(Debug, Default, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nimber(u32);

impl Nimber {
    /// Construct new nimber
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying nimber value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Check if the nimber is zero, i.e. the position is a loss for the player to move
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Compute the minimum excluded value from a vector of nimbers.
    /// See <https://en.wikipedia.org/wiki/Mex_(mathematics)>
    pub fn mex(mut nimbers: Vec<Self>) -> Self {
        nimbers.sort_unstable();
        let mut current = 0;
        for n in nimbers {
            match current.cmp(&n.0) {
                std::cmp::Ordering::Less => return Self(current),
                std::cmp::Ordering::Equal => current += 1,
                std::cmp::Ordering::Greater => {}
            }
        }
        Self(current)
    }
}

// xor is correct, that's how nimbers additon works
impl_op_ex!(+|lhs: &Nimber, rhs: &Nimber| -> Nimber { Nimber(lhs.0 ^ rhs.0) });
impl_op_ex!(+=|lhs: &mut Nimber, rhs: &Nimber| { lhs.0 ^= rhs.0 });

impl Sum for Nimber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut total = Nimber(0);
        for n in iter {
            total += n;
        }
        total
    }
}

impl Display for Nimber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            write!(f, "0")
        } else if self.0 == 1 {
            write!(f, "*")
        } else {
            write!(f, "*{}", self.0)
        }
    }
}

#[test]
fn mex_works() {
    assert_eq!(
        Nimber(3),
        Nimber::mex(vec![Nimber(0), Nimber(0), Nimber(2), Nimber(5), Nimber(1)])
    );

    assert_eq!(
        Nimber(2),
        Nimber::mex(vec![Nimber(0), Nimber(1), Nimber(1)])
    );

    assert_eq!(Nimber(0), Nimber::mex(vec![Nimber(1), Nimber(2)]));
    assert_eq!(Nimber(0), Nimber::mex(vec![]));
}

#[test]
fn sum_is_xor() {
    let sum = |heaps: &[u32]| heaps.iter().copied().map(Nimber::new).sum::<Nimber>();

    assert_eq!(sum(&[3, 4, 5]), Nimber(2));
    assert_eq!(sum(&[1, 1, 1]), Nimber(1));
    assert_eq!(sum(&[2, 2]), Nimber(0));
    assert_eq!(sum(&[]), Nimber(0));
    assert!(sum(&[7, 7, 9, 9]).is_zero());

    assert_eq!(Nimber(3) + Nimber(5), Nimber(6));
    assert_eq!(&Nimber(3) + Nimber(3), Nimber(0));
}

#[test]
fn display_uses_star_notation() {
    assert_eq!(Nimber(0).to_string(), "0");
    assert_eq!(Nimber(1).to_string(), "*");
    assert_eq!(Nimber(6).to_string(), "*6");
}
