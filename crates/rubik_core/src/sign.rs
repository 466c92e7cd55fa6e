//! Sign enum.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
///
/// Grid coordinates of cube pieces are stored as signs, which makes values
/// outside of `-1..=1` unrepresentable.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// All signs, from negative to positive.
    pub const ALL: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];

    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns the coordinate as an index in the range `0..3`.
    pub const fn idx(self) -> usize {
        (self.int() + 1) as usize
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }
}
