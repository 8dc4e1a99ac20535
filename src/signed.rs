//! A minimal sign-and-magnitude wrapper over [`U256`], used for the per-account
//! `corrections` ledger (§4.2 of the engine's accounting design). The magnitude alone can't
//! represent "reward already baked in but not yet earned back", which swings negative across
//! balance leaves and transfers, so plain `U256` subtraction isn't enough.

use crate::U256;

/// A signed 256-bit-magnitude integer: `(-1)^negative * magnitude`.
///
/// `Signed256` never normalizes `-0` away from `+0`; both compare and add identically to
/// `ZERO`, which is the only invariant callers rely on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Signed256 {
    negative: bool,
    magnitude: U256,
}

impl Signed256 {
    pub const ZERO: Signed256 = Signed256 {
        negative: false,
        magnitude: U256([0, 0, 0, 0]),
    };

    pub fn from_unsigned(magnitude: U256) -> Self {
        Signed256 {
            negative: false,
            magnitude,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.magnitude.is_zero()
    }

    pub fn neg(self) -> Self {
        if self.magnitude.is_zero() {
            self
        } else {
            Signed256 {
                negative: !self.negative,
                magnitude: self.magnitude,
            }
        }
    }

    pub fn add(self, other: Signed256) -> Self {
        if self.negative == other.negative {
            return Signed256 {
                negative: self.negative,
                magnitude: self.magnitude + other.magnitude,
            };
        }
        if self.magnitude >= other.magnitude {
            Signed256 {
                negative: self.negative,
                magnitude: self.magnitude - other.magnitude,
            }
        } else {
            Signed256 {
                negative: other.negative,
                magnitude: other.magnitude - self.magnitude,
            }
        }
    }

    pub fn sub(self, other: Signed256) -> Self {
        self.add(other.neg())
    }

    /// Returns the magnitude if non-negative, else `U256::zero()`.
    ///
    /// Per §4.2.6, a negative result here can only arise from a caller bug (the entitlement
    /// invariant guarantees `balance * fpt >= corrections`); we saturate rather than wrap.
    pub fn saturating_to_unsigned(&self) -> U256 {
        if self.is_negative() {
            U256::zero()
        } else {
            self.magnitude
        }
    }
}
