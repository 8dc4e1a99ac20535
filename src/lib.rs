//! Reward-accounting kernel for linear, share-proportional token farming.
//!
//! The crate has no opinion on token custody, transport, or authorization — those are
//! external collaborators (see [`traits`]). It computes, in O(1) per call, how much reward
//! each tracked account has accrued from a piecewise-linear campaign budget.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer, wide enough to hold `reward * SCALE` (~200 bits) and the
    /// 216-bit `fpt_stored` accumulator without truncation.
    pub struct U256(4);
}

pub mod engine;
pub mod error;
pub mod farm;
pub mod rewards;
pub mod signed;
pub mod test_utils;
pub mod traits;
pub mod views;

pub use engine::{EngineConfig, FarmingEngine, MultiFarmingEngine, StartPolicy};
pub use error::FarmingError;
pub use traits::{Clock, Distributor, RewardVault, SupplyProvider};

/// Identifies an account. Kept as an opaque owned string so the kernel stays independent of
/// any particular chain's address encoding.
pub type AccountId = String;

/// Fixed-point scale applied to `fpt` and to per-account corrections: `10^18`.
pub fn scale() -> U256 {
    U256::from(1_000_000_000_000_000_000u64)
}

/// Upper bound on a campaign's total reward: `10^42`.
pub fn max_reward_amount() -> U256 {
    U256::from(10u64).pow(U256::from(42u32))
}

/// Upper bound on a campaign's period in seconds: `2^40 - 1`.
pub const MAX_PERIOD: u64 = (1u64 << 40) - 1;

/// Maximum number of reward-token engines a [`MultiFarmingEngine`] will hold.
pub const MAX_REWARD_TOKENS_PER_ENGINE: usize = 5;

/// Default cap on how many engines a single account may subscribe to at once.
pub const DEFAULT_MAX_SUBSCRIBED_ENGINES_PER_ACCOUNT: usize = 10;
