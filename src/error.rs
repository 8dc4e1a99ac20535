//! Error kinds returned by the engine. Every public, caller-reachable operation returns
//! `Result<_, FarmingError>` instead of panicking; see §7 of the design for the
//! raised-by/meaning mapping each variant below implements.

use thiserror::Error;

/// All failure modes the farming engine can report. Operations fail all-or-nothing: no
/// partial state mutation ever happens on the error path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FarmingError {
    #[error("caller is not the authorised distributor for this engine")]
    NotDistributor,

    #[error("period {period} is too large (max {max})")]
    PeriodTooLarge { period: u64, max: u64 },

    #[error("effective reward amount exceeds the maximum ({max})")]
    AmountTooLarge { max: String },

    #[error("new campaign would finish before the current one (shortening is disabled)")]
    ShorteningDenied,

    #[error("new emission rate is lower than the current one (slow-down is disabled)")]
    SlowDownDenied,

    #[error("account is already subscribed to this reward engine")]
    EngineAlreadySubscribed,

    #[error("account is not subscribed to this reward engine")]
    EngineNotSubscribed,

    #[error("account has reached its subscription limit ({limit})")]
    SubscriptionLimitReached { limit: usize },

    #[error("engine has reached its reward-token limit ({limit})")]
    RewardsTokensLimitReached { limit: usize },

    #[error("reward token {token_id} is not registered on this engine")]
    RewardsTokenNotFound { token_id: String },

    #[error("rescuing {requested} would drop the held balance below the committed {committed}")]
    InsufficientFunds { requested: String, committed: String },

    /// Surfaced by a [`crate::traits::RewardVault`] when the external token movement itself
    /// fails (e.g. a transfer callback comes back unsuccessful). The engine never commits
    /// `corrections`/`balance` mutations before this can still occur — see `claim` and
    /// `start_farming` in `engine.rs`.
    #[error("reward vault rejected the transfer: {reason}")]
    VaultTransferFailed { reason: String },
}
