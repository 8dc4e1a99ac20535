//! Collaborator hooks the engine consumes (§6). These replace the teacher's NEAR
//! `env::*` calls and `ext_fungible_token` cross-contract calls — token custody, transfer,
//! and authorization are non-goals of this crate, so they are expressed as explicit traits
//! the surrounding wrapper implements, never as globals the kernel reaches for on its own.

use crate::{AccountId, FarmingError, U256};

/// A monotonic, non-decreasing seconds clock. Implementations must be able to go backwards
/// only never — tests inject a [`crate::test_utils::ManualClock`] instead of wall-clock time.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Supplies the farmable balances the engine counts. `balance_of` returns zero for accounts
/// the surrounding wrapper doesn't track for this particular engine.
pub trait SupplyProvider {
    fn total_supply(&self) -> U256;
    fn balance_of(&self, account: &AccountId) -> U256;
}

/// External side effects around a campaign's reward pool: pulling in the budget on
/// `start_farming`, paying it out on `claim`. The engine never moves tokens itself.
pub trait RewardVault {
    fn take_reward(&mut self, from: &AccountId, amount: U256) -> Result<(), FarmingError>;
    fn transfer_reward(&mut self, to: &AccountId, amount: U256) -> Result<(), FarmingError>;
}

/// Gate for `start_farming` / `stop_farming`. Verification itself (signatures, roles,
/// multisig quorum, ...) is entirely the collaborator's concern.
pub trait Distributor {
    fn authorised_distributor(&self, caller: &AccountId) -> bool;
}
