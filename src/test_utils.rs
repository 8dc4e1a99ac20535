//! In-memory test doubles for the collaborator traits (§10.7), in the spirit of the
//! teacher's own `test_utils.rs` emulator: no blockchain runtime, just plain Rust state a
//! unit test or `quickcheck` property can drive deterministically.

use std::cell::Cell;
use std::collections::HashMap;

use crate::error::FarmingError;
use crate::traits::{Clock, Distributor, RewardVault, SupplyProvider};
use crate::{AccountId, U256};

/// A settable clock. `advance`/`set` take `&self` (via interior mutability) so tests can
/// share one clock across an engine and its supply provider without fighting the borrow
/// checker.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(now: u64) -> Self {
        ManualClock { now: Cell::new(now) }
    }

    pub fn advance(&self, seconds: u64) {
        self.now.set(self.now.get() + seconds);
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> u64 {
        self.now.get()
    }
}

/// A farmable-balance ledger keyed by account, with no notion of transfers beyond `set`
/// directly overwriting a balance — callers drive `FarmingEngine::on_balance_change`
/// themselves to keep the two in sync, exactly as a real token contract would.
#[derive(Debug, Default, Clone)]
pub struct MapSupply {
    balances: HashMap<AccountId, U256>,
}

impl MapSupply {
    pub fn new() -> Self {
        MapSupply::default()
    }

    pub fn set(&mut self, account: &AccountId, balance: U256) {
        self.balances.insert(account.clone(), balance);
    }

    pub fn balance(&self, account: &AccountId) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }
}

impl SupplyProvider for MapSupply {
    fn total_supply(&self) -> U256 {
        self.balances.values().fold(U256::zero(), |acc, b| acc + *b)
    }

    fn balance_of(&self, account: &AccountId) -> U256 {
        self.balance(account)
    }
}

/// Records every reward movement instead of actually moving tokens.
#[derive(Debug, Default, Clone)]
pub struct InMemoryVault {
    pub taken: Vec<(AccountId, U256)>,
    pub transferred: Vec<(AccountId, U256)>,
}

impl RewardVault for InMemoryVault {
    fn take_reward(&mut self, from: &AccountId, amount: U256) -> Result<(), FarmingError> {
        self.taken.push((from.clone(), amount));
        Ok(())
    }

    fn transfer_reward(&mut self, to: &AccountId, amount: U256) -> Result<(), FarmingError> {
        self.transferred.push((to.clone(), amount));
        Ok(())
    }
}

/// A vault whose `take_reward`/`transfer_reward` always fail, for exercising the
/// all-or-nothing rollback behaviour of `start_farming`/`claim` without a real token.
#[derive(Debug, Default, Clone)]
pub struct FailingVault;

impl RewardVault for FailingVault {
    fn take_reward(&mut self, _from: &AccountId, _amount: U256) -> Result<(), FarmingError> {
        Err(FarmingError::VaultTransferFailed {
            reason: "deposit rejected".to_string(),
        })
    }

    fn transfer_reward(&mut self, _to: &AccountId, _amount: U256) -> Result<(), FarmingError> {
        Err(FarmingError::VaultTransferFailed {
            reason: "transfer rejected".to_string(),
        })
    }
}

/// Authorises every caller. Tests that need to exercise [`FarmingError::NotDistributor`]
/// write their own single-purpose `Distributor` instead (see `engine::tests`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveDistributor;

impl Distributor for PermissiveDistributor {
    fn authorised_distributor(&self, _caller: &AccountId) -> bool {
        true
    }
}
