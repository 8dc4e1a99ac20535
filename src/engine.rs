//! Engine façade (E): binds Farming state (F) and User state (U) behind the collaborator
//! traits of [`crate::traits`]. See §4.3 of the design for the operation contract.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::FarmingError;
use crate::farm::{Campaign, StartPolicy};
use crate::rewards::RewardsLedger;
use crate::traits::{Clock, Distributor, RewardVault, SupplyProvider};
use crate::views::{AccountRewardView, FarmInfoView, PoolSummaryView};
use crate::{AccountId, U256, DEFAULT_MAX_SUBSCRIBED_ENGINES_PER_ACCOUNT, MAX_REWARD_TOKENS_PER_ENGINE};

/// Tunable limits and policy for one engine (§10.4). Defaults reproduce the "safe" choices
/// of §9: shortening and slowing down a running campaign are both rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub start_policy: StartPolicy,
    pub max_subscribed_engines_per_account: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            start_policy: StartPolicy::default(),
            max_subscribed_engines_per_account: DEFAULT_MAX_SUBSCRIBED_ENGINES_PER_ACCOUNT,
        }
    }
}

/// A read-only snapshot of the running campaign, for surrounding RPC/view layers
/// (§6 `farm_info`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FarmInfo {
    pub finished: u64,
    pub duration: u64,
    pub reward: U256,
    pub balance: U256,
}

impl From<Campaign> for FarmInfo {
    fn from(c: Campaign) -> Self {
        FarmInfo {
            finished: c.finished,
            duration: c.duration,
            reward: c.reward,
            balance: c.balance,
        }
    }
}

/// A single reward-token campaign bound to its ledger and configuration. Owns no supply,
/// clock, vault, or distributor state — every operation takes those as arguments, so the
/// engine never captures a cyclic back-reference into its wrapper (§9 "Cyclic references").
#[derive(Clone, Debug, Default)]
pub struct FarmingEngine {
    campaign: Campaign,
    ledger: RewardsLedger,
    config: EngineConfig,
}

impl FarmingEngine {
    pub fn new(config: EngineConfig) -> Self {
        FarmingEngine {
            campaign: Campaign::default(),
            ledger: RewardsLedger::default(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn farm_info(&self) -> FarmInfo {
        self.campaign.into()
    }

    /// JSON-friendly snapshot of [`Self::farm_info`], for RPC/view layers (§6 `farm_info`).
    pub fn farm_info_view(&self, clock: &dyn Clock) -> FarmInfoView {
        FarmInfoView::from_info(self.farm_info(), clock.now())
    }

    /// JSON-friendly snapshot of [`Self::farmed`] for one account.
    pub fn account_reward_view<S: SupplyProvider>(
        &self,
        account: &AccountId,
        clock: &dyn Clock,
        supply: &S,
    ) -> AccountRewardView {
        AccountRewardView::new(account, self.farmed(account, clock, supply))
    }

    fn farmed_per_token<S: SupplyProvider>(&self, clock: &dyn Clock, supply: &S) -> U256 {
        let now = clock.now();
        let emitted = self
            .campaign
            .farmed_since_checkpoint_scaled(now, self.ledger.checkpoint());
        self.ledger
            .farmed_per_token(now, supply.total_supply(), emitted)
    }

    /// Starts or extends the campaign (§4.3 `start_farming`).
    pub fn start_farming<S, V, D>(
        &mut self,
        caller: &AccountId,
        amount: U256,
        period: u64,
        clock: &dyn Clock,
        supply: &S,
        vault: &mut V,
        distributor: &D,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        V: RewardVault,
        D: Distributor,
    {
        if !distributor.authorised_distributor(caller) {
            return Err(FarmingError::NotDistributor);
        }

        let now = clock.now();
        let fpt = self.farmed_per_token(clock, supply);

        // Validate against a scratch copy first: `update` can reject on `PeriodTooLarge`,
        // `AmountTooLarge`, `ShorteningDenied`, or `SlowDownDenied`, and none of that may be
        // observable until the deposit has actually landed (§7 all-or-nothing).
        let mut candidate = self.campaign;
        let effective = candidate.update(now, amount, period, &self.config.start_policy)?;

        vault.take_reward(caller, amount)?;

        self.ledger.update_checkpoint(now, fpt);
        self.campaign = candidate;
        debug!(target: "farming_engine", caller, %amount, period, %effective, "start_farming");

        Ok(effective)
    }

    /// Truncates the campaign, returning the leftover reward to refund (§4.3
    /// `stop_farming`).
    pub fn stop_farming<S, D>(
        &mut self,
        caller: &AccountId,
        clock: &dyn Clock,
        supply: &S,
        distributor: &D,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        D: Distributor,
    {
        if !distributor.authorised_distributor(caller) {
            return Err(FarmingError::NotDistributor);
        }

        let now = clock.now();
        let fpt = self.farmed_per_token(clock, supply);
        self.ledger.update_checkpoint(now, fpt);

        let leftover = self.campaign.cancel(now);
        debug!(target: "farming_engine", caller, %leftover, "stop_farming");

        Ok(leftover)
    }

    /// Current claimable reward for `account` (§4.3 `farmed`). Read-only.
    pub fn farmed<S: SupplyProvider>(
        &self,
        account: &AccountId,
        clock: &dyn Clock,
        supply: &S,
    ) -> U256 {
        let fpt = self.farmed_per_token(clock, supply);
        let balance = supply.balance_of(account);
        self.ledger.farmed(account, balance, fpt)
    }

    /// Resolves `account`'s claimable reward, zeroes its entitlement, and pays it out
    /// through the vault (§4.3 `claim`).
    pub fn claim<S, V>(
        &mut self,
        account: &AccountId,
        clock: &dyn Clock,
        supply: &S,
        vault: &mut V,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        V: RewardVault,
    {
        let fpt = self.farmed_per_token(clock, supply);
        let balance = supply.balance_of(account);
        let claimed = self.ledger.farmed(account, balance, fpt);

        // Pay out first: if the vault transfer fails, `corrections`/`balance` must stay
        // exactly as they were, or the entitlement is erased and the pool debited for a
        // reward that never actually left the engine (§7 all-or-nothing).
        if !claimed.is_zero() {
            vault.transfer_reward(account, claimed)?;
        }

        self.ledger.erase_farmed(account, balance, fpt);
        self.campaign.claim(claimed);
        debug!(target: "farming_engine", account, %claimed, "claim");

        Ok(claimed)
    }

    /// Notifies the engine of a balance change between `from` and `to` (§4.3
    /// `on_balance_change`); `in_from`/`in_to` say whether each end is tracked by this
    /// particular engine.
    pub fn on_balance_change(
        &mut self,
        clock: &dyn Clock,
        supply_before: U256,
        from: Option<&AccountId>,
        to: Option<&AccountId>,
        delta: U256,
        in_from: bool,
        in_to: bool,
    ) {
        let now = clock.now();
        let emitted = self
            .campaign
            .farmed_since_checkpoint_scaled(now, self.ledger.checkpoint());
        let fpt = self.ledger.farmed_per_token(now, supply_before, emitted);
        self.ledger
            .update_balances(now, fpt, from, to, delta, in_from, in_to);
    }

    /// Convenience wrapper for a single-engine façade (§4.3 `deposit_like`): every account
    /// that holds a balance at all is tracked by this engine, so `in_from`/`in_to` simply
    /// mirror whether `from`/`to` are present. Multi-engine callers use
    /// [`Self::on_balance_change`] directly with per-engine subscription flags.
    pub fn deposit_like(
        &mut self,
        clock: &dyn Clock,
        supply_before: U256,
        from: Option<&AccountId>,
        to: Option<&AccountId>,
        delta: U256,
    ) {
        let in_from = from.is_some();
        let in_to = to.is_some();
        self.on_balance_change(clock, supply_before, from, to, delta, in_from, in_to);
    }

    /// Reward tokens that would still be unpaid at `at`, for the campaign's own reward
    /// token; used by surrounding code to compute a safe rescue amount for *other* tokens
    /// held by the wrapper (§6 `withdrawable`).
    pub fn undistributed_rewards(&self, at: u64) -> U256 {
        self.campaign.undistributed_rewards(at)
    }

    /// How much of a held token balance could safely be rescued right now (§6
    /// `withdrawable`). For the campaign's own reward token this is bounded by
    /// [`Self::undistributed_rewards`]: anything still owed to the linear schedule must stay
    /// put. For any other token the wrapper happens to hold, the full balance is free.
    pub fn withdrawable(&self, at: u64, is_reward_token: bool, held_balance: U256) -> U256 {
        if is_reward_token {
            self.campaign.undistributed_rewards(at)
        } else {
            held_balance
        }
    }

    /// Validates a distributor-gated rescue of `amount` from a held token balance (§7
    /// `InsufficientFunds`). The core never moves tokens itself (§6); the surrounding
    /// collaborator performs the transfer only after this returns `Ok`.
    pub fn rescue<D: Distributor>(
        &self,
        caller: &AccountId,
        clock: &dyn Clock,
        is_reward_token: bool,
        held_balance: U256,
        amount: U256,
        distributor: &D,
    ) -> Result<(), FarmingError> {
        if !distributor.authorised_distributor(caller) {
            return Err(FarmingError::NotDistributor);
        }
        let now = clock.now();
        let withdrawable = self.withdrawable(now, is_reward_token, held_balance);
        if amount > withdrawable {
            return Err(FarmingError::InsufficientFunds {
                requested: amount.to_string(),
                committed: held_balance.saturating_sub(withdrawable).to_string(),
            });
        }
        Ok(())
    }
}

/// Multi-engine variant (§4.4): several independent reward campaigns multiplexed over the
/// same farmable balance, each keyed by a reward-token identifier and opt-in per account.
#[derive(Clone, Debug, Default)]
pub struct MultiFarmingEngine {
    engines: HashMap<AccountId, FarmingEngine>,
    subscriptions: HashMap<AccountId, Vec<AccountId>>,
    max_subscribed_engines_per_account: usize,
}

impl MultiFarmingEngine {
    pub fn new(max_subscribed_engines_per_account: usize) -> Self {
        MultiFarmingEngine {
            engines: HashMap::new(),
            subscriptions: HashMap::new(),
            max_subscribed_engines_per_account,
        }
    }

    pub fn register_token(
        &mut self,
        token_id: AccountId,
        config: EngineConfig,
    ) -> Result<(), FarmingError> {
        if self.engines.len() >= MAX_REWARD_TOKENS_PER_ENGINE {
            return Err(FarmingError::RewardsTokensLimitReached {
                limit: MAX_REWARD_TOKENS_PER_ENGINE,
            });
        }
        self.engines.entry(token_id).or_insert_with(|| FarmingEngine::new(config));
        Ok(())
    }

    pub fn engine(&self, token_id: &AccountId) -> Option<&FarmingEngine> {
        self.engines.get(token_id)
    }

    pub fn engine_mut(&mut self, token_id: &AccountId) -> Option<&mut FarmingEngine> {
        self.engines.get_mut(token_id)
    }

    /// JSON-friendly snapshot of every registered reward token's campaign, for surrounding
    /// RPC/view layers (mirrors the teacher's `PoolSummary`).
    pub fn pool_summary(&self, clock: &dyn Clock) -> PoolSummaryView {
        let mut farms: Vec<(String, FarmInfoView)> = self
            .engines
            .iter()
            .map(|(token_id, engine)| (token_id.clone(), engine.farm_info_view(clock)))
            .collect();
        farms.sort_by(|a, b| a.0.cmp(&b.0));
        PoolSummaryView { farms }
    }

    fn require_engine_mut(&mut self, token_id: &AccountId) -> Result<&mut FarmingEngine, FarmingError> {
        self.engines
            .get_mut(token_id)
            .ok_or_else(|| FarmingError::RewardsTokenNotFound {
                token_id: token_id.clone(),
            })
    }

    fn require_engine(&self, token_id: &AccountId) -> Result<&FarmingEngine, FarmingError> {
        self.engines
            .get(token_id)
            .ok_or_else(|| FarmingError::RewardsTokenNotFound {
                token_id: token_id.clone(),
            })
    }

    pub fn subscribe(&mut self, account: &AccountId, token_id: &AccountId) -> Result<(), FarmingError> {
        if !self.engines.contains_key(token_id) {
            return Err(FarmingError::RewardsTokenNotFound {
                token_id: token_id.clone(),
            });
        }
        let subs = self.subscriptions.entry(account.clone()).or_default();
        if subs.iter().any(|t| t == token_id) {
            return Err(FarmingError::EngineAlreadySubscribed);
        }
        if subs.len() >= self.max_subscribed_engines_per_account {
            return Err(FarmingError::SubscriptionLimitReached {
                limit: self.max_subscribed_engines_per_account,
            });
        }
        subs.push(token_id.clone());
        Ok(())
    }

    pub fn unsubscribe(&mut self, account: &AccountId, token_id: &AccountId) -> Result<(), FarmingError> {
        let subs = self
            .subscriptions
            .get_mut(account)
            .ok_or(FarmingError::EngineNotSubscribed)?;
        let before = subs.len();
        subs.retain(|t| t != token_id);
        if subs.len() == before {
            return Err(FarmingError::EngineNotSubscribed);
        }
        Ok(())
    }

    pub fn subscriptions(&self, account: &AccountId) -> &[AccountId] {
        self.subscriptions.get(account).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Fans out a balance change to every engine `from`/`to` is individually subscribed to
    /// (§4.4). Bounded by `MAX_REWARD_TOKENS_PER_ENGINE`, so this is O(#reward tokens), not
    /// O(#accounts).
    pub fn on_balance_change(
        &mut self,
        clock: &dyn Clock,
        supply_before_by_token: &HashMap<AccountId, U256>,
        from: Option<&AccountId>,
        to: Option<&AccountId>,
        delta: U256,
    ) {
        let from_subs = from.map(|a| self.subscriptions(a).to_vec()).unwrap_or_default();
        let to_subs = to.map(|a| self.subscriptions(a).to_vec()).unwrap_or_default();

        let mut token_ids: Vec<AccountId> = from_subs.iter().chain(to_subs.iter()).cloned().collect();
        token_ids.sort();
        token_ids.dedup();

        for token_id in token_ids {
            let in_from = from_subs.iter().any(|t| t == &token_id);
            let in_to = to_subs.iter().any(|t| t == &token_id);
            let supply_before = supply_before_by_token.get(&token_id).copied().unwrap_or_default();
            match self.engines.get_mut(&token_id) {
                Some(engine) => {
                    engine.on_balance_change(clock, supply_before, from, to, delta, in_from, in_to)
                }
                None => warn!(target: "farming_engine", %token_id, "subscription referenced an unregistered engine"),
            }
        }
    }

    pub fn start_farming<S, V, D>(
        &mut self,
        token_id: &AccountId,
        caller: &AccountId,
        amount: U256,
        period: u64,
        clock: &dyn Clock,
        supply: &S,
        vault: &mut V,
        distributor: &D,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        V: RewardVault,
        D: Distributor,
    {
        self.require_engine_mut(token_id)?
            .start_farming(caller, amount, period, clock, supply, vault, distributor)
    }

    pub fn stop_farming<S, D>(
        &mut self,
        token_id: &AccountId,
        caller: &AccountId,
        clock: &dyn Clock,
        supply: &S,
        distributor: &D,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        D: Distributor,
    {
        self.require_engine_mut(token_id)?
            .stop_farming(caller, clock, supply, distributor)
    }

    pub fn claim<S, V>(
        &mut self,
        token_id: &AccountId,
        account: &AccountId,
        clock: &dyn Clock,
        supply: &S,
        vault: &mut V,
    ) -> Result<U256, FarmingError>
    where
        S: SupplyProvider,
        V: RewardVault,
    {
        self.require_engine_mut(token_id)?
            .claim(account, clock, supply, vault)
    }

    /// Per-token `withdrawable` (§6): `token_id` identifies which registered engine's
    /// schedule governs the rescue bound, while `held_token_id` determines whether the
    /// token actually being rescued is that engine's own reward token.
    pub fn withdrawable(
        &self,
        token_id: &AccountId,
        at: u64,
        is_reward_token: bool,
        held_balance: U256,
    ) -> Result<U256, FarmingError> {
        Ok(self
            .require_engine(token_id)?
            .withdrawable(at, is_reward_token, held_balance))
    }

    pub fn rescue<D: Distributor>(
        &self,
        token_id: &AccountId,
        caller: &AccountId,
        clock: &dyn Clock,
        is_reward_token: bool,
        held_balance: U256,
        amount: U256,
        distributor: &D,
    ) -> Result<(), FarmingError> {
        self.require_engine(token_id)?
            .rescue(caller, clock, is_reward_token, held_balance, amount, distributor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingVault, InMemoryVault, ManualClock, MapSupply, PermissiveDistributor};

    const WEEK: u64 = 604_800;

    fn units(n: u64) -> U256 {
        U256::from(n) * crate::scale()
    }

    #[test]
    fn two_equal_stakers_split_reward() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let mut supply = MapSupply::new();
        supply.set(&"A".to_string(), U256::from(1u64));
        supply.set(&"B".to_string(), U256::from(1u64));
        let mut vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        engine
            .start_farming(
                &"owner".to_string(),
                units(72_000),
                WEEK,
                &clock,
                &supply,
                &mut vault,
                &distributor,
            )
            .unwrap();
        // A and B both join at time 0, before any reward accrues, so their corrections start
        // baselined at zero.
        engine.on_balance_change(&clock, U256::zero(), None, Some(&"A".to_string()), U256::from(1u64), false, true);
        engine.on_balance_change(&clock, U256::from(1u64), None, Some(&"B".to_string()), U256::from(1u64), false, true);

        clock.advance(WEEK);

        let farmed_a = engine.farmed(&"A".to_string(), &clock, &supply);
        let farmed_b = engine.farmed(&"B".to_string(), &clock, &supply);
        assert_eq!(farmed_a, units(36_000));
        assert_eq!(farmed_b, units(36_000));
    }

    #[test]
    fn claim_twice_yields_zero_second_time() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let mut supply = MapSupply::new();
        supply.set(&"A".to_string(), U256::from(1u64));
        let mut vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        engine
            .start_farming(&"owner".to_string(), units(1_000), WEEK, &clock, &supply, &mut vault, &distributor)
            .unwrap();
        engine.on_balance_change(&clock, U256::zero(), None, Some(&"A".to_string()), U256::from(1u64), false, true);
        clock.advance(WEEK);

        let first = engine.claim(&"A".to_string(), &clock, &supply, &mut vault).unwrap();
        assert_eq!(first, units(1_000));
        let second = engine.claim(&"A".to_string(), &clock, &supply, &mut vault).unwrap();
        assert_eq!(second, U256::zero());
    }

    #[test]
    fn unauthorised_caller_is_rejected() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let supply = MapSupply::new();
        let mut vault = InMemoryVault::default();

        struct NoOne;
        impl Distributor for NoOne {
            fn authorised_distributor(&self, _caller: &AccountId) -> bool {
                false
            }
        }

        let err = engine
            .start_farming(&"nobody".to_string(), units(1), WEEK, &clock, &supply, &mut vault, &NoOne)
            .unwrap_err();
        assert_eq!(err, FarmingError::NotDistributor);
    }

    #[test]
    fn foreign_token_is_fully_withdrawable() {
        let engine = FarmingEngine::new(EngineConfig::default());
        let held = units(500);
        assert_eq!(engine.withdrawable(0, false, held), held);
    }

    #[test]
    fn reward_token_withdrawable_shrinks_as_campaign_runs() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let supply = MapSupply::new();
        let mut vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        engine
            .start_farming(&"owner".to_string(), units(70_000), WEEK, &clock, &supply, &mut vault, &distributor)
            .unwrap();

        let at_start = engine.withdrawable(0, true, units(70_000));
        let at_half = engine.withdrawable(WEEK / 2, true, units(70_000));
        let at_end = engine.withdrawable(WEEK, true, units(70_000));

        assert_eq!(at_start, units(70_000));
        assert_eq!(at_half, units(35_000));
        assert_eq!(at_end, U256::zero());
    }

    #[test]
    fn rescue_rejects_amount_above_withdrawable() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let supply = MapSupply::new();
        let mut vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        engine
            .start_farming(&"owner".to_string(), units(70_000), WEEK, &clock, &supply, &mut vault, &distributor)
            .unwrap();

        let err = engine
            .rescue(&"owner".to_string(), &clock, true, units(70_000), units(70_000), &distributor)
            .unwrap_err();
        assert!(matches!(err, FarmingError::InsufficientFunds { .. }));

        clock.advance(WEEK);
        engine
            .rescue(&"owner".to_string(), &clock, true, units(70_000), units(70_000), &distributor)
            .unwrap();
    }

    #[test]
    fn start_farming_leaves_no_trace_when_vault_rejects_the_deposit() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let supply = MapSupply::new();
        let mut vault = FailingVault;
        let distributor = PermissiveDistributor;

        let before = engine.farm_info();
        let err = engine
            .start_farming(&"owner".to_string(), units(1_000), WEEK, &clock, &supply, &mut vault, &distributor)
            .unwrap_err();

        assert_eq!(err, FarmingError::VaultTransferFailed { reason: "deposit rejected".to_string() });
        assert_eq!(engine.farm_info(), before);
    }

    #[test]
    fn claim_leaves_entitlement_and_balance_untouched_when_vault_rejects_the_transfer() {
        let mut engine = FarmingEngine::new(EngineConfig::default());
        let clock = ManualClock::new(0);
        let mut supply = MapSupply::new();
        supply.set(&"A".to_string(), U256::from(1u64));
        let mut ok_vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        engine
            .start_farming(&"owner".to_string(), units(1_000), WEEK, &clock, &supply, &mut ok_vault, &distributor)
            .unwrap();
        engine.on_balance_change(&clock, U256::zero(), None, Some(&"A".to_string()), U256::from(1u64), false, true);
        clock.advance(WEEK);

        let farmed_before = engine.farmed(&"A".to_string(), &clock, &supply);
        let balance_before = engine.farm_info().balance;

        let mut failing_vault = FailingVault;
        let err = engine
            .claim(&"A".to_string(), &clock, &supply, &mut failing_vault)
            .unwrap_err();
        assert_eq!(err, FarmingError::VaultTransferFailed { reason: "transfer rejected".to_string() });

        // Neither the account's entitlement nor the campaign's balance moved.
        assert_eq!(engine.farmed(&"A".to_string(), &clock, &supply), farmed_before);
        assert_eq!(engine.farm_info().balance, balance_before);

        // A subsequent claim through a working vault still pays out the full amount.
        let claimed = engine
            .claim(&"A".to_string(), &clock, &supply, &mut ok_vault)
            .unwrap();
        assert_eq!(claimed, farmed_before);
    }

    #[test]
    fn farm_info_view_and_pool_summary_are_wired_to_the_engine() {
        let mut multi = MultiFarmingEngine::new(5);
        let clock = ManualClock::new(0);
        let supply = MapSupply::new();
        let mut vault = InMemoryVault::default();
        let distributor = PermissiveDistributor;

        multi
            .register_token("reward-a".to_string(), EngineConfig::default())
            .unwrap();
        multi
            .start_farming(
                &"reward-a".to_string(),
                &"owner".to_string(),
                units(1_000),
                WEEK,
                &clock,
                &supply,
                &mut vault,
                &distributor,
            )
            .unwrap();

        let summary = multi.pool_summary(&clock);
        assert_eq!(summary.farms.len(), 1);
        assert_eq!(summary.farms[0].0, "reward-a");
        assert!(summary.farms[0].1.active);

        let engine = multi.engine(&"reward-a".to_string()).unwrap();
        let view = engine.account_reward_view(&"nobody".to_string(), &clock, &supply);
        assert_eq!(view.account_id, "nobody");
        assert_eq!(view.farmed, "0");
    }
}
