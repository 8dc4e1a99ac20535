//! User accounting (U): the "farmed-per-token" accumulator plus per-account signed
//! corrections that make `farmed(account)` an O(1) read. See §4.2 of the design.

use std::collections::HashMap;

use crate::signed::Signed256;
use crate::{scale, AccountId, U256};

/// `fpt_stored`/`checkpoint` plus the per-account `corrections` ledger.
#[derive(Clone, Debug, Default)]
pub struct RewardsLedger {
    checkpoint: u64,
    fpt_stored: U256,
    corrections: HashMap<AccountId, Signed256>,
}

impl RewardsLedger {
    pub fn checkpoint(&self) -> u64 {
        self.checkpoint
    }

    pub fn fpt_stored(&self) -> U256 {
        self.fpt_stored
    }

    fn correction(&self, account: &AccountId) -> Signed256 {
        self.corrections.get(account).copied().unwrap_or(Signed256::ZERO)
    }

    /// `fpt_stored + farmed_since_checkpoint_scaled(checkpoint) / total_supply`, or
    /// `fpt_stored` unchanged if `now == checkpoint` or the tracked supply is zero (§4.2.1,
    /// §4.2.6). `emitted_since_checkpoint_scaled` is `F::farmed_since_checkpoint_scaled`
    /// evaluated by the caller, kept as a parameter so this module stays independent of the
    /// campaign representation.
    pub fn farmed_per_token(
        &self,
        now: u64,
        total_supply: U256,
        emitted_since_checkpoint_scaled: U256,
    ) -> U256 {
        if now == self.checkpoint || total_supply.is_zero() {
            return self.fpt_stored;
        }
        self.fpt_stored + emitted_since_checkpoint_scaled / total_supply
    }

    /// Materialises the accumulator: `(checkpoint, fpt_stored) := (now, fpt)`. A no-op if
    /// both already match (§4.2.2).
    pub fn update_checkpoint(&mut self, now: u64, fpt: U256) {
        if self.checkpoint == now && self.fpt_stored == fpt {
            return;
        }
        self.checkpoint = now;
        self.fpt_stored = fpt;
    }

    /// `((balance * fpt) - corrections[account]) / SCALE`, saturated at zero (§4.2.3,
    /// §4.2.6).
    pub fn farmed(&self, account: &AccountId, balance: U256, fpt: U256) -> U256 {
        let gross = Signed256::from_unsigned(balance * fpt);
        let net = gross.sub(self.correction(account));
        net.saturating_to_unsigned() / scale()
    }

    /// Sets `corrections[account] := balance * fpt`, so that a subsequent `farmed` call for
    /// the same `(balance, fpt)` returns zero (§4.2.4). Used inside `claim`.
    pub fn erase_farmed(&mut self, account: &AccountId, balance: U256, fpt: U256) {
        self.corrections
            .insert(account.clone(), Signed256::from_unsigned(balance * fpt));
    }

    /// The central balance-change hook (§4.2.5). `in_from`/`in_to` say whether `from`/`to`
    /// are tracked by this engine; when exactly one of them is tracked, the tracked supply
    /// `S` changes, so the accumulator is checkpointed first.
    pub fn update_balances(
        &mut self,
        now: u64,
        fpt: U256,
        from: Option<&AccountId>,
        to: Option<&AccountId>,
        delta: U256,
        in_from: bool,
        in_to: bool,
    ) {
        if delta.is_zero() || !(in_from || in_to) {
            return;
        }
        if from == to {
            return;
        }
        if in_from != in_to {
            self.update_checkpoint(now, fpt);
        }

        let scaled_delta = Signed256::from_unsigned(delta * fpt);
        if in_from {
            if let Some(from) = from {
                let updated = self.correction(from).sub(scaled_delta);
                self.corrections.insert(from.clone(), updated);
            }
        }
        if in_to {
            if let Some(to) = to {
                let updated = self.correction(to).add(scaled_delta);
                self.corrections.insert(to.clone(), updated);
            }
        }
    }
}
