//! Farming state (F): a single campaign paying out a fixed reward budget linearly between
//! `start` and `finish`. See §4.1 of the design for the operation semantics implemented here.

use crate::error::FarmingError;
use crate::{max_reward_amount, scale, U256, MAX_PERIOD};

/// Policy knobs governing `start_farming` when a campaign is already running (§9). The
/// source disagreed on whether shortening/slowing a running campaign should be rejected;
/// this crate exposes both as explicit flags and defaults to the safer, rejecting variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartPolicy {
    /// If `false` (default), a new campaign that would finish earlier than the one
    /// currently running is rejected with [`FarmingError::ShorteningDenied`].
    pub allow_shortening: bool,
    /// If `false` (default), a new campaign whose effective emission rate is lower than the
    /// current one is rejected with [`FarmingError::SlowDownDenied`].
    pub allow_slow_down: bool,
}

impl Default for StartPolicy {
    fn default() -> Self {
        StartPolicy {
            allow_shortening: false,
            allow_slow_down: false,
        }
    }
}

/// A campaign: `reward` tokens emitted linearly over `[finished - duration, finished]`.
/// `duration == 0 <=> finished == 0 <=> reward == 0` (no active campaign).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Campaign {
    pub finished: u64,
    pub duration: u64,
    pub reward: U256,
    pub balance: U256,
}

impl Campaign {
    pub fn is_active(&self, now: u64) -> bool {
        self.duration > 0 && now < self.finished
    }

    fn effective_end(&self, now: u64) -> u64 {
        now.min(self.finished)
    }

    /// Starts or extends the campaign (§4.1 `update`). Returns the *effective* reward now
    /// committed for the new campaign, which can exceed `amount` because of carryover from
    /// an unfinished previous one.
    pub fn update(
        &mut self,
        now: u64,
        amount: U256,
        period: u64,
        policy: &StartPolicy,
    ) -> Result<U256, FarmingError> {
        if period > MAX_PERIOD {
            return Err(FarmingError::PeriodTooLarge {
                period,
                max: MAX_PERIOD,
            });
        }

        let effective_amount = if self.is_active(now) {
            let elapsed = self.duration - (self.finished - now);
            let unspent =
                self.reward - self.reward * U256::from(elapsed) / U256::from(self.duration);
            let candidate = amount + unspent;

            if !policy.allow_shortening && now + period < self.finished {
                return Err(FarmingError::ShorteningDenied);
            }
            if !policy.allow_slow_down
                && candidate * U256::from(self.duration) < self.reward * U256::from(period)
            {
                return Err(FarmingError::SlowDownDenied);
            }
            candidate
        } else {
            amount
        };

        if effective_amount > max_reward_amount() {
            return Err(FarmingError::AmountTooLarge {
                max: max_reward_amount().to_string(),
            });
        }

        self.finished = now + period;
        self.duration = period;
        self.reward = effective_amount;
        self.balance += amount;

        Ok(effective_amount)
    }

    /// Truncates the campaign at `now`, returning the leftover reward to be refunded
    /// externally (§4.1 `cancel`).
    pub fn cancel(&mut self, now: u64) -> U256 {
        if self.duration == 0 {
            return U256::zero();
        }
        let end = self.effective_end(now);
        let start = self.finished - self.duration;
        let elapsed = end - start;
        let leftover =
            self.reward - self.reward * U256::from(elapsed) / U256::from(self.duration);

        self.balance = self.balance.saturating_sub(leftover);
        self.finished = 0;
        self.duration = 0;
        self.reward = U256::zero();

        leftover
    }

    /// Decreases `balance` by `amount`; caller guarantees `amount <= balance` (§4.1 `claim`).
    pub fn claim(&mut self, amount: U256) {
        debug_assert!(amount <= self.balance, "claim exceeds farm balance");
        self.balance = self.balance.saturating_sub(amount);
    }

    /// Reward emitted, scaled by [`crate::scale`], over `[cp, min(now, finished)]`. Caller
    /// must ensure `cp <= min(now, finished)`.
    pub fn farmed_since_checkpoint_scaled(&self, now: u64, checkpoint: u64) -> U256 {
        if self.duration == 0 {
            return U256::zero();
        }
        let end = self.effective_end(now);
        if end <= checkpoint {
            return U256::zero();
        }
        let elapsed = end - checkpoint;
        U256::from(elapsed) * self.reward * scale() / U256::from(self.duration)
    }

    /// The portion of `reward` that will still be unpaid at time `at` (§4.1
    /// `undistributed_rewards`).
    pub fn undistributed_rewards(&self, at: u64) -> U256 {
        if self.duration == 0 || at >= self.finished {
            return U256::zero();
        }
        let start = self.finished - self.duration;
        let elapsed = at.saturating_sub(start);
        self.reward - self.reward * U256::from(elapsed) / U256::from(self.duration)
    }
}
