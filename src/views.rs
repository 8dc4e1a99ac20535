//! Read-only snapshot DTOs for surrounding RPC/view layers, mirroring the teacher's
//! `HumanReadableFarm`/`PoolSummary` split between internal wide-integer state and a
//! human/JSON-friendly view. `U256` values are rendered as decimal strings since they don't
//! fit any JSON-native numeric type.

use serde::{Deserialize, Serialize};

use crate::engine::FarmInfo;

/// JSON-friendly snapshot of a campaign (§6 `farm_info`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmInfoView {
    pub finished: u64,
    pub duration: u64,
    pub reward: String,
    pub balance: String,
    pub active: bool,
}

impl FarmInfoView {
    pub fn from_info(info: FarmInfo, now: u64) -> Self {
        FarmInfoView {
            finished: info.finished,
            duration: info.duration,
            reward: info.reward.to_string(),
            balance: info.balance.to_string(),
            active: info.duration > 0 && now < info.finished,
        }
    }
}

/// JSON-friendly snapshot of one account's claimable reward.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRewardView {
    pub account_id: String,
    pub farmed: String,
}

impl AccountRewardView {
    pub fn new(account_id: &str, farmed: crate::U256) -> Self {
        AccountRewardView {
            account_id: account_id.to_string(),
            farmed: farmed.to_string(),
        }
    }
}

/// Snapshot across every reward token registered on a [`crate::MultiFarmingEngine`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PoolSummaryView {
    pub farms: Vec<(String, FarmInfoView)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::U256;

    #[test]
    fn view_reports_active_while_before_finish() {
        let info = FarmInfo {
            finished: 100,
            duration: 100,
            reward: U256::from(5u64),
            balance: U256::from(5u64),
        };
        let view = FarmInfoView::from_info(info, 50);
        assert!(view.active);
        assert_eq!(view.reward, "5");

        let view_after = FarmInfoView::from_info(info, 200);
        assert!(!view_after.active);
    }
}
