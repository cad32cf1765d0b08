use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::math;

/// Per-beneficiary vesting schedule PDA.
#[account]
pub struct VestingSchedule {
    /// Authority that created and administers the schedule.
    pub admin: Pubkey,
    /// Wallet entitled to claim.
    pub beneficiary: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Minimum elapsed seconds before any tokens vest.
    pub cliff_seconds: u64,
    /// Seconds from start until the allocation fully vests.
    pub vesting_seconds: u64,
    /// Total allocation escrowed for vesting.
    pub total_amount: u64,
    /// Running total already claimed.
    pub claimed_amount: u64,
    /// Emergency pause flag (blocks transfers only; accrual continues).
    pub paused: bool,
    /// Revocation flag (stops all future claims).
    pub revoked: bool,
    /// Schedule PDA bump, stored at creation.
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // admin
        32 + // beneficiary
        32 + // mint
        8 +  // start_ts
        8 +  // cliff_seconds
        8 +  // vesting_seconds
        8 +  // total_amount
        8 +  // claimed_amount
        1 +  // paused
        1 +  // revoked
        1;   // bump

    /// Amount vested as of `now_ts`.
    pub fn vested_amount(&self, now_ts: i64) -> std::result::Result<u64, VestingError> {
        math::vested_amount(
            self.total_amount,
            self.start_ts,
            self.cliff_seconds,
            self.vesting_seconds,
            now_ts,
        )
    }

    /// Vested-but-unclaimed amount as of `now_ts`.
    pub fn claimable_amount(&self, now_ts: i64) -> std::result::Result<u64, VestingError> {
        math::claimable_amount(self.vested_amount(now_ts)?, self.claimed_amount)
    }

    /// True once `now_ts` is at or past the vesting end boundary.
    pub fn vesting_ended(&self, now_ts: i64) -> std::result::Result<bool, VestingError> {
        math::vesting_ended(self.start_ts, self.vesting_seconds, now_ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(total: u64, claimed: u64) -> VestingSchedule {
        VestingSchedule {
            admin: Pubkey::new_unique(),
            beneficiary: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            start_ts: 1_000,
            cliff_seconds: 100,
            vesting_seconds: 1_000,
            total_amount: total,
            claimed_amount: claimed,
            paused: false,
            revoked: false,
            bump: 255,
        }
    }

    #[test]
    fn methods_delegate_to_math() {
        let st = schedule(8_000, 0);
        assert_eq!(st.vested_amount(999).unwrap(), 0);
        assert_eq!(st.vested_amount(1_050).unwrap(), 0);
        assert_eq!(st.vested_amount(1_500).unwrap(), 4_000);
        assert_eq!(st.vested_amount(2_000).unwrap(), 8_000);
        assert!(!st.vesting_ended(1_999).unwrap());
        assert!(st.vesting_ended(2_000).unwrap());
    }

    #[test]
    fn claimable_accounts_for_prior_claims() {
        let st = schedule(8_000, 3_000);
        assert_eq!(st.claimable_amount(1_500).unwrap(), 1_000);
        assert_eq!(st.claimable_amount(2_500).unwrap(), 5_000);
    }
}
