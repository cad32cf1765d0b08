use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::state::VestingSchedule;
use crate::utils::math;

/// Advisory read-only quote for display; the claim path re-computes
/// eligibility on its own.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    let now = Clock::get()?.unix_timestamp;

    let vested = st.vested_amount(now)?;
    let claimable = math::claimable_amount(vested, st.claimed_amount)?;

    emit!(VestingQuote {
        beneficiary: st.beneficiary,
        now_ts: now,
        vested_amount: vested,
        claimed_amount: st.claimed_amount,
        claimable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [SCHEDULE_SEED, schedule.beneficiary.as_ref(), schedule.mint.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub now_ts: i64,
    pub vested_amount: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
}
