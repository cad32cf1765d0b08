use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Stops all future claims. Escrowed funds stay in the vault until the
/// admin sweeps them.
pub fn revoke_schedule(ctx: Context<RevokeSchedule>) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!st.revoked, VestingError::ScheduleRevoked);
    st.revoked = true;

    emit!(ScheduleRevoked {
        admin: st.admin,
        beneficiary: st.beneficiary,
        claimed_amount: st.claimed_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RevokeSchedule<'info> {
    #[account(
        mut,
        seeds = [SCHEDULE_SEED, schedule.beneficiary.as_ref(), schedule.mint.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleRevoked {
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub claimed_amount: u64,
}
