use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(!st.paused, VestingError::SchedulePaused);
    st.paused = true;
    emit!(SchedulePaused {
        admin: st.admin,
        beneficiary: st.beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [SCHEDULE_SEED, schedule.beneficiary.as_ref(), schedule.mint.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SchedulePaused {
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
}
