use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::error::VestingError;
use crate::state::VestingSchedule;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let st = &mut ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );
    require!(st.paused, VestingError::ScheduleNotPaused);
    st.paused = false;
    emit!(ScheduleUnpaused {
        admin: st.admin,
        beneficiary: st.beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(
        mut,
        seeds = [SCHEDULE_SEED, schedule.beneficiary.as_ref(), schedule.mint.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleUnpaused {
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
}
