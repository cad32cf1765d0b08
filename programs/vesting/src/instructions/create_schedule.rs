use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::pda;

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    start_ts: i64,
    cliff_seconds: u64,
    vesting_seconds: u64,
    total_amount: u64,
) -> Result<()> {
    require!(total_amount > 0, VestingError::InvalidConfig);
    require!(start_ts > 0, VestingError::InvalidTimestamp);

    let beneficiary = ctx.accounts.beneficiary.key();
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
    require!(
        beneficiary != ctx.accounts.admin.key(),
        VestingError::InvalidConfig
    );

    // Beneficiary must be able to sign claims. Block the program PDAs outright.
    let schedule_key = ctx.accounts.schedule.key();
    let (vault_pda, _) = pda::find_vault_address(&schedule_key);
    require!(beneficiary != schedule_key, VestingError::InvalidConfig);
    require!(beneficiary != vault_pda, VestingError::InvalidConfig);
    require!(beneficiary != crate::ID, VestingError::InvalidConfig);

    let st = &mut ctx.accounts.schedule;
    st.admin = ctx.accounts.admin.key();
    st.beneficiary = beneficiary;
    st.mint = ctx.accounts.mint.key();
    st.start_ts = start_ts;
    st.cliff_seconds = cliff_seconds;
    st.vesting_seconds = vesting_seconds;
    st.total_amount = total_amount;
    st.claimed_amount = 0;
    st.paused = false;
    st.revoked = false;
    st.bump = ctx.bumps.schedule;

    emit!(ScheduleCreated {
        admin: st.admin,
        beneficiary: st.beneficiary,
        mint: st.mint,
        start_ts,
        cliff_seconds,
        vesting_seconds,
        total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [SCHEDULE_SEED, beneficiary.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Only used as a PDA seed; validated in-handler.
    pub beneficiary: UncheckedAccount<'info>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleCreated {
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub start_ts: i64,
    pub cliff_seconds: u64,
    pub vesting_seconds: u64,
    pub total_amount: u64,
}
