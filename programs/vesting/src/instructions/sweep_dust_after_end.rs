use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Returns the vault remainder to the admin. Allowed once the schedule is
/// revoked, or once vesting has ended and the beneficiary has claimed in
/// full.
pub fn sweep_dust_after_end(ctx: Context<SweepDustAfterEnd>) -> Result<()> {
    let st = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        VestingError::UnauthorizedAdmin
    );

    let now = Clock::get()?.unix_timestamp;
    if !st.revoked {
        require!(st.vesting_ended(now)?, VestingError::SweepBeforeEnd);
        require!(
            st.claimed_amount == st.total_amount,
            VestingError::SweepNotAllowedOutstanding
        );
    }

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_destination.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_destination.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let amount = ctx.accounts.vault.amount;
    if amount == 0 {
        emit!(DustSwept {
            admin: st.admin,
            amount: 0,
        });
        return Ok(());
    }

    let beneficiary_key = st.beneficiary;
    let mint_key = st.mint;
    let bump = st.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[
        SCHEDULE_SEED,
        beneficiary_key.as_ref(),
        mint_key.as_ref(),
        &[bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.admin_destination.to_account_info(),
                authority: ctx.accounts.schedule.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(DustSwept {
        admin: ctx.accounts.schedule.admin,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SweepDustAfterEnd<'info> {
    #[account(
        seeds = [SCHEDULE_SEED, schedule.beneficiary.as_ref(), schedule.mint.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump,
        constraint = vault.mint == schedule.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DustSwept {
    pub admin: Pubkey,
    pub amount: u64,
}
