use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::VestingSchedule;
use crate::utils::math;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Avoid borrow checker conflicts: capture the schedule AccountInfo before
    // taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();

    let st = &mut ctx.accounts.schedule;
    require!(!st.revoked, VestingError::ScheduleRevoked);
    require!(!st.paused, VestingError::SchedulePaused);
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        st.beneficiary,
        VestingError::UnauthorizedBeneficiary
    );

    // Enforce full funding before the first claim.
    if st.claimed_amount == 0 {
        require!(
            ctx.accounts.vault.amount == st.total_amount,
            VestingError::VaultNotExactlyFunded
        );
    }

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    let expected_ata = expected_ata_address(&st.beneficiary, &st.mint);
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.key(),
        expected_ata,
        VestingError::InvalidBeneficiaryAta
    );
    // Strict ATA checks (pre-created ATA policy).
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.owner,
        st.beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let vested = st.vested_amount(now)?;
    let claimable = math::claimable_amount(vested, st.claimed_amount)?;
    if claimable == 0 {
        return Ok(());
    }

    require!(
        ctx.accounts.vault.amount >= claimable,
        VestingError::InsufficientVaultBalance
    );

    // CPI transfer from vault to beneficiary ATA, signed by the schedule PDA.
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
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    st.claimed_amount = st
        .claimed_amount
        .checked_add(claimable)
        .ok_or(VestingError::MathOverflow)?;

    emit!(TokensClaimed {
        beneficiary: beneficiary_key,
        amount: claimable,
        vested,
        claimed_total: st.claimed_amount,
    });

    Ok(())
}

fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    // ATA derivation: PDA(owner, token_program_id, mint) with the associated
    // token program id.
    let seeds: &[&[u8]] = &[owner.as_ref(), anchor_spl::token::ID.as_ref(), mint.as_ref()];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
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
    pub beneficiary_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub vested: u64,
    pub claimed_total: u64,
}
