//! Linear token vesting with cliff, escrowed per beneficiary.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod token_vesting {
    use super::*;

    /// Creates a schedule and its escrow vault for a beneficiary.
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        start_ts: i64,
        cliff_seconds: u64,
        vesting_seconds: u64,
        total_amount: u64,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(
            ctx,
            start_ts,
            cliff_seconds,
            vesting_seconds,
            total_amount,
        )
    }

    /// Funds the escrow vault before vesting starts.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    /// Transfers everything vested and not yet claimed to the beneficiary.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Emits a read-only quote of vested/claimable amounts for display.
    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn revoke_schedule(ctx: Context<RevokeSchedule>) -> Result<()> {
        instructions::revoke_schedule::revoke_schedule(ctx)
    }

    pub fn sweep_dust_after_end(ctx: Context<SweepDustAfterEnd>) -> Result<()> {
        instructions::sweep_dust_after_end::sweep_dust_after_end(ctx)
    }
}
