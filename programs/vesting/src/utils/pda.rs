//! Client-side PDA derivation helpers.

use anchor_lang::prelude::*;

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};

/// Derives the schedule PDA for a beneficiary and mint.
pub fn find_schedule_address(beneficiary: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SCHEDULE_SEED, beneficiary.as_ref(), mint.as_ref()],
        &crate::ID,
    )
}

/// Derives the escrow vault PDA for a schedule.
pub fn find_vault_address(schedule: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, schedule.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let beneficiary = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let (a, bump_a) = find_schedule_address(&beneficiary, &mint);
        let (b, bump_b) = find_schedule_address(&beneficiary, &mint);
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);

        let (other, _) = find_schedule_address(&Pubkey::new_unique(), &mint);
        assert_ne!(a, other);
    }

    #[test]
    fn vault_keyed_by_schedule() {
        let (schedule, _) =
            find_schedule_address(&Pubkey::new_unique(), &Pubkey::new_unique());
        let (vault, _) = find_vault_address(&schedule);
        assert_ne!(vault, schedule);
    }
}
