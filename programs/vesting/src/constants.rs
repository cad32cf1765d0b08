//! Program-wide constants.

/// Seed prefix for the per-beneficiary schedule PDA.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix for the escrow vault PDA (keyed by schedule).
pub const VAULT_SEED: &[u8] = b"vault";
