pub mod create_schedule;
pub mod deposit_tokens;
pub mod claim;
pub mod emit_vesting_quote;
pub mod pause;
pub mod unpause;
pub mod revoke_schedule;
pub mod sweep_dust_after_end;

pub use create_schedule::*;
pub use deposit_tokens::*;
pub use claim::*;
pub use emit_vesting_quote::*;
pub use pause::*;
pub use unpause::*;
pub use revoke_schedule::*;
pub use sweep_dust_after_end::*;
