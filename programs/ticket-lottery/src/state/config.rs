use anchor_lang::prelude::*;

// 8 discriminator + 32 payout_authority + 32 management_authority + 32 upgrade_authority + 4 max_draw_passes + 1 bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 4 + 1;

/// Passes used when the deployer does not ask for a specific limit.
pub const DEFAULT_MAX_DRAW_PASSES: u32 = 32;

#[account]
pub struct Config {
    pub payout_authority: Pubkey,
    pub management_authority: Pubkey,
    pub upgrade_authority: Pubkey,
    /// Upper bound on full passes over the ledger before a draw gives up.
    pub max_draw_passes: u32,
    pub bump: u8,
}
