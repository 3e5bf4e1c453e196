use anchor_lang::prelude::*;

use crate::error::LotteryError;

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

#[account]
pub struct Treasury {
    pub lottery: Pubkey,
    pub bump: u8,
}

impl Treasury {
    /// Lamports that can leave the treasury while keeping `rent_floor` behind.
    pub fn withdrawable(lamports: u64, rent_floor: u64) -> Result<u64> {
        let amount = lamports
            .checked_sub(rent_floor)
            .ok_or(LotteryError::InsufficientFunds)?;
        require!(amount > 0, LotteryError::InsufficientFunds);
        Ok(amount)
    }
}
