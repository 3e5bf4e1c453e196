use anchor_lang::prelude::*;

use crate::state::{Lottery, PayoutReceipt};

pub fn get_balance(ctx: Context<ReadLottery>, owner: Pubkey) -> Result<u64> {
    Ok(ctx.accounts.lottery.balance_of(&owner))
}

pub fn get_pool(ctx: Context<ReadLottery>) -> Result<u64> {
    ctx.accounts.lottery.pool()
}

pub fn get_total_tickets(ctx: Context<ReadLottery>) -> Result<u64> {
    ctx.accounts.lottery.total_tickets()
}

/// `None` until a draw has settled in the current round.
pub fn get_winner(ctx: Context<ReadLottery>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.lottery.winner)
}

pub fn get_last_payout(ctx: Context<ReadLottery>) -> Result<Option<PayoutReceipt>> {
    Ok(ctx.accounts.lottery.last_payout.clone())
}

#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [b"lottery"],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}
