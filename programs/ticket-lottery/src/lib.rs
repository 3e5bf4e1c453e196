use anchor_lang::prelude::*;
use instructions::*;

pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_utils;

use state::PayoutReceipt;

declare_id!("DVvqvtMZffBnZVEZ2PAiS6smHESkaU14Yzqk9UvJiEus");

#[program]
pub mod ticket_lottery {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, max_draw_passes: Option<u32>) -> Result<()> {
        instructions::init_config::init_config(ctx, max_draw_passes)
    }

    pub fn init_lottery(ctx: Context<InitLottery>) -> Result<()> {
        instructions::init_lottery::init_lottery(ctx)
    }

    pub fn buy_tickets(ctx: Context<BuyTickets>, deposit: u64) -> Result<()> {
        instructions::buy_tickets::buy_tickets(ctx, deposit)
    }

    pub fn get_balance(ctx: Context<ReadLottery>, owner: Pubkey) -> Result<u64> {
        instructions::queries::get_balance(ctx, owner)
    }

    pub fn get_pool(ctx: Context<ReadLottery>) -> Result<u64> {
        instructions::queries::get_pool(ctx)
    }

    pub fn get_total_tickets(ctx: Context<ReadLottery>) -> Result<u64> {
        instructions::queries::get_total_tickets(ctx)
    }

    pub fn play(ctx: Context<Play>) -> Result<()> {
        instructions::play::play(ctx)
    }

    pub fn get_winner(ctx: Context<ReadLottery>) -> Result<Option<Pubkey>> {
        instructions::queries::get_winner(ctx)
    }

    pub fn send_reward(ctx: Context<SendReward>) -> Result<PayoutReceipt> {
        instructions::send_reward::send_reward(ctx)
    }

    pub fn get_last_payout(ctx: Context<ReadLottery>) -> Result<Option<PayoutReceipt>> {
        instructions::queries::get_last_payout(ctx)
    }

    pub fn reset_winner(ctx: Context<ManageLottery>) -> Result<()> {
        instructions::reset::reset_winner(ctx)
    }

    pub fn reset(ctx: Context<ManageLottery>) -> Result<()> {
        instructions::reset::reset(ctx)
    }

    pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>) -> Result<()> {
        instructions::withdraw_from_treasury::withdraw_from_treasury(ctx)
    }
}
