use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, Lottery, Treasury, LOTTERY_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the lottery is opened
#[event]
pub struct LotteryOpened {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The treasury PDA holding deposits
    pub treasury: Pubkey,
}

/// Instruction to create the lottery state account and its treasury
///
/// # Account Validations
/// * Lottery - New PDA with seed "lottery" holding the ticket ledger, pool and winner
/// * Treasury - New PDA with seeds ["treasury", lottery_key] receiving all deposits
/// * Config - Must name the signer as management authority
///
/// # Implementation Notes
/// - Starts at round 0 with an empty ledger and no pool
pub fn init_lottery(ctx: Context<InitLottery>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.treasury = ctx.accounts.treasury.key();
    lottery.pool = None;
    lottery.ticket_balances = Vec::new();
    lottery.winner = None;
    lottery.round = 0;
    lottery.last_payout = None;
    lottery.bump = ctx.bumps.lottery;

    ctx.accounts.treasury.lottery = lottery.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(LotteryOpened {
        lottery: lottery.key(),
        treasury: ctx.accounts.treasury.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitLottery<'info> {
    #[account(
        init,
        payer = management_authority,
        space = LOTTERY_ACCOUNT_SIZE,
        seeds = [b"lottery"],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            b"treasury",
            lottery.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
