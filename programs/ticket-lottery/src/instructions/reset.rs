use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, Lottery},
};

/// Event emitted when the winner marker is cleared
#[event]
pub struct WinnerReset {
    pub lottery: Pubkey,
    pub round: u64,
    /// The winner that was cleared, if any
    pub previous_winner: Option<Pubkey>,
}

/// Event emitted when a round is aborted
#[event]
pub struct LotteryReset {
    pub lottery: Pubkey,
    /// The round that was aborted
    pub round: u64,
    /// Pool of the aborted round, if any deposit was made
    pub pool: Option<u64>,
    pub participants: u32,
}

/// Clears only the winner so the draw can be repeated on the same tickets.
pub fn reset_winner(ctx: Context<ManageLottery>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let previous_winner = lottery.winner;
    lottery.reset_winner();

    emit!(WinnerReset {
        lottery: lottery.key(),
        round: lottery.round,
        previous_winner,
    });

    Ok(())
}

/// Aborts the round: clears winner, pool and ledger.
///
/// Deposits of the aborted round stay in the treasury.
pub fn reset(ctx: Context<ManageLottery>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let round = lottery.round;
    let pool = lottery.pool;
    let participants = lottery.ticket_balances.len() as u32;
    lottery.reset();

    msg!("Round {} reset with {} participants", round, participants);

    emit!(LotteryReset {
        lottery: lottery.key(),
        round,
        pool,
        participants,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ManageLottery<'info> {
    #[account(
        mut,
        seeds = [b"lottery"],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    pub management_authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,
}
