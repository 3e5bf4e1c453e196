use anchor_lang::prelude::*;

use crate::{
    engine::{run_draw, SlotHashEntropy},
    error::LotteryError,
    state::{Config, Lottery},
};

/// Event emitted when the draw records a winner
#[event]
pub struct WinnerDrawn {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    pub round: u64,
    /// The winner's address
    pub winner: Pubkey,
    pub total_tickets: u64,
    /// Lowest balance that took part in the draw
    pub cutoff_balance: u64,
    /// Tickets of excluded holders shared among the top holders
    pub bonus: u64,
    pub top_balance: u64,
    pub tie_count: u64,
    pub passes: u32,
    pub rolls: u64,
}

/// Draws the round's winner with ticket-weighted odds.
///
/// The randomness is seeded from the SlotHashes sysvar and the clock. The
/// balance statistics are computed once, then the ledger is walked in passes,
/// one roll over `[1, total_tickets]` per eligible holder, until a roll lands
/// inside a holder's range or the configured pass limit runs out.
///
/// # Errors
/// - `Uninitialized` if nobody has bought tickets this round
/// - `NonTermination` if the pass limit is exhausted or no holder can win
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
pub fn play(ctx: Context<Play>) -> Result<()> {
    ctx.accounts.lottery.total_tickets()?;

    let clock = Clock::get()?;
    let mut rng = SlotHashEntropy::from_sysvar(
        &ctx.accounts.recent_slothashes.to_account_info(),
        clock.unix_timestamp,
    )?;

    let max_passes = ctx.accounts.config.max_draw_passes;
    let lottery = &mut ctx.accounts.lottery;
    let Some(outcome) = run_draw(lottery, &mut rng, max_passes)? else {
        msg!("Winner already drawn for round {}", lottery.round);
        return Ok(());
    };

    msg!(
        "Winner: {} after {} passes ({} rolls over {} tickets)",
        outcome.winner,
        outcome.passes,
        outcome.rolls,
        outcome.total_tickets
    );

    emit!(WinnerDrawn {
        lottery: lottery.key(),
        round: lottery.round,
        winner: outcome.winner,
        total_tickets: outcome.total_tickets,
        cutoff_balance: outcome.statistics.cutoff_balance,
        bonus: outcome.statistics.bonus,
        top_balance: outcome.statistics.top_balance,
        tie_count: outcome.statistics.tie_count,
        passes: outcome.passes,
        rolls: outcome.rolls,
    });

    Ok(())
}

/// Accounts required for the play instruction
#[derive(Accounts)]
pub struct Play<'info> {
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

    /// The SlotHashes sysvar contains the most recent block hashes
    /// This is used as a source of randomness
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
