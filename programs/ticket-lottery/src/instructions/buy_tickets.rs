use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Lottery, Treasury},
};

/// Event emitted when tickets are issued for a deposit
#[event]
pub struct TicketsIssued {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Lamports deposited into the treasury
    pub deposit: u64,
    /// Whole units added to the pool
    pub units: u64,
    /// Tickets minted for this deposit
    pub tickets: u64,
    /// Buyer's ticket balance after the deposit
    pub balance: u64,
    /// Pool after the deposit
    pub pool: u64,
    pub round: u64,
}

/// Instruction to exchange a lamport deposit for tickets
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `deposit` - Lamports moved from the signer into the treasury
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the deposit is greater than 0
/// 2. Verifies the treasury account matches the one stored in the lottery
/// 3. Rejects new participants once the ledger is full
/// 4. Verifies the treasury received exactly the deposit
///
/// # Implementation Notes
/// - Deposits are floored to whole SOL units; 10 tickets per unit
/// - Updates state before performing external calls
pub fn buy_tickets(ctx: Context<BuyTickets>, deposit: u64) -> Result<()> {
    require!(
        ctx.accounts.treasury.key() == ctx.accounts.lottery.treasury,
        LotteryError::InvalidTreasury,
    );

    let buyer = ctx.accounts.signer.key();
    let issue = ctx.accounts.lottery.issue_tickets(buyer, deposit)?;

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &buyer,
            &ctx.accounts.treasury.key(),
            deposit,
        ),
        &[
            ctx.accounts.signer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(deposit)
                .ok_or(LotteryError::Overflow)?,
        LotteryError::TransferFailed
    );

    msg!("Exchanging {} units for {} tickets", issue.units, issue.tickets);
    msg!("Total tickets of {}: {}", buyer, issue.balance);
    msg!("Current prize pool: {}", issue.pool);

    emit!(TicketsIssued {
        lottery: ctx.accounts.lottery.key(),
        buyer,
        deposit,
        units: issue.units,
        tickets: issue.tickets,
        balance: issue.balance,
        pool: issue.pool,
        round: ctx.accounts.lottery.round,
    });

    Ok(())
}

/// Accounts required for the buy_tickets instruction
#[derive(Accounts)]
pub struct BuyTickets<'info> {
    #[account(
        mut,
        seeds = [b"lottery"],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Treasury PDA receiving the deposit
    /// PDA with seeds ["treasury", lottery_key]
    #[account(
        mut,
        seeds = [
            b"treasury",
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The account purchasing tickets
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
