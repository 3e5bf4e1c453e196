use anchor_lang::prelude::*;

use crate::{
    engine::{prepare_payout, settle},
    error::LotteryError,
    state::{Config, Lottery, PayoutReceipt, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when the winner has been paid and the round closed
#[event]
pub struct RewardSent {
    /// The pubkey of the lottery
    pub lottery: Pubkey,
    /// The round that was settled
    pub round: u64,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports transferred to the winner
    pub amount: u64,
    /// Lamports kept in the treasury for the operator
    pub retained: u64,
}

/// Instruction to pay 95% of the pool to the recorded winner and reset the round
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates a winner has been drawn
/// 2. Ensures the winner account matches the recorded winner
/// 3. Verifies the treasury account matches the one stored in the lottery
/// 4. Keeps the treasury rent exempt after the transfer
/// 5. Verifies the winner received exactly the payout
///
/// # Implementation Notes
/// - The receipt is returned to the caller and stored as `last_payout`
/// - Clears winner, pool and ledger and advances the round counter
pub fn send_reward(ctx: Context<SendReward>) -> Result<PayoutReceipt> {
    let payout = prepare_payout(&ctx.accounts.lottery)?;

    require!(
        ctx.accounts.winner.key() == payout.winner,
        LotteryError::WinnerMismatch
    );
    require!(
        ctx.accounts.treasury.key() == ctx.accounts.lottery.treasury,
        LotteryError::InvalidTreasury
    );

    let treasury_account = ctx.accounts.treasury.to_account_info();
    let winner_account = ctx.accounts.winner.to_account_info();

    let rent_lamports = (Rent::get()?).minimum_balance(TREASURY_ACCOUNT_SIZE);
    let required = rent_lamports
        .checked_add(payout.amount)
        .ok_or(LotteryError::Overflow)?;
    require!(
        treasury_account.lamports() >= required,
        LotteryError::InsufficientFunds
    );

    let pre_transfer_balance = winner_account.lamports();

    // Transfer lamports by directly deducting from treasury and adding to the winner.
    // This only works because the treasury is a PDA owned by our program.
    treasury_account.sub_lamports(payout.amount)?;
    winner_account.add_lamports(payout.amount)?;

    require!(
        winner_account.lamports()
            == pre_transfer_balance
                .checked_add(payout.amount)
                .ok_or(LotteryError::Overflow)?,
        LotteryError::TransferFailed
    );

    let receipt = settle(&mut ctx.accounts.lottery, &payout);

    msg!(
        "Sent {} lamports to {}, {} retained",
        receipt.amount,
        receipt.winner,
        receipt.retained
    );

    emit!(RewardSent {
        lottery: ctx.accounts.lottery.key(),
        round: receipt.round,
        winner: receipt.winner,
        amount: receipt.amount,
        retained: receipt.retained,
    });

    Ok(receipt)
}

#[derive(Accounts)]
pub struct SendReward<'info> {
    #[account(
        mut,
        seeds = [b"lottery"],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub management_authority: Signer<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    /// The recorded winner receiving the payout
    #[account(mut)]
    pub winner: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
