use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Config, Lottery, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Emitted when the operator sweeps retained lamports out of the treasury
#[event]
pub struct TreasuryWithdrawn {
    pub lottery: Pubkey,
    pub round: u64,
    pub amount: u64,
    pub recipient: Pubkey,
}

/// Sweeps everything above the rent floor to the payout authority.
///
/// Between rounds the treasury only holds the 5% retained from settled
/// rounds and the sub-unit remainders of deposits, so the sweep is refused
/// while the current round has a pool.
pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>) -> Result<()> {
    let lottery = &ctx.accounts.lottery;
    lottery.ensure_unfunded()?;
    require_keys_eq!(
        ctx.accounts.treasury.key(),
        lottery.treasury,
        LotteryError::InvalidTreasury
    );

    let treasury = ctx.accounts.treasury.to_account_info();
    let recipient = ctx.accounts.payout_authority.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(TREASURY_ACCOUNT_SIZE);
    let amount = Treasury::withdrawable(treasury.lamports(), rent_floor)?;

    treasury.sub_lamports(amount)?;
    recipient.add_lamports(amount)?;

    msg!("Withdrew {} lamports from the treasury to {}", amount, recipient.key);
    emit!(TreasuryWithdrawn {
        lottery: lottery.key(),
        round: lottery.round,
        amount,
        recipient: recipient.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFromTreasury<'info> {
    #[account(
        seeds = [b"lottery"],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            lottery.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ LotteryError::NotProgramManagementAuthority,
        has_one = payout_authority @ LotteryError::NotPayoutAuthority
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub payout_authority: SystemAccount<'info>,
}
