use crate::{
    error::LotteryError,
    state::{Config, CONFIG_ACCOUNT_SIZE, DEFAULT_MAX_DRAW_PASSES},
};
use anchor_lang::prelude::*;

/// Instruction to initialize the program configuration
/// This should be called once during program deployment
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `max_draw_passes` - Upper bound on ledger passes a single draw may take,
///   `DEFAULT_MAX_DRAW_PASSES` when omitted
///
/// # Security Considerations
/// - Creates a PDA with seed "config" to store program authorities
/// - Only needs to be called once during deployment
/// - The management authority will be set and locked
/// - The payout authority will be set and locked
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * Upgrade Authority - Signer needs to be the owner of the program
/// * Management Authority - Account that may open, draw, settle and reset the lottery
/// * Payout Authority - Account that receives the operator's retained share
pub fn init_config(ctx: Context<InitConfig>, max_draw_passes: Option<u32>) -> Result<()> {
    let max_draw_passes = max_draw_passes.unwrap_or(DEFAULT_MAX_DRAW_PASSES);
    require!(max_draw_passes > 0, LotteryError::InvalidDrawPassLimit);

    ctx.accounts.config.payout_authority = ctx.accounts.payout_authority.key();
    ctx.accounts.config.management_authority = ctx.accounts.management_authority.key();
    ctx.accounts.config.upgrade_authority = ctx.accounts.upgrade_authority.key();
    ctx.accounts.config.max_draw_passes = max_draw_passes;
    ctx.accounts.config.bump = ctx.bumps.config;

    msg!("Config initialized with a limit of {} draw passes", max_draw_passes);
    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = upgrade_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub upgrade_authority: Signer<'info>,
    pub payout_authority: SystemAccount<'info>,
    pub management_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
