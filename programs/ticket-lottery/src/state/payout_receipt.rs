use anchor_lang::prelude::*;

// 8 round + 32 winner + 8 amount + 8 retained
pub const PAYOUT_RECEIPT_SIZE: usize = 8 + 32 + 8 + 8;

/// Record of a settled round, kept on the lottery until the next payout
/// so the operator can reconcile transfers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PayoutReceipt {
    pub round: u64,
    pub winner: Pubkey,
    /// Lamports moved to the winner
    pub amount: u64,
    /// Lamports left in the treasury for the operator
    pub retained: u64,
}
