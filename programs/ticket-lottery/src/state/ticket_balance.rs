use anchor_lang::prelude::*;

// 32 owner + 8 ticket_count
pub const TICKET_BALANCE_SIZE: usize = 32 + 8;

/// One row of the ticket ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketBalance {
    pub owner: Pubkey,
    pub ticket_count: u64,
}
