use anchor_lang::prelude::*;
use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

use crate::error::LotteryError;

use super::{PayoutReceipt, TicketBalance, PAYOUT_RECEIPT_SIZE, TICKET_BALANCE_SIZE};

/// Lamports per pool unit. Deposits are floored to whole units.
pub const UNIT_SCALE: u64 = LAMPORTS_PER_SOL;

/// Tickets minted for every pool unit deposited.
pub const TICKETS_PER_UNIT: u64 = 10;

/// Maximum number of distinct ticket holders in one round.
pub const MAX_PARTICIPANTS: usize = 64;

// Space calculation:
// 8 (discriminator) +
// 32 (treasury) +
// 9 (pool: Option<u64>) +
// 4 + 64 * 40 (ticket_balances: Vec<TicketBalance>) +
// 33 (winner: Option<Pubkey>) +
// 8 (round) +
// 1 + 56 (last_payout: Option<PayoutReceipt>) +
// 1 (bump)
pub const LOTTERY_ACCOUNT_SIZE: usize = 8
    + 32
    + 9
    + 4
    + MAX_PARTICIPANTS * TICKET_BALANCE_SIZE
    + 33
    + 8
    + 1
    + PAYOUT_RECEIPT_SIZE
    + 1;

/// Outcome of a single ticket purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketIssue {
    pub units: u64,
    pub tickets: u64,
    pub balance: u64,
    pub pool: u64,
}

#[account]
#[derive(Debug, Default, PartialEq)]
pub struct Lottery {
    pub treasury: Pubkey,
    /// Whole units deposited this round, `None` until the first purchase.
    pub pool: Option<u64>,
    pub ticket_balances: Vec<TicketBalance>,
    pub winner: Option<Pubkey>,
    pub round: u64,
    pub last_payout: Option<PayoutReceipt>,
    pub bump: u8,
}

impl Lottery {
    /// Converts a lamport deposit into tickets for `owner` and grows the pool.
    ///
    /// Every check runs before the first write, so a failed purchase leaves
    /// the ledger and pool untouched. A deposit below one unit mints nothing
    /// and takes no ledger slot.
    pub fn issue_tickets(&mut self, owner: Pubkey, deposit: u64) -> Result<TicketIssue> {
        require!(deposit > 0, LotteryError::InvalidInput);

        let units = deposit / UNIT_SCALE;
        if units == 0 {
            return Ok(TicketIssue {
                units,
                tickets: 0,
                balance: self.balance_of(&owner),
                pool: self.pool.unwrap_or(0),
            });
        }
        let tickets = units
            .checked_mul(TICKETS_PER_UNIT)
            .ok_or(LotteryError::Overflow)?;

        let pool = self
            .pool
            .unwrap_or(0)
            .checked_add(units)
            .ok_or(LotteryError::Overflow)?;
        // Keep total tickets representable for the draw.
        require!(
            pool.checked_mul(TICKETS_PER_UNIT).is_some(),
            LotteryError::Overflow
        );

        let position = self.position_of(&owner);
        if position.is_none() {
            require!(
                self.ticket_balances.len() < MAX_PARTICIPANTS,
                LotteryError::LedgerFull
            );
        }
        let balance = position
            .map(|i| self.ticket_balances[i].ticket_count)
            .unwrap_or(0)
            .checked_add(tickets)
            .ok_or(LotteryError::Overflow)?;

        match position {
            Some(i) => self.ticket_balances[i].ticket_count = balance,
            None => self.ticket_balances.push(TicketBalance {
                owner,
                ticket_count: balance,
            }),
        }
        self.pool = Some(pool);

        Ok(TicketIssue {
            units,
            tickets,
            balance,
            pool,
        })
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.position_of(owner)
            .map(|i| self.ticket_balances[i].ticket_count)
            .unwrap_or(0)
    }

    pub fn pool(&self) -> Result<u64> {
        self.pool.ok_or_else(|| LotteryError::Uninitialized.into())
    }

    pub fn total_tickets(&self) -> Result<u64> {
        self.pool()?
            .checked_mul(TICKETS_PER_UNIT)
            .ok_or_else(|| LotteryError::Overflow.into())
    }

    /// Records `owner` as the winner unless one is already set.
    /// Returns whether this call made the commit.
    pub fn commit_winner(&mut self, owner: Pubkey) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(owner);
        true
    }

    /// Fails while the current round holds deposited units.
    pub fn ensure_unfunded(&self) -> Result<()> {
        require!(self.pool.is_none(), LotteryError::RoundInProgress);
        Ok(())
    }

    pub fn reset_winner(&mut self) {
        self.winner = None;
    }

    /// Clears winner, pool and ledger and moves on to the next round.
    pub fn reset(&mut self) {
        self.winner = None;
        self.pool = None;
        self.ticket_balances.clear();
        self.round = self.round.saturating_add(1);
    }

    fn position_of(&self, owner: &Pubkey) -> Option<usize> {
        self.ticket_balances.iter().position(|b| b.owner == *owner)
    }
}
