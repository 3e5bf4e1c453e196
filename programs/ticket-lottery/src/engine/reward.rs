use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Lottery, PayoutReceipt, UNIT_SCALE},
};

/// Percentage of the reward pool transferred to the winner. The rest stays
/// with the operator.
pub const WINNER_SHARE_PERCENT: u64 = 95;

/// Lamport split of a settled pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    pub reward_pool: u64,
    pub amount: u64,
    pub retained: u64,
}

/// Computes what the recorded winner is owed. Does not touch the lottery.
pub fn prepare_payout(lottery: &Lottery) -> Result<Payout> {
    let winner = lottery.winner.ok_or(LotteryError::NoWinner)?;
    let reward_pool = lottery
        .pool()?
        .checked_mul(UNIT_SCALE)
        .ok_or(LotteryError::Overflow)?;

    let amount = (reward_pool as u128 * WINNER_SHARE_PERCENT as u128 / 100) as u64;

    Ok(Payout {
        winner,
        reward_pool,
        amount,
        retained: reward_pool - amount,
    })
}

/// Records the receipt for a completed transfer and resets the round.
pub fn settle(lottery: &mut Lottery, payout: &Payout) -> PayoutReceipt {
    let receipt = PayoutReceipt {
        round: lottery.round,
        winner: payout.winner,
        amount: payout.amount,
        retained: payout.retained,
    };
    lottery.last_payout = Some(receipt.clone());
    lottery.reset();
    receipt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{account, error_code};

    #[test]
    fn reward_without_winner_leaves_state_unchanged() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), 3 * UNIT_SCALE).unwrap();
        let before = lottery.clone();

        let err = prepare_payout(&lottery).unwrap_err();

        assert_eq!(error_code(err), u32::from(LotteryError::NoWinner));
        assert_eq!(lottery, before);
    }

    #[test]
    fn winner_receives_ninety_five_percent() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(2), 9 * UNIT_SCALE).unwrap();
        lottery.commit_winner(account(2));

        let payout = prepare_payout(&lottery).unwrap();

        assert_eq!(payout.winner, account(2));
        assert_eq!(payout.reward_pool, 10 * UNIT_SCALE);
        assert_eq!(payout.amount, 9_500_000_000);
        assert_eq!(payout.retained, 500_000_000);
    }

    #[test]
    fn sub_unit_deposits_do_not_reach_the_reward_pool() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE + UNIT_SCALE / 2).unwrap();
        lottery.commit_winner(account(1));

        let payout = prepare_payout(&lottery).unwrap();

        assert_eq!(payout.reward_pool, UNIT_SCALE);
        assert_eq!(payout.amount + payout.retained, UNIT_SCALE);
    }

    #[test]
    fn settling_records_a_receipt_and_resets_the_round() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), 2 * UNIT_SCALE).unwrap();
        lottery.commit_winner(account(1));
        let payout = prepare_payout(&lottery).unwrap();

        let receipt = settle(&mut lottery, &payout);

        assert_eq!(receipt.round, 0);
        assert_eq!(receipt.amount, 1_900_000_000);
        assert_eq!(lottery.last_payout, Some(receipt));
        assert_eq!(lottery.winner, None);
        assert!(lottery.ticket_balances.is_empty());
        assert_eq!(
            error_code(lottery.pool().unwrap_err()),
            u32::from(LotteryError::Uninitialized)
        );
        assert_eq!(lottery.round, 1);
    }
}
