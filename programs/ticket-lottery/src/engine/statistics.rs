use anchor_lang::prelude::*;

use crate::error::LotteryError;

/// Share of all tickets, as a divisor, that the smallest holders may add up
/// to before they stop counting toward the participation floor (5%).
pub const EXCLUSION_DIVISOR: u64 = 20;

/// Snapshot of the balance distribution, taken once before a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawStatistics {
    /// Lowest balance still allowed to roll
    pub cutoff_balance: u64,
    /// Tickets held by the excluded bottom holders
    pub bonus: u64,
    pub top_balance: u64,
    /// Number of holders sharing `top_balance`
    pub tie_count: u64,
}

impl DrawStatistics {
    /// Extra winning range granted to a holder of the top balance.
    pub fn bonus_share(&self) -> u64 {
        self.bonus / self.tie_count
    }
}

/// Derives the participation floor, the bonus pool and the top-balance tie
/// from a set of ticket balances.
///
/// The smallest balances are absorbed into the bonus for as long as their
/// running sum stays within `total_tickets / 20`. Whatever survives defines
/// the floor (its smallest balance) and the top balance (its largest).
pub fn compute_statistics(
    balances: impl IntoIterator<Item = u64>,
    total_tickets: u64,
) -> Result<DrawStatistics> {
    let mut sorted: Vec<u64> = balances.into_iter().collect();
    sorted.sort_unstable();

    let exclude_threshold = total_tickets / EXCLUSION_DIVISOR;

    let mut bonus: u64 = 0;
    let mut excluded = 0;
    for balance in &sorted {
        match bonus.checked_add(*balance) {
            Some(sum) if sum <= exclude_threshold => {
                bonus = sum;
                excluded += 1;
            }
            _ => break,
        }
    }

    let remaining = &sorted[excluded..];
    let (cutoff_balance, top_balance) = match (remaining.first(), remaining.last()) {
        (Some(first), Some(last)) => (*first, *last),
        // Nothing holds a ticket, so no roll can ever land.
        _ => return err!(LotteryError::NonTermination),
    };

    let tie_count = sorted.iter().filter(|b| **b == top_balance).count() as u64;

    Ok(DrawStatistics {
        cutoff_balance,
        bonus,
        top_balance,
        tie_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::error_code;

    #[test]
    fn small_minority_is_not_excluded_when_it_exceeds_the_line() {
        // alice: 1 unit, bob: 9 units
        let stats = compute_statistics([10, 90], 100).unwrap();

        assert_eq!(
            stats,
            DrawStatistics {
                cutoff_balance: 10,
                bonus: 0,
                top_balance: 90,
                tie_count: 1,
            }
        );
    }

    #[test]
    fn equal_holders_all_tie_for_top() {
        let stats = compute_statistics([10, 10, 10], 30).unwrap();

        assert_eq!(stats.tie_count, 3);
        assert_eq!(stats.top_balance, 10);
        assert_eq!(stats.cutoff_balance, 10);
        assert_eq!(stats.bonus_share(), stats.bonus / 3);
    }

    #[test]
    fn bottom_holders_feed_the_bonus() {
        let stats = compute_statistics([58, 2, 40], 100).unwrap();

        assert_eq!(stats.bonus, 2);
        assert_eq!(stats.cutoff_balance, 40);
        assert_eq!(stats.top_balance, 58);
        assert_eq!(stats.tie_count, 1);
    }

    #[test]
    fn exclusion_stops_at_the_first_balance_that_does_not_fit() {
        // threshold 10: 3 + 4 fit, 3 + 4 + 5 does not
        let stats = compute_statistics([3, 4, 5, 88, 100], 200).unwrap();

        assert_eq!(stats.bonus, 7);
        assert_eq!(stats.cutoff_balance, 5);
        assert_eq!(stats.top_balance, 100);
    }

    #[test]
    fn tie_count_includes_excluded_holders_of_the_top_balance() {
        let stats = compute_statistics(vec![1; 100], 100).unwrap();

        assert_eq!(stats.bonus, 5);
        assert_eq!(stats.cutoff_balance, 1);
        assert_eq!(stats.top_balance, 1);
        assert_eq!(stats.tie_count, 100);
        assert_eq!(stats.bonus_share(), 0);
    }

    #[test]
    fn empty_distribution_cannot_be_drawn() {
        let err = compute_statistics([0, 0], 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LotteryError::NonTermination));

        let err = compute_statistics(Vec::new(), 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LotteryError::NonTermination));
    }
}
