use anchor_lang::prelude::*;

use crate::{
    error::LotteryError,
    state::{Lottery, TicketBalance},
};

use super::{compute_statistics, DrawStatistics, RandomSource};

/// Result of a settled draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub statistics: DrawStatistics,
    pub total_tickets: u64,
    /// Full passes over the ledger, including the winning one
    pub passes: u32,
    pub rolls: u64,
}

/// Runs the weighted draw for the current round and records the winner.
///
/// Statistics are taken once up front and reused for every pass. A lottery
/// that already has a winner is left as it is and yields `Ok(None)`.
pub fn run_draw(
    lottery: &mut Lottery,
    rng: &mut impl RandomSource,
    max_passes: u32,
) -> Result<Option<DrawOutcome>> {
    let total_tickets = lottery.total_tickets()?;
    if lottery.winner.is_some() {
        return Ok(None);
    }

    let statistics = compute_statistics(
        lottery.ticket_balances.iter().map(|b| b.ticket_count),
        total_tickets,
    )?;
    let outcome = select_winner(
        &lottery.ticket_balances,
        &statistics,
        total_tickets,
        rng,
        max_passes,
    )?;

    lottery.commit_winner(outcome.winner);
    Ok(Some(outcome))
}

/// Walks the ledger in order, giving every eligible holder one roll per pass,
/// until some roll lands inside a holder's effective range.
///
/// A holder is eligible when its balance reaches `cutoff_balance`. Its range
/// is its balance, widened by an equal share of the bonus when it holds the
/// top balance.
pub fn select_winner(
    ledger: &[TicketBalance],
    statistics: &DrawStatistics,
    total_tickets: u64,
    rng: &mut impl RandomSource,
    max_passes: u32,
) -> Result<DrawOutcome> {
    require!(total_tickets > 0, LotteryError::NonTermination);

    let bonus_share = statistics.bonus_share();
    let mut rolls: u64 = 0;

    for pass in 1..=max_passes {
        for entry in ledger {
            if entry.ticket_count < statistics.cutoff_balance {
                continue;
            }

            let roll = rng.roll(1, total_tickets)?;
            rolls += 1;

            let mut effective = entry.ticket_count;
            if entry.ticket_count == statistics.top_balance {
                effective = effective.saturating_add(bonus_share);
            }

            if roll <= effective {
                return Ok(DrawOutcome {
                    winner: entry.owner,
                    statistics: *statistics,
                    total_tickets,
                    passes: pass,
                    rolls,
                });
            }
        }
    }

    msg!("No winner after {} passes and {} rolls", max_passes, rolls);
    err!(LotteryError::NonTermination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UNIT_SCALE;
    use crate::test_utils::{account, error_code, ScriptedRolls};

    fn entry(n: u8, ticket_count: u64) -> TicketBalance {
        TicketBalance {
            owner: account(n),
            ticket_count,
        }
    }

    #[test]
    fn play_before_any_deposit_is_uninitialized() {
        let mut lottery = Lottery::default();
        let mut rng = ScriptedRolls::new(&[1]);

        let err = run_draw(&mut lottery, &mut rng, 8).unwrap_err();

        assert_eq!(error_code(err), u32::from(LotteryError::Uninitialized));
        assert!(rng.requests.is_empty());
        assert_eq!(lottery.winner, None);
    }

    #[test]
    fn rolls_span_all_tickets() {
        let ledger = [entry(1, 10), entry(2, 90)];
        let stats = compute_statistics([10, 90], 100).unwrap();
        let mut rng = ScriptedRolls::new(&[100, 100, 100, 1]);

        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 8).unwrap();

        assert!(rng.requests.iter().all(|r| *r == (1, 100)));
        assert_eq!(outcome.winner, account(2));
        assert_eq!(outcome.passes, 2);
        assert_eq!(outcome.rolls, 4);
    }

    #[test]
    fn first_landing_roll_in_ledger_order_wins() {
        let ledger = [entry(1, 10), entry(2, 90)];
        let stats = compute_statistics([10, 90], 100).unwrap();
        let mut rng = ScriptedRolls::new(&[10, 1]);

        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 8).unwrap();

        assert_eq!(outcome.winner, account(1));
        assert_eq!(rng.requests.len(), 1);
    }

    #[test]
    fn holders_below_the_cutoff_never_roll() {
        let ledger = [entry(1, 2), entry(2, 40), entry(3, 58)];
        let stats = compute_statistics([2, 40, 58], 100).unwrap();
        let mut rng = ScriptedRolls::new(&[100, 100, 100, 100, 1]);

        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 8).unwrap();

        // two rolls per pass, the fifth lands for the second holder
        assert_eq!(outcome.winner, account(2));
        assert_eq!(outcome.passes, 3);
        assert_eq!(outcome.rolls, 5);
    }

    #[test]
    fn top_holder_range_includes_the_bonus() {
        let ledger = [entry(1, 2), entry(2, 40), entry(3, 58)];
        let stats = compute_statistics([2, 40, 58], 100).unwrap();

        // 60 is past 58 tickets but inside 58 + 2 bonus
        let mut rng = ScriptedRolls::new(&[41, 60]);
        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 1).unwrap();
        assert_eq!(outcome.winner, account(3));

        let mut rng = ScriptedRolls::new(&[41, 61]);
        let err = select_winner(&ledger, &stats, 100, &mut rng, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(LotteryError::NonTermination));
    }

    #[test]
    fn bonus_is_split_between_tied_top_holders() {
        let ledger = [entry(1, 3), entry(2, 3), entry(3, 47), entry(4, 47)];
        let stats = compute_statistics([3, 3, 47, 47], 100).unwrap();
        assert_eq!(stats.bonus, 3);
        assert_eq!(stats.tie_count, 2);

        // the first tied holder gets 47 + 1
        let mut rng = ScriptedRolls::new(&[48]);
        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 1).unwrap();
        assert_eq!(outcome.winner, account(3));

        let mut rng = ScriptedRolls::new(&[49, 48]);
        let outcome = select_winner(&ledger, &stats, 100, &mut rng, 1).unwrap();
        assert_eq!(outcome.winner, account(4));
    }

    #[test]
    fn exhausted_pass_limit_fails_without_a_winner() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(2), 9 * UNIT_SCALE).unwrap();
        let before = lottery.clone();
        let mut rng = ScriptedRolls::new(&[100]);

        let err = run_draw(&mut lottery, &mut rng, 5).unwrap_err();

        assert_eq!(error_code(err), u32::from(LotteryError::NonTermination));
        assert_eq!(rng.requests.len(), 10);
        assert_eq!(lottery, before);
    }

    #[test]
    fn sole_eligible_holder_wins_in_the_first_pass() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), 100 * UNIT_SCALE).unwrap();
        let mut rng = ScriptedRolls::new(&[1_000]);

        let outcome = run_draw(&mut lottery, &mut rng, 1).unwrap().unwrap();

        assert_eq!(outcome.winner, account(1));
        assert_eq!(outcome.passes, 1);
        assert_eq!(lottery.winner, Some(account(1)));
    }

    #[test]
    fn sole_holder_above_cutoff_wins_over_excluded_holders() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(2), 99 * UNIT_SCALE).unwrap();
        let mut rng = ScriptedRolls::new(&[1_000, 1_000, 3]);

        let outcome = run_draw(&mut lottery, &mut rng, 4).unwrap().unwrap();

        assert_eq!(outcome.statistics.cutoff_balance, 990);
        assert_eq!(outcome.winner, account(2));
        assert!(rng.requests.iter().all(|r| *r == (1, 1_000)));
        assert_eq!(outcome.rolls, 1);
    }

    #[test]
    fn recorded_winner_is_not_redrawn() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(2), UNIT_SCALE).unwrap();
        lottery.commit_winner(account(2));
        let mut rng = ScriptedRolls::new(&[1]);

        assert_eq!(run_draw(&mut lottery, &mut rng, 4).unwrap(), None);
        assert_eq!(lottery.winner, Some(account(2)));
        assert!(rng.requests.is_empty());
    }

    #[test]
    fn redraw_after_winner_reset_keeps_tickets() {
        let mut lottery = Lottery::default();
        lottery.issue_tickets(account(1), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(2), UNIT_SCALE).unwrap();
        lottery.issue_tickets(account(3), UNIT_SCALE).unwrap();

        let mut rng = ScriptedRolls::new(&[1]);
        run_draw(&mut lottery, &mut rng, 4).unwrap();
        assert_eq!(lottery.winner, Some(account(1)));

        lottery.reset_winner();
        let mut rng = ScriptedRolls::new(&[30, 30, 5]);
        let outcome = run_draw(&mut lottery, &mut rng, 4).unwrap().unwrap();

        assert_eq!(outcome.statistics.tie_count, 3);
        assert_eq!(lottery.winner, Some(account(3)));
        assert_eq!(lottery.total_tickets().unwrap(), 30);
    }
}
