use super::fees::FeeSchedule;
use super::operation::{AccountCategory, Operation, OperationKind};
use super::{AccountId, Amount};
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Compute one commission per operation, in input order.
///
/// This is a fold over the batch: the accumulator is the per-account
/// history of already-processed operations, and each step reads the
/// history as it stood *before* the current operation (no look-ahead,
/// and an operation never counts towards its own weekly total).
///
/// Every operation is recorded into its account's history, deposits and
/// organization withdrawals included, even though only individual
/// withdrawals are ever read back. Keeping the bookkeeping uniform
/// avoids a second dispatch on the write path.
pub fn compute_commissions(schedule: &FeeSchedule, operations: &[Operation]) -> Vec<String> {
    let mut history: HashMap<AccountId, Vec<Operation>> = HashMap::new();

    operations
        .iter()
        .map(|op| {
            let fee = match (op.kind, op.category) {
                (OperationKind::Deposit, _) => schedule.deposit_fee(op.amount),
                (OperationKind::Withdrawal, AccountCategory::Individual) => {
                    let prior = history
                        .get(&op.account_id)
                        .map(Vec::as_slice)
                        .unwrap_or(&[]);
                    let weekly_total = weekly_withdrawal_total(prior, op.date);
                    schedule.individual_withdrawal_fee(op.amount, weekly_total)
                }
                (OperationKind::Withdrawal, AccountCategory::Organization) => {
                    schedule.organization_withdrawal_fee(op.amount)
                }
            };

            history.entry(op.account_id).or_default().push(op.clone());

            format!("{:.2}", fee)
        })
        .collect()
}

/// Sum the individual withdrawals in `prior` that fall inside the trailing
/// 7-calendar-day window ending at `as_of`. An entry dated exactly 7 days
/// before `as_of` is outside the window; 6 days before is inside.
fn weekly_withdrawal_total(prior: &[Operation], as_of: NaiveDate) -> Amount {
    let window_start = as_of - Duration::days(7);

    prior
        .iter()
        .filter(|op| {
            op.kind == OperationKind::Withdrawal
                && op.category == AccountCategory::Individual
                && op.date > window_start
        })
        .map(|op| op.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn withdrawal(account_id: AccountId, d: NaiveDate, amount: Amount) -> Operation {
        Operation::new(
            d,
            account_id,
            AccountCategory::Individual,
            OperationKind::Withdrawal,
            amount,
            "EUR".to_string(),
        )
    }

    fn deposit(account_id: AccountId, d: NaiveDate, amount: Amount) -> Operation {
        Operation::new(
            d,
            account_id,
            AccountCategory::Individual,
            OperationKind::Deposit,
            amount,
            "EUR".to_string(),
        )
    }

    #[test]
    fn test_weekly_total_no_history() {
        assert_eq!(dec!(0), weekly_withdrawal_total(&[], date(2016, 1, 10)));
    }

    #[test]
    fn test_weekly_total_sums_recent_withdrawals() {
        let prior = vec![
            withdrawal(1, date(2016, 1, 5), dec!(200)),
            withdrawal(1, date(2016, 1, 6), dec!(300)),
        ];
        assert_eq!(
            dec!(500),
            weekly_withdrawal_total(&prior, date(2016, 1, 10))
        );
    }

    #[test]
    // The window boundary is exclusive: exactly 7 days before is out,
    // 6 days before is in.
    fn test_weekly_total_window_boundary() {
        let prior = vec![
            withdrawal(1, date(2016, 1, 3), dec!(100)), // 7 days before: excluded
            withdrawal(1, date(2016, 1, 4), dec!(40)),  // 6 days before: included
        ];
        assert_eq!(dec!(40), weekly_withdrawal_total(&prior, date(2016, 1, 10)));
    }

    #[test]
    // Deposits never count towards the weekly withdrawal total, even when
    // recent.
    fn test_weekly_total_ignores_deposits() {
        let prior = vec![
            deposit(1, date(2016, 1, 9), dec!(5000)),
            withdrawal(1, date(2016, 1, 9), dec!(250)),
        ];
        assert_eq!(
            dec!(250),
            weekly_withdrawal_total(&prior, date(2016, 1, 10))
        );
    }

    #[test]
    // Organization withdrawals are recorded but never read back into the
    // weekly total.
    fn test_weekly_total_ignores_organization_withdrawals() {
        let org_withdrawal = Operation::new(
            date(2016, 1, 9),
            1,
            AccountCategory::Organization,
            OperationKind::Withdrawal,
            dec!(9000),
            "EUR".to_string(),
        );
        assert_eq!(
            dec!(0),
            weekly_withdrawal_total(&[org_withdrawal], date(2016, 1, 10))
        );
    }

    #[test]
    fn test_length_preservation() {
        let schedule = FeeSchedule::default();
        let operations = vec![
            deposit(1, date(2016, 1, 5), dec!(200)),
            withdrawal(1, date(2016, 1, 6), dec!(300)),
            withdrawal(2, date(2016, 1, 7), dec!(400)),
        ];

        let commissions = compute_commissions(&schedule, &operations);
        assert_eq!(operations.len(), commissions.len());
    }

    #[test]
    fn test_determinism() {
        let schedule = FeeSchedule::default();
        let operations = vec![
            withdrawal(1, date(2016, 1, 6), dec!(30000)),
            withdrawal(1, date(2016, 1, 7), dec!(1000)),
            deposit(2, date(2016, 1, 7), dec!(150)),
        ];

        assert_eq!(
            compute_commissions(&schedule, &operations),
            compute_commissions(&schedule, &operations)
        );
    }

    #[test]
    // An operation's own amount is not part of the weekly total used to
    // price it: the first 1000 withdrawal is free, the second one is not.
    fn test_weekly_total_is_causal() {
        let schedule = FeeSchedule::default();
        let operations = vec![
            withdrawal(1, date(2016, 1, 6), dec!(1000)),
            withdrawal(1, date(2016, 1, 7), dec!(1000)),
        ];

        let got = compute_commissions(&schedule, &operations);
        assert_eq!(vec!["0.00".to_string(), "3.00".to_string()], got);
    }

    #[test]
    // Accounts are independent: a heavy week on one account never spends
    // another account's allowance.
    fn test_accounts_are_isolated() {
        let schedule = FeeSchedule::default();
        let operations = vec![
            withdrawal(1, date(2016, 1, 6), dec!(30000)),
            withdrawal(2, date(2016, 1, 7), dec!(1000)),
        ];

        let got = compute_commissions(&schedule, &operations);
        assert_eq!(vec!["87.00".to_string(), "0.00".to_string()], got);
    }

    #[test]
    // The reference batch, end to end.
    fn test_reference_batch() {
        let eur = "EUR".to_string();
        let schedule = FeeSchedule::default();
        let operations = vec![
            Operation::new(
                date(2016, 1, 5),
                1,
                AccountCategory::Individual,
                OperationKind::Deposit,
                dec!(200),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 6),
                2,
                AccountCategory::Organization,
                OperationKind::Withdrawal,
                dec!(300),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 6),
                1,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(30000),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 7),
                1,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(1000),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 7),
                1,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(100),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 10),
                1,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(100),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 10),
                2,
                AccountCategory::Organization,
                OperationKind::Deposit,
                dec!(1000000),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 1, 10),
                3,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(1000),
                eur.clone(),
            ),
            Operation::new(
                date(2016, 2, 15),
                1,
                AccountCategory::Individual,
                OperationKind::Withdrawal,
                dec!(300),
                eur,
            ),
        ];

        let got = compute_commissions(&schedule, &operations);
        let want: Vec<String> = vec![
            "0.06", "0.90", "87.00", "3.00", "0.30", "0.30", "5.00", "0.00", "0.00",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(want, got);
    }
}
