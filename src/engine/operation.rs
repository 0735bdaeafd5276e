use super::{AccountId, Amount};
use chrono::NaiveDate;

/// The two account-holder categories, each governed by a distinct fee rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCategory {
    Individual,   // "natural" in the external format.
    Organization, // "juridical" in the external format.
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deposit,    // Adds funds to the account ("cash_in").
    Withdrawal, // Removes funds from the account ("cash_out").
}

/// One record of the input batch. Immutable once constructed; the engine
/// never mutates operations, it only reads them and records them into the
/// per-account history.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub account_id: AccountId,
    pub category: AccountCategory,
    pub kind: OperationKind,
    pub amount: Amount,
    // Carried through unchanged; commissions are computed in the
    // operation's own currency.
    pub currency: String,
}

impl Operation {
    // The new() function ensures we can only create amounts with a decimal
    // precision of 2 (whole cents).
    pub fn new(
        date: NaiveDate,
        account_id: AccountId,
        category: AccountCategory,
        kind: OperationKind,
        amount: Amount,
        currency: String,
    ) -> Self {
        Self {
            date,
            account_id,
            category,
            kind,
            amount: amount.round_dp(super::CENT_PRECISION),
            currency,
        }
    }
}

#[test]
// Decimal precision is 2 places. We should be unable to have more precise amounts.
fn test_operation_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999), dec!(1.0)),
        (dec!(1.00001), dec!(1.0)),
        (dec!(1.23), dec!(1.23)),
        (dec!(7.6700000000000003), dec!(7.67)),
    ] {
        let op = Operation::new(
            NaiveDate::from_ymd_opt(2016, 1, 5).unwrap(),
            1,
            AccountCategory::Individual,
            OperationKind::Deposit,
            raw_amount,
            "EUR".to_string(),
        );
        assert_eq!(want_amount, op.amount);
    }
}
