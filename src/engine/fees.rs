use super::Amount;
use rust_decimal_macros::dec;

/// The injected fee configuration: percentage rates plus the cap, floor and
/// weekly allowance they combine with. The rule logic itself never
/// hard-codes a rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeSchedule {
    /// Percentage rate applied to deposit amounts.
    pub deposit_percent: Amount,

    /// Cap on the deposit fee.
    pub deposit_max_fee: Amount,

    /// Percentage rate applied to the portion of an individual withdrawal
    /// exceeding the weekly free allowance.
    pub individual_withdrawal_percent: Amount,

    /// Cumulative weekly withdrawal amount, per individual account, exempt
    /// from fees.
    pub individual_weekly_free_amount: Amount,

    /// Percentage rate applied to organization withdrawal amounts.
    pub organization_withdrawal_percent: Amount,

    /// Floor on the organization withdrawal fee.
    pub organization_min_fee: Amount,
}

impl Default for FeeSchedule {
    // The reference schedule: 0.03% capped at 5.00 on deposits, 0.3% past
    // 1000.00 per week for individuals, 0.3% with a 0.50 floor for
    // organizations.
    fn default() -> Self {
        Self {
            deposit_percent: dec!(0.03),
            deposit_max_fee: dec!(5),
            individual_withdrawal_percent: dec!(0.3),
            individual_weekly_free_amount: dec!(1000),
            organization_withdrawal_percent: dec!(0.3),
            organization_min_fee: dec!(0.5),
        }
    }
}

impl FeeSchedule {
    /// Deposit fee: a percentage of the amount, capped.
    pub fn deposit_fee(&self, amount: Amount) -> Amount {
        let fee = percentage_of(amount, self.deposit_percent);
        round_up_to_cent(fee.min(self.deposit_max_fee))
    }

    /// Individual withdrawal fee: only the portion of the withdrawal that
    /// pushes the cumulative weekly total past the free allowance is taxed.
    /// Once the prior total is already past the allowance, the full amount
    /// is taxed.
    pub fn individual_withdrawal_fee(&self, amount: Amount, prior_weekly_total: Amount) -> Amount {
        let fee = if prior_weekly_total <= self.individual_weekly_free_amount {
            let taxable = (prior_weekly_total + amount - self.individual_weekly_free_amount)
                .max(Amount::ZERO);
            percentage_of(taxable, self.individual_withdrawal_percent)
        } else {
            percentage_of(amount, self.individual_withdrawal_percent)
        };
        round_up_to_cent(fee)
    }

    /// Organization withdrawal fee: a percentage of the amount, floored.
    pub fn organization_withdrawal_fee(&self, amount: Amount) -> Amount {
        let fee = percentage_of(amount, self.organization_withdrawal_percent);
        round_up_to_cent(fee.max(self.organization_min_fee))
    }
}

pub fn percentage_of(amount: Amount, percent: Amount) -> Amount {
    amount * percent / dec!(100)
}

/// Round up to the nearest cent: multiply by 100, round toward positive
/// infinity, divide by 100. This is a ceiling, never nearest-rounding, so
/// the bank never rounds a fee down.
pub fn round_up_to_cent(amount: Amount) -> Amount {
    (amount * dec!(100)).ceil() / dec!(100)
}
