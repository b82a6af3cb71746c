//! SWP (systematic withdrawal plan): month-by-month amortization. Each month
//! the balance earns the monthly rate, then the withdrawal is taken; the
//! balance is clamped at zero and never goes negative.

#[derive(Clone, Copy, Debug)]
pub struct SwpInputs {
    pub total_investment: f64,
    pub monthly_withdrawal: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwpResult {
    pub total_withdrawn: f64,
    pub final_value: f64,
    /// Months the full withdrawal could actually be taken.
    pub months_sustained: u32,
}

#[must_use]
pub fn calculate(inputs: &SwpInputs) -> SwpResult {
    let monthly_rate = inputs.annual_rate_pct / 12.0 / 100.0;
    let months = inputs.years * 12;

    let mut balance = inputs.total_investment;
    let mut total_withdrawn = 0.0;
    let mut months_sustained = 0;

    for _ in 0..months {
        balance *= 1.0 + monthly_rate;

        if balance >= inputs.monthly_withdrawal {
            balance -= inputs.monthly_withdrawal;
            total_withdrawn += inputs.monthly_withdrawal;
            months_sustained += 1;
        } else {
            // Corpus exhausted: take whatever is left and stop.
            total_withdrawn += balance;
            balance = 0.0;
            break;
        }
    }

    SwpResult {
        total_withdrawn,
        final_value: balance,
        months_sustained,
    }
}
