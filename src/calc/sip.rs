//! SIP (systematic investment plan) future value.
//!
//! Standard annuity-due formula with monthly compounding:
//! `FV = P * ((1 + i)^n - 1) / i * (1 + i)` where `i` is the monthly rate.

#[derive(Clone, Copy, Debug)]
pub struct SipInputs {
    pub monthly_investment: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SipResult {
    pub invested_amount: f64,
    pub estimated_returns: f64,
    pub future_value: f64,
}

#[must_use]
pub fn calculate(inputs: &SipInputs) -> SipResult {
    let months = f64::from(inputs.years) * 12.0;
    let monthly_rate = inputs.annual_rate_pct / 12.0 / 100.0;
    let invested_amount = inputs.monthly_investment * months;

    let future_value = if monthly_rate == 0.0 {
        invested_amount
    } else {
        inputs.monthly_investment * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate
            * (1.0 + monthly_rate)
    };

    SipResult {
        invested_amount,
        estimated_returns: future_value - invested_amount,
        future_value,
    }
}
