//! Calculator engines for the marketing pages: pure numeric functions, no
//! I/O. Amounts are rupees as `f64`; rates are annual percentages.

pub mod brokerage;
pub mod margin;
pub mod sip;
pub mod swp;

/// Round to whole rupees for display.
#[must_use]
pub fn round_rupees(amount: f64) -> f64 {
    amount.round()
}

/// Round to paise (two decimals) where the result is a rate or ratio.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
