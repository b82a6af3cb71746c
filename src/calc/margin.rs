//! Margin calculator: exposure, margin required and effective leverage for a
//! given margin percentage.

#[derive(Clone, Copy, Debug)]
pub struct MarginInputs {
    pub price: f64,
    pub quantity: u32,
    pub margin_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginResult {
    pub total_value: f64,
    pub margin_required: f64,
    pub leverage: f64,
}

#[must_use]
pub fn calculate(inputs: &MarginInputs) -> MarginResult {
    let total_value = inputs.price * f64::from(inputs.quantity);
    let margin_required = total_value * inputs.margin_pct / 100.0;
    let leverage = if inputs.margin_pct > 0.0 {
        100.0 / inputs.margin_pct
    } else {
        0.0
    };

    MarginResult {
        total_value,
        margin_required,
        leverage,
    }
}
