//! Intraday equity brokerage calculator: round-trip charges on a buy and a
//! sell leg, net P&L and the breakeven price move.
//!
//! Charge schedule (flat-fee discount broker):
//! - brokerage: 0.03% per leg, capped at Rs 20 per order
//! - STT: 0.025% on the sell leg
//! - exchange transaction charge: 0.00297% on both-leg turnover
//! - SEBI charge: Rs 10 per crore of turnover
//! - GST: 18% on brokerage + exchange + SEBI charges
//! - stamp duty: 0.003% on the buy leg

const BROKERAGE_RATE: f64 = 0.0003;
const BROKERAGE_CAP: f64 = 20.0;
const STT_RATE: f64 = 0.000_25;
const EXCHANGE_RATE: f64 = 0.000_029_7;
const SEBI_RATE: f64 = 10.0 / 10_000_000.0;
const GST_RATE: f64 = 0.18;
const STAMP_DUTY_RATE: f64 = 0.000_03;

#[derive(Clone, Copy, Debug)]
pub struct BrokerageInputs {
    pub buy_price: f64,
    pub sell_price: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrokerageResult {
    pub turnover: f64,
    pub brokerage: f64,
    pub stt: f64,
    pub exchange_charge: f64,
    pub sebi_charge: f64,
    pub gst: f64,
    pub stamp_duty: f64,
    pub total_charges: f64,
    pub gross_pnl: f64,
    pub net_pnl: f64,
    /// Per-share price move needed to cover all charges.
    pub breakeven_per_share: f64,
}

fn leg_brokerage(leg_value: f64) -> f64 {
    (leg_value * BROKERAGE_RATE).min(BROKERAGE_CAP)
}

#[must_use]
pub fn calculate(inputs: &BrokerageInputs) -> BrokerageResult {
    let quantity = f64::from(inputs.quantity);
    let buy_value = inputs.buy_price * quantity;
    let sell_value = inputs.sell_price * quantity;
    let turnover = buy_value + sell_value;

    let brokerage = leg_brokerage(buy_value) + leg_brokerage(sell_value);
    let stt = sell_value * STT_RATE;
    let exchange_charge = turnover * EXCHANGE_RATE;
    let sebi_charge = turnover * SEBI_RATE;
    let gst = (brokerage + exchange_charge + sebi_charge) * GST_RATE;
    let stamp_duty = buy_value * STAMP_DUTY_RATE;

    let total_charges = brokerage + stt + exchange_charge + sebi_charge + gst + stamp_duty;
    let gross_pnl = sell_value - buy_value;

    BrokerageResult {
        turnover,
        brokerage,
        stt,
        exchange_charge,
        sebi_charge,
        gst,
        stamp_duty,
        total_charges,
        gross_pnl,
        net_pnl: gross_pnl - total_charges,
        breakeven_per_share: if quantity > 0.0 {
            total_charges / quantity
        } else {
            0.0
        },
    }
}
