//! Print calculator results. All math lives in [`crate::calc`]; this is
//! formatting only.

use crate::calc::{brokerage, margin, round2, round_rupees, sip, swp};
use crate::cli::actions::Action;
use anyhow::{anyhow, Result};

/// Handle the calculator actions
pub fn handle(action: Action) -> Result<()> {
    match action {
        Action::CalcSip(inputs) => {
            let result = sip::calculate(&inputs);
            println!("Invested amount:   {:>14.2}", round_rupees(result.invested_amount));
            println!("Estimated returns: {:>14.2}", round_rupees(result.estimated_returns));
            println!("Future value:      {:>14.2}", round_rupees(result.future_value));
        }
        Action::CalcSwp(inputs) => {
            let result = swp::calculate(&inputs);
            println!("Total withdrawn:   {:>14.2}", round_rupees(result.total_withdrawn));
            println!("Final value:       {:>14.2}", round_rupees(result.final_value));
            println!("Months sustained:  {:>14}", result.months_sustained);
        }
        Action::CalcMargin(inputs) => {
            let result = margin::calculate(&inputs);
            println!("Total value:       {:>14.2}", round_rupees(result.total_value));
            println!("Margin required:   {:>14.2}", round_rupees(result.margin_required));
            println!("Leverage:          {:>13.2}x", round2(result.leverage));
        }
        Action::CalcBrokerage(inputs) => {
            let result = brokerage::calculate(&inputs);
            println!("Turnover:          {:>14.2}", result.turnover);
            println!("Brokerage:         {:>14.2}", round2(result.brokerage));
            println!("STT:               {:>14.2}", round2(result.stt));
            println!("Exchange charge:   {:>14.2}", round2(result.exchange_charge));
            println!("SEBI charge:       {:>14.2}", round2(result.sebi_charge));
            println!("GST:               {:>14.2}", round2(result.gst));
            println!("Stamp duty:        {:>14.2}", round2(result.stamp_duty));
            println!("Total charges:     {:>14.2}", round2(result.total_charges));
            println!("Net P&L:           {:>14.2}", round2(result.net_pnl));
            println!("Breakeven/share:   {:>14.2}", round2(result.breakeven_per_share));
        }
        other => return Err(anyhow!("not a calculator action: {other:?}")),
    }

    Ok(())
}
