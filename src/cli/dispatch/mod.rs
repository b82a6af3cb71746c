use crate::calc::{
    brokerage::BrokerageInputs, margin::MarginInputs, sip::SipInputs, swp::SwpInputs,
};
use crate::cli::actions::Action;
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;

fn required(matches: &clap::ArgMatches, arg: &str) -> Result<String> {
    matches
        .get_one::<String>(arg)
        .map(ToString::to_string)
        .ok_or_else(|| anyhow!("missing required argument: --{arg}"))
}

fn required_f64(matches: &clap::ArgMatches, arg: &str) -> Result<f64> {
    matches
        .get_one::<f64>(arg)
        .copied()
        .ok_or_else(|| anyhow!("missing required argument: --{arg}"))
}

fn required_u32(matches: &clap::ArgMatches, arg: &str) -> Result<u32> {
    matches
        .get_one::<u32>(arg)
        .copied()
        .ok_or_else(|| anyhow!("missing required argument: --{arg}"))
}

fn calc_action(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub) = matches
        .subcommand()
        .context("calculator subcommand not found")?;

    match name {
        "sip" => Ok(Action::CalcSip(SipInputs {
            monthly_investment: required_f64(sub, "monthly")?,
            annual_rate_pct: required_f64(sub, "rate")?,
            years: required_u32(sub, "years")?,
        })),
        "swp" => Ok(Action::CalcSwp(SwpInputs {
            total_investment: required_f64(sub, "investment")?,
            monthly_withdrawal: required_f64(sub, "withdrawal")?,
            annual_rate_pct: required_f64(sub, "rate")?,
            years: required_u32(sub, "years")?,
        })),
        "margin" => Ok(Action::CalcMargin(MarginInputs {
            price: required_f64(sub, "price")?,
            quantity: required_u32(sub, "quantity")?,
            margin_pct: required_f64(sub, "margin-pct")?,
        })),
        "brokerage" => Ok(Action::CalcBrokerage(BrokerageInputs {
            buy_price: required_f64(sub, "buy")?,
            sell_price: required_f64(sub, "sell")?,
            quantity: required_u32(sub, "quantity")?,
        })),
        _ => Err(anyhow!("unknown calculator: {name}")),
    }
}

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub) = matches.subcommand().context("subcommand not found")?;

    match name {
        "signup" => Ok(Action::Signup {
            name: required(sub, "name")?,
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        "login" => Ok(Action::Login {
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        "send-code" => Ok(Action::SendCode {
            email: sub.get_one::<String>("email").map(ToString::to_string),
        }),
        "verify-email" => Ok(Action::VerifyEmail {
            email: sub.get_one::<String>("email").map(ToString::to_string),
            code: required(sub, "code")?,
        }),
        "send-reset-code" => Ok(Action::SendResetCode {
            email: required(sub, "email")?,
        }),
        "reset-password" => Ok(Action::ResetPassword {
            email: required(sub, "email")?,
            code: required(sub, "code")?,
            new_password: SecretString::from(required(sub, "new-password")?),
        }),
        "calc" => calc_action(sub),
        "fix-user-indexes" => Ok(Action::FixUserIndexes {
            dsn: required(sub, "dsn")?,
        }),
        _ => Err(anyhow!("unknown subcommand: {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn dispatches_login() {
        let matches = commands::new().get_matches_from(vec![
            "stocksathi",
            "login",
            "--email",
            "a@example.com",
            "--password",
            "secret1",
        ]);

        let action = handler(&matches).unwrap();
        assert!(matches!(action, Action::Login { email, .. } if email == "a@example.com"));
    }

    #[test]
    fn dispatches_verify_email_without_explicit_address() {
        let matches = commands::new().get_matches_from(vec![
            "stocksathi",
            "verify-email",
            "--code",
            "123456",
        ]);

        let action = handler(&matches).unwrap();
        assert!(matches!(
            action,
            Action::VerifyEmail { email: None, code } if code == "123456"
        ));
    }

    #[test]
    fn dispatches_calc_margin() {
        let matches = commands::new().get_matches_from(vec![
            "stocksathi",
            "calc",
            "margin",
            "--price",
            "2500",
            "--quantity",
            "100",
            "--margin-pct",
            "20",
        ]);

        let action = handler(&matches).unwrap();
        match action {
            Action::CalcMargin(inputs) => {
                assert_eq!(inputs.price, 2500.0);
                assert_eq!(inputs.quantity, 100);
                assert_eq!(inputs.margin_pct, 20.0);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
