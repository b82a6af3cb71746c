pub mod auth;
pub mod calc;
pub mod maintenance;

use crate::calc::{
    brokerage::BrokerageInputs, margin::MarginInputs, sip::SipInputs, swp::SwpInputs,
};
use secrecy::SecretString;

/// Everything the CLI can be asked to do.
#[derive(Debug)]
pub enum Action {
    Signup {
        name: String,
        email: String,
        password: SecretString,
    },
    Login {
        email: String,
        password: SecretString,
    },
    SendCode {
        email: Option<String>,
    },
    VerifyEmail {
        email: Option<String>,
        code: String,
    },
    SendResetCode {
        email: String,
    },
    ResetPassword {
        email: String,
        code: String,
        new_password: SecretString,
    },
    CalcSip(SipInputs),
    CalcSwp(SwpInputs),
    CalcMargin(MarginInputs),
    CalcBrokerage(BrokerageInputs),
    FixUserIndexes {
        dsn: String,
    },
}
