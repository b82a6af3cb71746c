pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_DASHBOARD_URL: &str = "dashboard-url";
pub const ARG_SESSION_FILE: &str = "session-file";

fn calc_command() -> Command {
    Command::new("calc")
        .about("Financial calculators")
        .subcommand_required(true)
        .subcommand(
            Command::new("sip")
                .about("SIP future value")
                .arg(
                    Arg::new("monthly")
                        .long("monthly")
                        .help("Monthly investment in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("rate")
                        .long("rate")
                        .help("Expected annual return, percent")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("years")
                        .long("years")
                        .help("Investment period in years")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("swp")
                .about("SWP month-by-month projection")
                .arg(
                    Arg::new("investment")
                        .long("investment")
                        .help("Total investment in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("withdrawal")
                        .long("withdrawal")
                        .help("Monthly withdrawal in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("rate")
                        .long("rate")
                        .help("Expected annual return, percent")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("years")
                        .long("years")
                        .help("Withdrawal period in years")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("margin")
                .about("Margin requirement and leverage")
                .arg(
                    Arg::new("price")
                        .long("price")
                        .help("Share price in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .help("Number of shares")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("margin-pct")
                        .long("margin-pct")
                        .help("Margin requirement, percent")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("brokerage")
                .about("Intraday round-trip charges and net P&L")
                .arg(
                    Arg::new("buy")
                        .long("buy")
                        .help("Buy price in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("sell")
                        .long("sell")
                        .help("Sell price in rupees")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("quantity")
                        .long("quantity")
                        .help("Number of shares")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("stocksathi")
        .about("StockSathi auth flows and trading calculators")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the user API")
                .default_value("http://localhost:3000")
                .env("STOCKSATHI_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_DASHBOARD_URL)
                .long("dashboard-url")
                .help("Base URL of the dashboard application")
                .default_value("http://localhost:5174")
                .env("STOCKSATHI_DASHBOARD_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Path of the session record")
                .default_value(".stocksathi/session.json")
                .env("STOCKSATHI_SESSION_FILE")
                .global(true),
        )
        .subcommand(
            Command::new("signup")
                .about("Create an account and print the dashboard handoff URL")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Display name")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password (min 6 characters)")
                        .env("STOCKSATHI_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and print the dashboard handoff URL")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password")
                        .env("STOCKSATHI_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("send-code")
                .about("Send an email verification code")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address (defaults to the signup hint)"),
                ),
        )
        .subcommand(
            Command::new("verify-email")
                .about("Confirm the 6-digit verification code")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address (defaults to the signup hint)"),
                )
                .arg(
                    Arg::new("code")
                        .long("code")
                        .help("6-digit code from the email")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("send-reset-code")
                .about("Send a password reset code")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("reset-password")
                .about("Set a new password using the reset code")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("code")
                        .long("code")
                        .help("6-digit reset code")
                        .required(true),
                )
                .arg(
                    Arg::new("new-password")
                        .long("new-password")
                        .help("New password (min 6 characters)")
                        .env("STOCKSATHI_NEW_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(calc_command())
        .subcommand(
            Command::new("fix-user-indexes")
                .about("One-shot maintenance: drop stale username indexes")
                .arg(
                    Arg::new("dsn")
                        .long("dsn")
                        .help("Database connection string")
                        .env("STOCKSATHI_DSN")
                        .required(true),
                ),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "stocksathi");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "StockSathi auth flows and trading calculators"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_login_args() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "stocksathi",
            "login",
            "--email",
            "a@example.com",
            "--password",
            "secret1",
        ]);

        assert_eq!(
            matches
                .get_one::<String>(ARG_API_URL)
                .map(|s| s.to_string()),
            Some("http://localhost:3000".to_string())
        );

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "login");
        assert_eq!(
            sub.get_one::<String>("email").map(|s| s.to_string()),
            Some("a@example.com".to_string())
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("STOCKSATHI_API_URL", Some("http://api.stocksathi.test")),
                (
                    "STOCKSATHI_DASHBOARD_URL",
                    Some("http://dash.stocksathi.test"),
                ),
                ("STOCKSATHI_SESSION_FILE", Some("/tmp/session.json")),
                ("STOCKSATHI_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "stocksathi",
                    "login",
                    "--email",
                    "a@example.com",
                    "--password",
                    "secret1",
                ]);

                assert_eq!(
                    matches
                        .get_one::<String>(ARG_API_URL)
                        .map(|s| s.to_string()),
                    Some("http://api.stocksathi.test".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>(ARG_DASHBOARD_URL)
                        .map(|s| s.to_string()),
                    Some("http://dash.stocksathi.test".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>(ARG_SESSION_FILE)
                        .map(|s| s.to_string()),
                    Some("/tmp/session.json".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("STOCKSATHI_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "stocksathi",
                    "send-reset-code",
                    "--email",
                    "a@example.com",
                ]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_calc_sip_args() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "stocksathi",
            "calc",
            "sip",
            "--monthly",
            "5000",
            "--rate",
            "12",
            "--years",
            "10",
        ]);

        let (_, calc) = matches.subcommand().unwrap();
        let (name, sip) = calc.subcommand().unwrap();
        assert_eq!(name, "sip");
        assert_eq!(sip.get_one::<f64>("monthly").copied(), Some(5000.0));
        assert_eq!(sip.get_one::<u32>("years").copied(), Some(10));
    }
}
