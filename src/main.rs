use rebalance::{
    allocate,
    config::{TargetAllocation, DEFAULT_FUND_A_NAME, DEFAULT_FUND_A_PERCENTAGE, DEFAULT_FUND_B_NAME},
    input::RawArgs,
    money::parse_decimal,
    report::{render_text, write_csv},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::stdout;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "rebalance", version)]
#[command(
    about = "Calculates deposit amounts for two fund positions to keep the account \
             balanced at 95% and 5% respectively (see --fund-a-percentage)."
)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// The total balance of the account
    account_balance: String,

    /// The amount that has recently been deposited
    deposit_amount: String,

    /// The amount in the fund A position
    fund_a_amount: String,

    /// The amount in the fund B position
    fund_b_amount: String,

    /// Target percentage for fund A; fund B gets the remainder
    #[arg(long, default_value_t = DEFAULT_FUND_A_PERCENTAGE.to_string())]
    fund_a_percentage: String,

    /// Label for fund A in the report
    #[arg(long, default_value = DEFAULT_FUND_A_NAME)]
    fund_a_name: String,

    /// Label for fund B in the report
    #[arg(long, default_value = DEFAULT_FUND_B_NAME)]
    fund_b_name: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let fund_a_percentage = parse_decimal("fund_a_percentage", &cli.fund_a_percentage)?;
    let target =
        TargetAllocation::from_fund_a_percentage(cli.fund_a_name, cli.fund_b_name, fund_a_percentage)?;

    let raw = RawArgs {
        account_balance: cli.account_balance,
        deposit_amount: cli.deposit_amount,
        fund_a_amount: cli.fund_a_amount,
        fund_b_amount: cli.fund_b_amount,
    };
    let (input, result) = allocate(raw, &target).context("could not compute deposit amounts")?;
    info!(insufficient = result.insufficient_to_rebalance, "allocation computed");

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&input, &result, &target)),
        OutputFormat::Csv => {
            write_csv(stdout().lock(), &input, &result, &target).context("failed to write CSV")?
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(format!("rebalance={}", level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
