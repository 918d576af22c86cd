use banking::{
    adapter::SystemClock,
    domain::{BankConfig, DEFAULT_CURRENCY, DEFAULT_MAX_DAILY_WITHDRAWALS, User},
    service::{Orchestrator, Session, boot},
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "banking", version, about = "A single-account banking simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Account holder name (prompted for when omitted)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Account holder tax ID (prompted for when omitted)
    #[arg(long, global = true)]
    tax_id: Option<String>,

    #[command(flatten)]
    limits: LimitArgs,
}

#[derive(Args, Debug)]
struct LimitArgs {
    /// Successful withdrawals allowed per day
    #[arg(long, env = "BANK_MAX_DAILY_WITHDRAWALS", default_value_t = DEFAULT_MAX_DAILY_WITHDRAWALS, global = true)]
    max_daily_withdrawals: u32,

    /// Total amount that may be withdrawn per day
    #[arg(long, env = "BANK_DAILY_WITHDRAWAL_LIMIT", default_value = "500.00", global = true)]
    daily_withdrawal_limit: Decimal,

    /// Monthly compound rate for investments (0.01 = 1%)
    #[arg(long, env = "BANK_MONTHLY_RATE", default_value = "0.01", global = true)]
    monthly_rate: Decimal,

    /// Currency symbol shown in front of amounts
    #[arg(long, env = "BANK_CURRENCY", default_value = DEFAULT_CURRENCY, global = true)]
    currency: String,
}

impl From<LimitArgs> for BankConfig {
    fn from(args: LimitArgs) -> Self {
        Self {
            max_daily_withdrawals: args.max_daily_withdrawals,
            daily_withdrawal_limit: args.daily_withdrawal_limit,
            monthly_rate: args.monthly_rate,
            currency: args.currency,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay operations from a CSV script (date,type,amount,months,rate)
    Replay {
        /// Script file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Business date before the first dated row (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        start_date: Option<NaiveDate>,

        /// Print the journal as CSV instead of the statement
        #[arg(long)]
        csv: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let config = BankConfig::from(args.limits);

    match args.command {
        Some(Commands::Replay {
            file,
            start_date,
            csv,
        }) => {
            let owner = User::new(
                args.name.unwrap_or_default(),
                args.tax_id.unwrap_or_default(),
            );
            let start_date = start_date.unwrap_or_else(|| Local::now().date_naive());

            let mut orchestrator = Orchestrator::new(owner, config, start_date)?;
            let summary = orchestrator.process(BufReader::new(File::open(&file)?))?;
            if summary.rejected > 0 {
                eprintln!(
                    "{} of {} operations rejected",
                    summary.rejected,
                    summary.accepted + summary.rejected
                );
            }

            let mut account = orchestrator.into_account();
            if csv {
                Orchestrator::output_csv(&account, io::stdout())?;
            } else {
                println!("{}", account.statement());
            }
        }
        None => {
            let mut session = Session::new(io::stdin().lock(), io::stdout());
            let owner = session.welcome(args.name, args.tax_id)?;
            let mut account = boot(owner, config, Box::new(SystemClock))?;
            session.run(&mut account)?;
        }
    }

    Ok(())
}
