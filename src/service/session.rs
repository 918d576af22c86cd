use crate::domain::User;
use crate::service::Account;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

/// Failures of the text front-end. Conversion errors never reach the account.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid value. Use numbers (e.g. 100.50)")]
    InvalidNumber,
    #[error("Enter valid numbers for amount and months.")]
    InvalidInvestment,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    Invest,
    Exit,
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Deposit),
            "2" => Ok(Self::Withdraw),
            "3" => Ok(Self::Statement),
            "4" => Ok(Self::Invest),
            "5" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

pub fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(raw.trim()).map_err(|_| InputError::InvalidNumber)
}

pub fn parse_months(raw: &str) -> Result<i32, InputError> {
    raw.trim().parse().map_err(|_| InputError::InvalidNumber)
}

/// Interactive menu loop over any line source and sink.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print the banner and collect whatever part of the owner identity wasn't supplied.
    pub fn welcome(
        &mut self,
        name: Option<String>,
        tax_id: Option<String>,
    ) -> Result<User, InputError> {
        writeln!(self.output, "=== Welcome to the Bank ===")?;

        let name = match name {
            Some(name) => name,
            None => self.prompt("Enter your name: ")?.unwrap_or_default(),
        };
        let tax_id = match tax_id {
            Some(tax_id) => tax_id,
            None => self
                .prompt("Enter your tax ID (numbers only): ")?
                .unwrap_or_default(),
        };

        Ok(User::new(name, tax_id))
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Only I/O failures are returned; every other problem is printed and the menu repeats.
    pub fn run(&mut self, account: &mut Account) -> Result<(), InputError> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("\nChoose an option: ")? else {
                break;
            };

            let keep_going = match choice.parse::<MenuOption>() {
                Ok(MenuOption::Deposit) => self.deposit(account)?,
                Ok(MenuOption::Withdraw) => self.withdraw(account)?,
                Ok(MenuOption::Statement) => {
                    writeln!(self.output, "\n{}", account.statement())?;
                    true
                }
                Ok(MenuOption::Invest) => self.invest(account)?,
                Ok(MenuOption::Exit) => false,
                Err(()) => {
                    writeln!(self.output, "\nInvalid option. Try again.")?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        writeln!(
            self.output,
            "\nThank you for using our services. Goodbye!"
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nMain Menu:")?;
        writeln!(self.output, "1. Deposit")?;
        writeln!(self.output, "2. Withdraw")?;
        writeln!(self.output, "3. Statement")?;
        writeln!(self.output, "4. Invest")?;
        writeln!(self.output, "5. Exit")
    }

    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn deposit(&mut self, account: &mut Account) -> Result<bool, InputError> {
        let label = format!("Deposit amount: {} ", account.config().currency);
        let Some(raw) = self.prompt(&label)? else {
            return Ok(false);
        };

        match parse_amount(&raw) {
            Ok(amount) => self.report(account.deposit(amount))?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(true)
    }

    fn withdraw(&mut self, account: &mut Account) -> Result<bool, InputError> {
        let label = format!("Withdrawal amount: {} ", account.config().currency);
        let Some(raw) = self.prompt(&label)? else {
            return Ok(false);
        };

        match parse_amount(&raw) {
            Ok(amount) => self.report(account.withdraw(amount))?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(true)
    }

    fn invest(&mut self, account: &mut Account) -> Result<bool, InputError> {
        let label = format!("Amount to invest: {} ", account.config().currency);
        let Some(raw_amount) = self.prompt(&label)? else {
            return Ok(false);
        };
        let Ok(amount) = parse_amount(&raw_amount) else {
            writeln!(self.output, "Error: {}", InputError::InvalidInvestment)?;
            return Ok(true);
        };

        let Some(raw_months) = self.prompt("Number of months: ")? else {
            return Ok(false);
        };
        match parse_months(&raw_months) {
            Ok(months) => self.report(account.invest(amount, months))?,
            Err(_) => writeln!(self.output, "Error: {}", InputError::InvalidInvestment)?,
        }
        Ok(true)
    }

    fn report<T: std::fmt::Display, E: std::fmt::Display>(
        &mut self,
        outcome: Result<T, E>,
    ) -> io::Result<()> {
        match outcome {
            Ok(receipt) => writeln!(self.output, "\n{receipt}"),
            Err(e) => writeln!(self.output, "\nError: {e}"),
        }
    }
}
