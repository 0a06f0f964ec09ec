//! Interactive menu shell
//!
//! The shell is a thin collaborator over the ledger API: it prompts, parses
//! numeric and text input, renders success and error output, and maps
//! user-entered account numbers to registry lookups. It holds no ledger
//! state of its own.
//!
//! The shell is generic over its input and output streams so tests can
//! script complete sessions against in-memory buffers.

use crate::core::AccountRegistry;
use crate::types::LedgerError;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Menu-driven shell over an [`AccountRegistry`]
///
/// Runs the main menu (create account, access account, admin dashboard,
/// exit) and the per-account menu (deposit, withdraw, balance, history,
/// interest, loan, repay, transfer, exit). All ledger errors are rendered as
/// messages and the session continues; only I/O errors on the streams
/// terminate `run`.
pub struct Shell<'a, R, W> {
    registry: &'a AccountRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given registry and streams
    pub fn new(registry: &'a AccountRegistry, input: R, output: W) -> Self {
        Shell {
            registry,
            input,
            output,
        }
    }

    /// Run the main menu loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Welcome to the Bank System")?;
            writeln!(self.output, "1) Create Account")?;
            writeln!(self.output, "2) Access Account")?;
            writeln!(self.output, "3) Admin Dashboard")?;
            writeln!(self.output, "4) Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.create_account()?,
                "2" => self.access_account()?,
                "3" => self.admin_dashboard()?,
                "4" => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
        Ok(())
    }

    /// Main menu option 1: open a new account
    fn create_account(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter account holder's name: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter initial deposit amount: ")? else {
            return Ok(());
        };

        match self.registry.create_account(&name, amount) {
            Ok(id) => writeln!(
                self.output,
                "Account created. Your account number is {}",
                id
            ),
            Err(error) => self.report(&error),
        }
    }

    /// Main menu option 2: per-account menu loop
    fn access_account(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter your account number: ")? else {
            return Ok(());
        };
        let snapshot = match self.registry.snapshot(&id) {
            Ok(snapshot) => snapshot,
            Err(error) => return self.report(&error),
        };
        writeln!(self.output, "Welcome, {}.", snapshot.owner_name)?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Account Menu")?;
            writeln!(self.output, "1) Deposit")?;
            writeln!(self.output, "2) Withdraw")?;
            writeln!(self.output, "3) Check Balance")?;
            writeln!(self.output, "4) Transaction History")?;
            writeln!(self.output, "5) Apply Interest")?;
            writeln!(self.output, "6) Take Loan")?;
            writeln!(self.output, "7) Repay Loan")?;
            writeln!(self.output, "8) Transfer Money")?;
            writeln!(self.output, "9) Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.deposit(&id)?,
                "2" => self.withdraw(&id)?,
                "3" => self.show_balance(&id)?,
                "4" => self.show_history(&id)?,
                "5" => self.apply_interest(&id)?,
                "6" => self.take_loan(&id)?,
                "7" => self.repay_loan(&id)?,
                "8" => self.transfer(&id)?,
                "9" => {
                    writeln!(self.output, "Leaving account menu.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Main menu option 3: list every account in creation order
    fn admin_dashboard(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Admin Dashboard - All Accounts")?;

        let accounts = self.registry.list_all();
        if accounts.is_empty() {
            return writeln!(self.output, "No accounts found.");
        }
        for account in accounts {
            writeln!(
                self.output,
                "Account: {} | Name: {} | Balance: {:.2} | Loan: {:.2}",
                account.id, account.owner_name, account.balance, account.loan_balance
            )?;
        }
        Ok(())
    }

    fn deposit(&mut self, id: &str) -> io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter deposit amount: ")? else {
            return Ok(());
        };
        let result = self.registry.with_account(id, |account| {
            account.deposit(amount)?;
            Ok(account.balance())
        });
        match result {
            Ok(balance) => writeln!(
                self.output,
                "Deposited {:.2}. New balance: {:.2}",
                amount, balance
            ),
            Err(error) => self.report(&error),
        }
    }

    fn withdraw(&mut self, id: &str) -> io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter withdrawal amount: ")? else {
            return Ok(());
        };
        let result = self.registry.with_account(id, |account| {
            account.withdraw(amount)?;
            Ok(account.balance())
        });
        match result {
            Ok(balance) => writeln!(
                self.output,
                "Withdrew {:.2}. New balance: {:.2}",
                amount, balance
            ),
            Err(error) => self.report(&error),
        }
    }

    fn show_balance(&mut self, id: &str) -> io::Result<()> {
        match self.registry.snapshot(id) {
            Ok(snapshot) => {
                writeln!(
                    self.output,
                    "Current balance for {}: {:.2}",
                    snapshot.owner_name, snapshot.balance
                )?;
                writeln!(self.output, "Loan balance: {:.2}", snapshot.loan_balance)
            }
            Err(error) => self.report(&error),
        }
    }

    fn show_history(&mut self, id: &str) -> io::Result<()> {
        match self.registry.history(id) {
            Ok(records) => {
                writeln!(self.output)?;
                writeln!(self.output, "Transaction History (Account: {})", id)?;
                for record in records {
                    writeln!(
                        self.output,
                        "{} | {} | Amount: {:.2} | Balance: {:.2}",
                        record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                        record.kind,
                        record.amount,
                        record.balance_after
                    )?;
                }
                Ok(())
            }
            Err(error) => self.report(&error),
        }
    }

    fn apply_interest(&mut self, id: &str) -> io::Result<()> {
        let result = self.registry.with_account(id, |account| {
            let interest = account.apply_interest()?;
            Ok((interest, account.balance()))
        });
        match result {
            Ok((interest, balance)) => writeln!(
                self.output,
                "Interest of {:.2} applied. New balance: {:.2}",
                interest, balance
            ),
            Err(error) => self.report(&error),
        }
    }

    fn take_loan(&mut self, id: &str) -> io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter loan amount: ")? else {
            return Ok(());
        };
        let result = self.registry.with_account(id, |account| {
            account.take_loan(amount)?;
            Ok(account.balance())
        });
        match result {
            Ok(balance) => writeln!(
                self.output,
                "Loan of {:.2} approved. New balance: {:.2}",
                amount, balance
            ),
            Err(error) => self.report(&error),
        }
    }

    fn repay_loan(&mut self, id: &str) -> io::Result<()> {
        let Some(amount) = self.prompt_amount("Enter repayment amount: ")? else {
            return Ok(());
        };
        let result = self.registry.with_account(id, |account| {
            let repaid = account.repay_loan(amount)?;
            Ok((repaid, account.loan_balance()))
        });
        match result {
            Ok((repaid, loan_balance)) => writeln!(
                self.output,
                "Loan repayment of {:.2} accepted. Remaining loan: {:.2}",
                repaid, loan_balance
            ),
            Err(error) => self.report(&error),
        }
    }

    fn transfer(&mut self, id: &str) -> io::Result<()> {
        let Some(recipient) = self.prompt("Enter recipient's account number: ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt_amount("Enter transfer amount: ")? else {
            return Ok(());
        };
        match self.registry.transfer_between(id, &recipient, amount) {
            Ok(()) => writeln!(
                self.output,
                "Transferred {:.2} to account {}.",
                amount, recipient
            ),
            Err(error) => self.report(&error),
        }
    }

    /// Render a ledger error as a user-facing message
    fn report(&mut self, error: &LedgerError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)
    }

    /// Print a prompt and read one trimmed line; `None` means end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a decimal amount, re-prompting until the input parses
    ///
    /// Unparseable input never reaches the ledger. `None` means end of
    /// input.
    fn prompt_amount(&mut self, message: &str) -> io::Result<Option<Decimal>> {
        loop {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };
            match Decimal::from_str(&raw) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.output, "Invalid amount '{}'. Try again.", raw)?,
            }
        }
    }
}
