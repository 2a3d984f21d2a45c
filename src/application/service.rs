use tracing::{debug, info, warn};

use crate::domain::{format_cents, parse_cents, Cents, Operation, ParseCentsError};
use crate::storage::BalanceStore;

use super::{AppError, LineReader, LineWriter};

pub const CREDIT_PROMPT: &str = "Enter credit amount: ";
pub const DEBIT_PROMPT: &str = "Enter debit amount: ";
pub const INSUFFICIENT_FUNDS_MESSAGE: &str = "Insufficient funds for this debit.";
pub const INVALID_AMOUNT_MESSAGE: &str = "Invalid amount, please enter a number.";
pub const AMOUNT_OUT_OF_RANGE_MESSAGE: &str = "Amount out of range.";

/// Application service owning the account balance.
/// Operations prompt through a `LineReader` and report through a `LineWriter`.
pub struct AccountService {
    store: BalanceStore,
}

/// What an operation did to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Balance was shown, nothing changed
    Viewed { balance: Cents },
    /// Amount was added
    Credited { amount: Cents, balance: Cents },
    /// Amount was subtracted
    Debited { amount: Cents, balance: Cents },
    /// Debit exceeded the balance; nothing changed
    InsufficientFunds { balance: Cents, required: Cents },
    /// Amount input wasn't a number; nothing changed
    InvalidAmount,
    /// Amount or resulting balance doesn't fit; nothing changed
    OutOfRange,
}

impl AccountService {
    /// Create a service with a fresh store at the default balance.
    pub fn new() -> Self {
        Self::with_store(BalanceStore::new())
    }

    pub fn with_store(store: BalanceStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BalanceStore {
        &self.store
    }

    pub fn balance(&self) -> Cents {
        self.store.read()
    }

    /// Start over from the default balance.
    pub fn reset(&mut self) {
        debug!("Resetting balance");
        self.store.reset();
    }

    /// Run one operation to completion.
    pub async fn execute<R, W>(
        &mut self,
        operation: Operation,
        input: &mut R,
        output: &mut W,
    ) -> Result<OperationOutcome, AppError>
    where
        R: LineReader,
        W: LineWriter,
    {
        debug!(%operation, "Executing operation");

        let (prompt, apply): (&str, fn(&mut Self, Cents) -> OperationOutcome) = match operation {
            Operation::ViewBalance => {
                let balance = self.store.read();
                output.emit(&format!("Current balance: {}", format_cents(balance)));
                return Ok(OperationOutcome::Viewed { balance });
            }
            Operation::Credit => (CREDIT_PROMPT, Self::credit),
            Operation::Debit => (DEBIT_PROMPT, Self::debit),
        };

        let answer = input.ask(prompt).await?;
        let amount = match parse_cents(&answer) {
            Ok(amount) => amount,
            Err(ParseCentsError::InvalidFormat) => {
                warn!(%operation, input = %answer.trim(), "Rejected non-numeric amount");
                output.emit(INVALID_AMOUNT_MESSAGE);
                return Ok(OperationOutcome::InvalidAmount);
            }
            Err(ParseCentsError::OutOfRange) => {
                warn!(%operation, input = %answer.trim(), "Rejected out-of-range amount");
                output.emit(AMOUNT_OUT_OF_RANGE_MESSAGE);
                return Ok(OperationOutcome::OutOfRange);
            }
        };

        let outcome = apply(self, amount);
        match outcome {
            OperationOutcome::Credited { balance, .. } => {
                output.emit(&format!(
                    "Amount credited. New balance: {}",
                    format_cents(balance)
                ));
            }
            OperationOutcome::Debited { balance, .. } => {
                output.emit(&format!(
                    "Amount debited. New balance: {}",
                    format_cents(balance)
                ));
            }
            OperationOutcome::InsufficientFunds { .. } => output.emit(INSUFFICIENT_FUNDS_MESSAGE),
            OperationOutcome::OutOfRange => output.emit(AMOUNT_OUT_OF_RANGE_MESSAGE),
            OperationOutcome::Viewed { .. } | OperationOutcome::InvalidAmount => {}
        }

        Ok(outcome)
    }

    // Negative amounts are accepted: a negative credit lowers the balance.
    fn credit(&mut self, amount: Cents) -> OperationOutcome {
        let current = self.store.read();
        let updated = current.checked_add(amount);
        if !self.store.try_write(updated) {
            warn!(current, amount, "Credit would overflow the balance");
            return OperationOutcome::OutOfRange;
        }

        let balance = self.store.read();
        info!(amount, old = current, new = balance, "Credited account");
        OperationOutcome::Credited { amount, balance }
    }

    // Negative amounts always pass the sufficiency check and raise the balance.
    fn debit(&mut self, amount: Cents) -> OperationOutcome {
        let current = self.store.read();
        if current < amount {
            info!(balance = current, required = amount, "Insufficient funds");
            return OperationOutcome::InsufficientFunds {
                balance: current,
                required: amount,
            };
        }

        let updated = current.checked_sub(amount);
        if !self.store.try_write(updated) {
            warn!(current, amount, "Debit would overflow the balance");
            return OperationOutcome::OutOfRange;
        }

        let balance = self.store.read();
        info!(amount, old = current, new = balance, "Debited account");
        OperationOutcome::Debited { amount, balance }
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
