use crate::domain::Cents;

/// Balance every new store (and every reset) starts from: 1000.00.
pub const DEFAULT_BALANCE: Cents = 100_000;

/// In-memory store for the single account balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceStore {
    balance: Cents,
}

impl BalanceStore {
    /// Create a store holding `DEFAULT_BALANCE`.
    pub fn new() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
        }
    }

    /// Current balance.
    pub fn read(&self) -> Cents {
        self.balance
    }

    /// Replace the stored balance.
    pub fn write(&mut self, balance: Cents) {
        self.balance = balance;
    }

    /// Replace the stored balance only when a value was actually computed.
    /// `None` (e.g. an overflowed sum) leaves the store untouched.
    /// Returns whether the write happened.
    pub fn try_write(&mut self, balance: Option<Cents>) -> bool {
        match balance {
            Some(balance) => {
                self.write(balance);
                true
            }
            None => false,
        }
    }

    /// Restore the balance to `DEFAULT_BALANCE`.
    pub fn reset(&mut self) {
        self.balance = DEFAULT_BALANCE;
    }
}

impl Default for BalanceStore {
    fn default() -> Self {
        Self::new()
    }
}
