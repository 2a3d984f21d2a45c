/// An operation the account menu can perform against the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Show the current balance without changing it
    ViewBalance,
    /// Add a prompted amount to the balance
    Credit,
    /// Subtract a prompted amount, if the balance covers it
    Debit,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ViewBalance => "view-balance",
            Operation::Credit => "credit",
            Operation::Debit => "debit",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A numbered menu entry as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Operation),
    Exit,
    Invalid,
}

impl MenuChoice {
    pub fn from_number(choice: i64) -> Self {
        match choice {
            1 => MenuChoice::Run(Operation::ViewBalance),
            2 => MenuChoice::Run(Operation::Credit),
            3 => MenuChoice::Run(Operation::Debit),
            4 => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }

    /// Parse a raw input line. Anything that isn't an integer is `Invalid`.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map_or(MenuChoice::Invalid, Self::from_number)
    }
}

/// Whether the driving loop should keep going after a menu step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Stopped,
}

impl Flow {
    pub fn is_running(&self) -> bool {
        matches!(self, Flow::Running)
    }
}
