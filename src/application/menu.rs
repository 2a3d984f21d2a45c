use tracing::{debug, info};

use crate::domain::{Flow, MenuChoice};

use super::{AccountService, AppError, LineReader, LineWriter};

pub const MENU_SEPARATOR: &str = "--------------------------------";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-4): ";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice, please select 1-4.";
pub const GOODBYE_MESSAGE: &str = "Exiting the program. Goodbye!";

const MENU_LINES: [&str; 7] = [
    MENU_SEPARATOR,
    "Account Management System",
    "1. View Balance",
    "2. Credit Account",
    "3. Debit Account",
    "4. Exit",
    MENU_SEPARATOR,
];

/// Render the main menu, one line per entry.
pub fn display_menu<W: LineWriter>(output: &mut W) {
    for line in MENU_LINES {
        output.emit(line);
    }
}

/// Route one menu choice and report whether the session keeps running.
pub async fn process_menu_choice<R, W>(
    service: &mut AccountService,
    choice: MenuChoice,
    input: &mut R,
    output: &mut W,
) -> Result<Flow, AppError>
where
    R: LineReader,
    W: LineWriter,
{
    debug!(?choice, "Processing menu choice");

    match choice {
        MenuChoice::Run(operation) => {
            service.execute(operation, input, output).await?;
            Ok(Flow::Running)
        }
        MenuChoice::Exit => Ok(Flow::Stopped),
        MenuChoice::Invalid => {
            output.emit(INVALID_CHOICE_MESSAGE);
            Ok(Flow::Running)
        }
    }
}

/// Drive the menu until the user exits.
///
/// Any `AppError` (e.g. input closed) ends the session early and is returned.
pub async fn run_session<R, W>(
    service: &mut AccountService,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError>
where
    R: LineReader,
    W: LineWriter,
{
    info!("Session started");

    let mut flow = Flow::Running;
    while flow.is_running() {
        display_menu(output);
        let answer = input.ask(CHOICE_PROMPT).await?;
        flow = process_menu_choice(service, MenuChoice::parse(&answer), input, output).await?;
    }

    output.emit(GOODBYE_MESSAGE);
    info!(balance = service.balance(), "Session stopped");
    Ok(())
}
