pub mod args;
pub mod calorie;
pub mod console;
pub mod dietary;
mod error;
pub mod hydration;
pub mod logging;
pub mod visualizer;

use std::process::ExitCode;

use log::error;

use crate::console::Console;
pub use crate::error::CliError;

pub type Result<T> = std::result::Result<T, CliError>;

const UNEXPECTED_HINT: &str =
    "Please restart the program or contact support if the issue persists.";

/// Tells the user how a run ended and picks the process exit status.
pub fn report_outcome(console: &mut dyn Console, outcome: Result<()>, input_hint: &str) -> ExitCode {
    let Err(e) = outcome else {
        return ExitCode::SUCCESS;
    };

    error!("Run failed: {:?}", e);
    let message = if e.is_input_error() {
        format!("Input error: {}\n{}", e, input_hint)
    } else {
        format!("An unexpected error occurred: {}\n{}", e, UNEXPECTED_HINT)
    };
    if let Err(e) = console.print(&message) {
        error!("Could not report failure to the user: {}", e);
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use std::io;

    use healthtrack_diet::ValidationError;
    use mockall::predicate::eq;

    use super::*;
    use crate::console::MockConsole;

    #[test]
    fn success_prints_nothing() {
        let mut console = MockConsole::new();
        console.expect_print().never();

        assert_eq!(
            report_outcome(&mut console, Ok(()), "hint"),
            ExitCode::SUCCESS
        );
    }

    #[test]
    fn input_errors_get_the_hint() {
        let mut console = MockConsole::new();
        console
            .expect_print()
            .with(eq("Input error: Age cannot be negative.\nTry again."))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = Err(CliError::from(ValidationError::NegativeAge));

        assert_eq!(
            report_outcome(&mut console, outcome, "Try again."),
            ExitCode::FAILURE
        );
    }

    #[test]
    fn other_errors_are_unexpected() {
        let mut console = MockConsole::new();
        console
            .expect_print()
            .withf(|text: &str| text.starts_with("An unexpected error occurred: disk full"))
            .times(1)
            .returning(|_| Ok(()));

        let outcome = Err(CliError::from(io::Error::new(io::ErrorKind::Other, "disk full")));

        assert_eq!(
            report_outcome(&mut console, outcome, "unused"),
            ExitCode::FAILURE
        );
    }
}
