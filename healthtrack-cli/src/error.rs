use std::io;

use healthtrack_diet::ValidationError;
use healthtrack_model::body::MetricsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Report(#[from] healthtrack_report::Error),
    #[error(transparent)]
    Chart(#[from] healthtrack_charts::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CliError {
    /// Whether the user can fix the failure by entering different values.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CliError::Input(_) | CliError::Validation(_) | CliError::Metrics(_)
        )
    }
}
