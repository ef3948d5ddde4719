//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Output(_) => crate::exitcode::IOERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, NodeId};

    #[test]
    fn test_exit_codes() {
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);

        let domain = CliError::from(ApplicationError::from(DomainError::IndexOutOfRange(
            NodeId::new(1),
        )));
        assert_eq!(domain.exit_code(), crate::exitcode::SOFTWARE);
        assert_eq!(domain.to_string(), "node index out of range: #1");

        let io = CliError::from(ApplicationError::from(std::io::Error::other("closed")));
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
    }
}
