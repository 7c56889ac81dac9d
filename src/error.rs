//! Error types shared by the store, the pipeline parser and the dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = GcmdError> = std::result::Result<T, E>;

/// Every failure a `gcmd` invocation can end with.
#[derive(Error, Debug)]
pub enum GcmdError {
    /// The current user's home directory could not be determined.
    #[error("Unable to determine HOME directory")]
    UserLookup,

    /// A saved command was expected to exist and did not.
    #[error("No such command")]
    NotFound(String),

    /// Save refused to overwrite an existing command file.
    #[error("Command {0} already exists")]
    AlreadyExists(String),

    /// Any other filesystem failure, tagged with the offending path.
    #[error("{context} {}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command file exists but does not hold a valid command.
    #[error("Failed to parse command file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// User input was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// A command saved with `-i` was run without piped standard input.
    #[error("Command needs stdin")]
    StdinRequired,

    /// `bash` could not be started.
    #[error("Failed to run bash: {0}")]
    Spawn(#[source] std::io::Error),

    /// `bash` ran but did not exit cleanly.
    #[error("Command exited with status {code}")]
    Subshell { code: i32 },
}

impl GcmdError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GcmdError::Io {
            context,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        GcmdError::Validation(msg.into())
    }

    /// Process exit code for this error. Subshell failures forward the child's code.
    pub fn exit_code(&self) -> i32 {
        match self {
            GcmdError::Subshell { code } => *code,
            _ => 1,
        }
    }
}
