//! Error types for servicedesk
//!
//! All fallible operations return [`Result`], and every failure is terminal
//! for the request that produced it: nothing is retried, and errors are
//! reported to the actor as a short message rather than raw internals.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ServiceDeskError>;

/// Error taxonomy for the ticketing system
#[derive(Debug, Error)]
pub enum ServiceDeskError {
    /// Login failed. Deliberately generic: an unknown username and a wrong
    /// password are indistinguishable from the outside.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The actor's role does not permit the attempted action
    #[error("Access denied: {action} requires administrator rights")]
    AccessDenied { action: String },

    /// An admin tried to delete the account they are logged in as
    #[error("You cannot delete your own account")]
    SelfDeletion,

    /// Username or email collision on registration or account edit.
    /// Does not reveal which of the two fields collided.
    #[error("Username or email already taken")]
    DuplicateUser,

    /// Referenced ticket does not exist (or is not visible to the actor)
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    /// Referenced user does not exist
    #[error("User not found: {id}")]
    UserNotFound { id: String },

    /// Status id or name that matches no seeded status row
    #[error("Unknown status: {name}")]
    UnknownStatus { name: String },

    /// Category id or name that matches no seeded category row
    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },

    /// Priority id or name that matches no seeded priority row
    #[error("Unknown priority: {name}")]
    UnknownPriority { name: String },

    /// Assignment target exists but is not a technician or admin
    #[error("'{username}' is not a technician or admin")]
    InvalidAssignee { username: String },

    /// No session is bound to the current store
    #[error("Not logged in")]
    NotLoggedIn,

    /// The store directory was not found in this directory or any parent
    #[error("Ticket store not initialized")]
    StoreNotInitialized,

    /// `init` was run against an existing store without `--force`
    #[error("Ticket store already initialized")]
    AlreadyInitialized,

    /// A role tag outside EMPLOYEE/TECHNICIAN/ADMIN
    #[error("Invalid role: '{value}'")]
    InvalidRole { value: String },

    /// Malformed user input (e.g. a bad email address)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Password hashing or hash parsing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Configuration file or environment could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO error from the storage layer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error from the storage layer
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// JSON rendering error from the output layer
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServiceDeskError {
    /// User-facing message for this error
    ///
    /// Internal errors (IO, serialization, config) are summarized rather
    /// than dumped verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(_) => "A storage error occurred".to_string(),
            Self::Serialization(_) => "A stored record could not be read".to_string(),
            Self::Json(_) => "Output could not be rendered".to_string(),
            Self::Config(_) => "The configuration could not be loaded".to_string(),
            Self::PasswordHash(_) => "Password processing failed".to_string(),
            other => other.to_string(),
        }
    }

    /// Suggestions for resolving this error, shown under the message
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCredentials => vec![
                "Check the username and password and try again".to_string(),
            ],
            Self::NotLoggedIn => vec![
                "Run 'servicedesk login <username>' first".to_string(),
            ],
            Self::StoreNotInitialized => vec![
                "Run 'servicedesk init' in the project directory".to_string(),
            ],
            Self::AlreadyInitialized => vec![
                "Use --force to reinitialize (existing records are kept)".to_string(),
            ],
            Self::DuplicateUser => vec![
                "Pick a different username or email".to_string(),
            ],
            Self::InvalidRole { .. } => vec![
                "Valid roles are EMPLOYEE, TECHNICIAN, and ADMIN".to_string(),
            ],
            Self::InvalidAssignee { .. } => vec![
                "Tickets can only be assigned to technicians or admins".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether the actor can fix this error by changing their input
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_)
                | Self::Serialization(_)
                | Self::Json(_)
                | Self::Config(_)
                | Self::PasswordHash(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_errors_are_summarized() {
        let err = ServiceDeskError::Io(std::io::Error::other("disk on fire"));
        assert_eq!(err.user_message(), "A storage error occurred");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_domain_errors_pass_through() {
        let err = ServiceDeskError::TicketNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(err.user_message(), "Ticket not found: abc");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_suggestions_present_for_auth_errors() {
        assert!(!ServiceDeskError::NotLoggedIn.suggestions().is_empty());
        assert!(!ServiceDeskError::InvalidCredentials.suggestions().is_empty());
    }
}
