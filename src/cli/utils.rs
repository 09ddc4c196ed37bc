//! CLI helper utilities

use crate::error::{Result, ServiceDeskError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Find the directory containing the ticket store
///
/// Walks up from `start` (or the current directory) until a directory
/// containing `store_dir_name` is found.
pub fn find_store_root(start: Option<&str>, store_dir_name: &str) -> Result<PathBuf> {
    let start_dir = match start {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };

    let mut current: &Path = &start_dir;
    loop {
        if current.join(store_dir_name).is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(ServiceDeskError::StoreNotInitialized),
        }
    }
}

/// Basic shape check for email addresses
///
/// Deliberately loose; deliverability is not this system's problem.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate an email address, returning it on success
pub fn validate_email(email: &str) -> Result<&str> {
    if is_valid_email(email) {
        Ok(email)
    } else {
        Err(ServiceDeskError::InvalidInput(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@nodot"));
        assert!(!is_valid_email("al ice@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_find_store_root_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join(".servicedesk")).unwrap();
        let nested = root.join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_store_root(nested.to_str(), ".servicedesk").unwrap();
        assert_eq!(found, root);
    }

    #[test]
    fn test_find_store_root_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            find_store_root(temp_dir.path().to_str(), ".servicedesk"),
            Err(ServiceDeskError::StoreNotInitialized)
        ));
    }
}
