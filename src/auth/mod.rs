//! Authentication: credential hashing and login verification

pub mod password;

pub use password::{hash_password, verify_password};

use crate::core::User;
use crate::error::{Result, ServiceDeskError};

/// Verify a login attempt against the user directory
///
/// An unknown username and a wrong password both return
/// [`ServiceDeskError::InvalidCredentials`]; callers must not distinguish
/// the two, so login failures reveal nothing about which accounts exist.
pub fn authenticate(users: &[User], username: &str, password: &str) -> Result<User> {
    let Some(user) = users.iter().find(|u| u.username == username) else {
        return Err(ServiceDeskError::InvalidCredentials);
    };

    if verify_password(password, &user.password_hash)? {
        Ok(user.clone())
    } else {
        Err(ServiceDeskError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<User> {
        vec![User::new(
            "alice",
            "alice@example.com",
            hash_password("correct horse").unwrap(),
            "Alice Martin",
        )]
    }

    #[test]
    fn test_valid_login() {
        let users = directory();
        let user = authenticate(&users, "alice", "correct horse").unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let users = directory();

        let unknown = authenticate(&users, "mallory", "correct horse").unwrap_err();
        let wrong = authenticate(&users, "alice", "battery staple").unwrap_err();

        assert!(matches!(unknown, ServiceDeskError::InvalidCredentials));
        assert!(matches!(wrong, ServiceDeskError::InvalidCredentials));
        assert_eq!(unknown.user_message(), wrong.user_message());
    }
}
