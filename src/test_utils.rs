//! Test utilities for servicedesk
//!
//! Common fixtures to reduce duplication in test code across the codebase.

#![cfg(test)]

use crate::auth::hash_password;
use crate::cli::handlers::HandlerContext;
use crate::core::{
    CategoryId, PriorityId, ReferenceData, Role, StatusId, Ticket, User, UserBuilder,
};
use crate::storage::{
    FileStorage, ReferenceRepository, SessionRepository, TicketRepository, UserRepository,
};
use std::path::PathBuf;
use tempfile::TempDir;

/// Password shared by every fixture account
pub const TEST_PASSWORD: &str = "correct horse";

/// Test fixture for a temporary initialized store
pub struct TestProject {
    pub temp_dir: TempDir,
    pub project_root: PathBuf,
    pub storage: FileStorage,
}

impl TestProject {
    /// Create a test project with an initialized, seeded store
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let project_root = temp_dir.path().to_path_buf();
        let storage = FileStorage::new(project_root.join(".servicedesk"));

        storage.init_layout().expect("Failed to init store");
        storage
            .seed_reference(&ReferenceData::seed())
            .expect("Failed to seed reference data");

        Self {
            temp_dir,
            project_root,
            storage,
        }
    }

    /// Create a test project with the standard cast:
    /// root (admin), bob (technician), alice and carol (employees)
    pub fn with_accounts() -> Self {
        let project = Self::new();

        // One hash shared across fixtures; hashing is deliberately slow
        let hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");

        let accounts = [
            ("root", Role::Admin, "Site Admin"),
            ("bob", Role::Technician, "Bob Okafor"),
            ("alice", Role::Employee, "Alice Martin"),
            ("carol", Role::Employee, "Carol Diaz"),
        ];
        for (username, role, full_name) in accounts {
            let user = UserBuilder::new()
                .username(username)
                .email(format!("{username}@example.com"))
                .password_hash(hash.clone())
                .full_name(full_name)
                .role(role)
                .build();
            project
                .storage
                .create_user(&user)
                .expect("Failed to create fixture user");
        }

        project
    }

    /// The project root as a handler-compatible argument
    pub fn root_str(&self) -> Option<&str> {
        Some(self.project_root.to_str().expect("Invalid path"))
    }

    /// A handler context over this project's store
    pub fn context(&self) -> HandlerContext {
        HandlerContext::new(self.root_str()).expect("Failed to open store")
    }

    /// Load a fixture user by username
    pub fn user(&self, username: &str) -> User {
        self.storage
            .find_user_by_username(username)
            .expect("Failed to look up user")
            .unwrap_or_else(|| panic!("No fixture user '{username}'"))
    }

    /// Bind the session to a fixture user
    pub fn login_as(&self, username: &str) {
        let user = self.user(username);
        self.storage
            .set_current(&user.id)
            .expect("Failed to set session");
    }

    /// File and save a ticket requested by the given fixture user
    pub fn create_ticket_for(&self, username: &str, title: &str) -> Ticket {
        let requester = self.user(username);
        let ticket = Ticket::new(
            title,
            format!("Description for {title}"),
            CategoryId(1),
            PriorityId(2),
            StatusId(1),
            requester.id,
        );
        self.storage.save(&ticket).expect("Failed to save ticket");
        ticket
    }

    /// The seeded reference data
    pub fn reference(&self) -> ReferenceData {
        self.storage
            .load_reference()
            .expect("Failed to load reference data")
    }

    /// Every stored account
    pub fn users(&self) -> Vec<User> {
        self.storage
            .load_all_users()
            .expect("Failed to load users")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_is_seeded() {
        let project = TestProject::new();
        assert!(project.storage.is_initialized());
        assert_eq!(project.reference().statuses.len(), 4);
    }

    #[test]
    fn test_fixture_cast() {
        let project = TestProject::with_accounts();
        assert_eq!(project.user("root").role, Role::Admin);
        assert_eq!(project.user("bob").role, Role::Technician);
        assert_eq!(project.users().len(), 4);
    }
}
