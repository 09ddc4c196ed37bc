//! Store initialization
//!
//! Creates the directory layout, writes the reference seed rows, and
//! optionally provisions a first admin account. Registration always forces
//! the employee role, so without `--admin` the admin role would be
//! unreachable on a fresh store.

use crate::auth::hash_password;
use crate::cli::OutputFormatter;
use crate::cli::utils::validate_email;
use crate::config::Config;
use crate::core::{ReferenceData, Role, UserBuilder};
use crate::error::{Result, ServiceDeskError};
use crate::storage::{FileStorage, ReferenceRepository, UserRepository};
use dialoguer::Password;
use std::env;
use std::path::PathBuf;

/// Parameters for the init command
pub struct InitParams {
    pub force: bool,
    pub admin: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

/// Handle the init command
pub fn handle_init_command(
    params: InitParams,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let config = Config::load_or_default()?;
    let base = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };
    let store_root = base.join(&config.store.dir);

    let storage = FileStorage::new(&store_root);
    if storage.is_initialized() && !params.force {
        return Err(ServiceDeskError::AlreadyInitialized);
    }

    storage.init_layout()?;
    storage.seed_reference(&ReferenceData::seed())?;
    formatter.success(&format!(
        "Initialized ticket store at {}",
        store_root.display()
    ));

    if let Some(username) = params.admin {
        let email = params.email.ok_or_else(|| {
            ServiceDeskError::InvalidInput("--admin requires --email".to_string())
        })?;
        validate_email(&email)?;

        let password = match params.password {
            Some(p) => p,
            None => Password::new()
                .with_prompt(format!("Password for admin '{username}'"))
                .with_confirmation("Confirm password", "Passwords do not match")
                .interact()
                .map_err(|e| ServiceDeskError::InvalidInput(e.to_string()))?,
        };

        let admin = UserBuilder::new()
            .username(&username)
            .email(email)
            .password_hash(hash_password(&password)?)
            .full_name(params.full_name.unwrap_or_else(|| username.clone()))
            .role(Role::Admin)
            .build();

        storage.create_user(&admin)?;
        formatter.success(&format!("Created admin account '{username}'"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SessionRepository;
    use tempfile::TempDir;

    fn quiet() -> OutputFormatter {
        OutputFormatter::new(true, true)
    }

    #[test]
    fn test_init_seeds_reference_data() {
        let temp_dir = TempDir::new().unwrap();
        let params = InitParams {
            force: false,
            admin: None,
            email: None,
            full_name: None,
            password: None,
        };

        handle_init_command(params, temp_dir.path().to_str(), &quiet()).unwrap();

        let storage = FileStorage::new(temp_dir.path().join(".servicedesk"));
        let reference = storage.load_reference().unwrap();
        assert_eq!(reference.initial_status().unwrap().name, "Open");
        assert!(storage.current().unwrap().is_none());
    }

    #[test]
    fn test_init_twice_requires_force() {
        let temp_dir = TempDir::new().unwrap();
        let params = || InitParams {
            force: false,
            admin: None,
            email: None,
            full_name: None,
            password: None,
        };

        handle_init_command(params(), temp_dir.path().to_str(), &quiet()).unwrap();
        assert!(matches!(
            handle_init_command(params(), temp_dir.path().to_str(), &quiet()),
            Err(ServiceDeskError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_init_provisions_admin() {
        let temp_dir = TempDir::new().unwrap();
        let params = InitParams {
            force: false,
            admin: Some("root".to_string()),
            email: Some("root@example.com".to_string()),
            full_name: Some("Site Admin".to_string()),
            password: Some("hunter2hunter2".to_string()),
        };

        handle_init_command(params, temp_dir.path().to_str(), &quiet()).unwrap();

        let storage = FileStorage::new(temp_dir.path().join(".servicedesk"));
        let admin = storage.find_user_by_username("root").unwrap().unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_init_admin_requires_email() {
        let temp_dir = TempDir::new().unwrap();
        let params = InitParams {
            force: false,
            admin: Some("root".to_string()),
            email: None,
            full_name: None,
            password: Some("hunter2hunter2".to_string()),
        };

        assert!(matches!(
            handle_init_command(params, temp_dir.path().to_str(), &quiet()),
            Err(ServiceDeskError::InvalidInput(_))
        ));
    }
}
