//! Authentication handlers: register, login, logout, whoami

use super::common::HandlerContext;
use crate::auth::{authenticate, hash_password};
use crate::cli::OutputFormatter;
use crate::cli::utils::validate_email;
use crate::core::User;
use crate::error::{Result, ServiceDeskError};
use crate::storage::{SessionRepository, UserRepository};
use dialoguer::Password;
use tracing::info;

/// Parameters for registration
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: Option<String>,
}

/// Handle the register command
///
/// The new account always gets the employee role; there is no way to
/// request anything else at registration time.
pub fn handle_register_command(
    params: RegisterParams,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    validate_email(&params.email)?;

    let password = match params.password {
        Some(p) => p,
        None => prompt_password(&format!("Password for '{}'", params.username))?,
    };

    let user = User::new(
        &params.username,
        &params.email,
        hash_password(&password)?,
        &params.full_name,
    );
    ctx.storage.create_user(&user)?;

    info!(username = %user.username, "account registered");
    formatter.success(&format!(
        "Account '{}' created. Log in with 'servicedesk login {}'",
        user.username, user.username
    ));
    Ok(())
}

/// Handle the login command
pub fn handle_login_command(
    username: &str,
    password: Option<String>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;

    let password = match password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };

    let users = ctx.storage.load_all_users()?;
    let user = authenticate(&users, username, &password)?;
    ctx.storage.set_current(&user.id)?;

    info!(username = %user.username, role = %user.role, "session opened");
    formatter.success(&format!("Logged in as {} ({})", user.username, user.role));
    Ok(())
}

/// Handle the logout command
///
/// Clearing the session never fails on "not logged in"; logging out twice
/// is a no-op.
pub fn handle_logout_command(
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    ctx.storage.clear_current()?;
    formatter.success("Logged out");
    Ok(())
}

/// Handle the whoami command
pub fn handle_whoami_command(
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;

    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": actor.id.to_string(),
            "username": actor.username,
            "role": actor.role,
            "full_name": actor.full_name,
        }))?;
    } else {
        formatter.info(&format!(
            "{} ({}): {}",
            actor.username, actor.role, actor.full_name
        ));
    }
    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| ServiceDeskError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::init::{InitParams, handle_init_command};
    use tempfile::TempDir;

    fn quiet() -> OutputFormatter {
        OutputFormatter::new(true, true)
    }

    fn init_store() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        handle_init_command(
            InitParams {
                force: false,
                admin: None,
                email: None,
                full_name: None,
                password: None,
            },
            temp_dir.path().to_str(),
            &quiet(),
        )
        .unwrap();
        temp_dir
    }

    fn register(dir: &TempDir, username: &str) -> Result<()> {
        handle_register_command(
            RegisterParams {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                full_name: format!("Test {username}"),
                password: Some("correct horse".to_string()),
            },
            dir.path().to_str(),
            &quiet(),
        )
    }

    #[test]
    fn test_register_login_logout_flow() {
        let dir = init_store();
        register(&dir, "alice").unwrap();

        handle_login_command(
            "alice",
            Some("correct horse".to_string()),
            dir.path().to_str(),
            &quiet(),
        )
        .unwrap();

        let ctx = HandlerContext::new(dir.path().to_str()).unwrap();
        assert_eq!(ctx.current_actor().unwrap().username, "alice");

        handle_logout_command(dir.path().to_str(), &quiet()).unwrap();
        assert!(matches!(
            ctx.current_actor(),
            Err(ServiceDeskError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_register_rejects_duplicate_username() {
        let dir = init_store();
        register(&dir, "alice").unwrap();

        let result = handle_register_command(
            RegisterParams {
                username: "alice".to_string(),
                email: "other@example.com".to_string(),
                full_name: "Another Alice".to_string(),
                password: Some("pw".to_string()),
            },
            dir.path().to_str(),
            &quiet(),
        );

        assert!(matches!(result, Err(ServiceDeskError::DuplicateUser)));

        let ctx = HandlerContext::new(dir.path().to_str()).unwrap();
        assert_eq!(ctx.storage.load_all_users().unwrap().len(), 1);
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let dir = init_store();
        let result = handle_register_command(
            RegisterParams {
                username: "bob".to_string(),
                email: "not-an-email".to_string(),
                full_name: "Bob".to_string(),
                password: Some("pw".to_string()),
            },
            dir.path().to_str(),
            &quiet(),
        );

        assert!(matches!(result, Err(ServiceDeskError::InvalidInput(_))));
    }

    #[test]
    fn test_login_failures_are_generic() {
        let dir = init_store();
        register(&dir, "alice").unwrap();

        let wrong_password = handle_login_command(
            "alice",
            Some("wrong".to_string()),
            dir.path().to_str(),
            &quiet(),
        )
        .unwrap_err();
        let unknown_user = handle_login_command(
            "mallory",
            Some("correct horse".to_string()),
            dir.path().to_str(),
            &quiet(),
        )
        .unwrap_err();

        assert_eq!(wrong_password.user_message(), unknown_user.user_message());

        // Neither attempt opened a session
        let ctx = HandlerContext::new(dir.path().to_str()).unwrap();
        assert!(matches!(
            ctx.current_actor(),
            Err(ServiceDeskError::NotLoggedIn)
        ));
    }
}
