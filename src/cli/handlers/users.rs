//! Account administration handlers (admin only)

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::cli::utils::validate_email;
use crate::core::policy::{can_delete_user, can_manage_users};
use crate::core::Role;
use crate::error::{Result, ServiceDeskError};
use crate::storage::UserRepository;
use tracing::info;

/// Parameters for editing an account
pub struct EditUserParams {
    pub user: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<String>,
}

/// Handle the users list command
pub fn handle_users_list_command(
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    require_admin(actor.role, "listing accounts")?;

    let mut users = ctx.storage.load_all_users()?;
    users.sort_by(|a, b| a.username.cmp(&b.username));

    if formatter.is_json() {
        let rows: Vec<_> = users
            .iter()
            .map(|u| {
                serde_json::json!({
                    "id": u.id.to_string(),
                    "username": u.username,
                    "email": u.email,
                    "role": u.role,
                    "full_name": u.full_name,
                    "created_at": u.created_at,
                })
            })
            .collect();
        return Ok(formatter.json(&rows)?);
    }

    formatter.info(&format!("{} account(s)", users.len()));
    for user in &users {
        formatter.info(&format!(
            "  {:<16} {:<10} {:<28} {}",
            user.username, user.role, user.email, user.full_name
        ));
    }
    Ok(())
}

/// Handle the users edit command
///
/// Unspecified fields keep their current value; the whole edit either
/// passes the uniqueness check and lands in one write, or leaves the
/// record untouched.
pub fn handle_user_edit_command(
    params: EditUserParams,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    require_admin(actor.role, "editing accounts")?;

    let mut target = ctx.resolve_user_ref(&params.user)?;

    if let Some(username) = params.username {
        target.username = username;
    }
    if let Some(email) = params.email {
        validate_email(&email)?;
        target.email = email;
    }
    if let Some(full_name) = params.full_name {
        target.full_name = full_name;
    }
    if let Some(role) = params.role {
        target.role = role.parse()?;
    }

    ctx.storage.update_user(&target)?;

    info!(username = %target.username, role = %target.role, "account updated");
    formatter.success(&format!("Account '{}' updated", target.username));
    Ok(())
}

/// Handle the users delete command
///
/// Admins cannot delete their own account. Tickets and comments that
/// reference the deleted account keep their ids; display code renders
/// those as "(deleted user)".
pub fn handle_user_delete_command(
    user_ref: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    require_admin(actor.role, "deleting accounts")?;

    let target = ctx.resolve_user_ref(user_ref)?;
    if !can_delete_user(actor.role, actor.id, target.id).is_allowed() {
        return Err(ServiceDeskError::SelfDeletion);
    }

    ctx.storage.delete_user(&target.id)?;

    info!(username = %target.username, "account deleted");
    formatter.warning(&format!("Account '{}' deleted", target.username));
    Ok(())
}

fn require_admin(role: Role, action: &str) -> Result<()> {
    if can_manage_users(role) {
        Ok(())
    } else {
        Err(ServiceDeskError::AccessDenied {
            action: action.to_string(),
        })
    }
}
