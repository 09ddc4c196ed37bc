//! Dashboard handler: the role-filtered ticket listing

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::policy::can_view_ticket;
use crate::core::{ReferenceData, Ticket, User, UserId};
use crate::error::Result;
use crate::storage::{ReferenceRepository, TicketRepository, UserRepository};

/// The tickets the actor is allowed to see, newest first
pub fn visible_tickets(ctx: &HandlerContext, actor: &User) -> Result<Vec<Ticket>> {
    let mut tickets = ctx
        .storage
        .find(|t| can_view_ticket(actor.role, actor.id, t))?;
    tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(tickets)
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    let tickets = visible_tickets(&ctx, &actor)?;

    if formatter.is_json() {
        return Ok(formatter.json(&tickets)?);
    }

    if tickets.is_empty() {
        formatter.info("No tickets to show");
        return Ok(());
    }

    let reference = ctx.storage.load_reference()?;
    let users = ctx.storage.load_all_users()?;

    formatter.info(&format!(
        "{} ticket(s) visible to {} ({})",
        tickets.len(),
        actor.username,
        actor.role
    ));
    for ticket in &tickets {
        formatter.info(&format_row(ticket, &reference, &users));
    }
    Ok(())
}

fn format_row(ticket: &Ticket, reference: &ReferenceData, users: &[User]) -> String {
    let short_id = &ticket.id.to_string()[..8];
    let status = reference
        .status(ticket.status_id)
        .map_or("?", |s| s.name.as_str());
    let priority = reference
        .priority(ticket.priority_id)
        .map_or("?", |p| p.name.as_str());
    let assignee = match ticket.assigned_to {
        Some(id) => username(users, id),
        None => "unassigned".to_string(),
    };

    format!(
        "  {short_id}  [{status}] [{priority}] {} (by {}, assigned: {assignee})",
        ticket.title,
        username(users, ticket.requester_id),
    )
}

/// Resolve a user id for display, tolerating dangling references
fn username(users: &[User], id: UserId) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map_or_else(|| "(deleted user)".to_string(), |u| u.username.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;
    use crate::test_utils::TestProject;

    #[test]
    fn test_dashboard_is_role_filtered() {
        let project = TestProject::with_accounts();
        let alice_ticket = project.create_ticket_for("alice", "Broken keyboard");
        project.create_ticket_for("carol", "Slow laptop");

        let ctx = project.context();

        // Employee: own tickets only
        let alice = project.user("alice");
        let visible = visible_tickets(&ctx, &alice).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, alice_ticket.id);

        // Technician: sees the whole unassigned pool
        let bob = project.user("bob");
        assert_eq!(visible_tickets(&ctx, &bob).unwrap().len(), 2);

        // Admin: sees everything
        let root = project.user("root");
        assert_eq!(visible_tickets(&ctx, &root).unwrap().len(), 2);
        assert_eq!(root.role, Role::Admin);
    }

    #[test]
    fn test_dangling_requester_renders_placeholder() {
        let project = TestProject::with_accounts();
        let ticket = project.create_ticket_for("alice", "Orphaned ticket");

        assert_eq!(username(&[], ticket.requester_id), "(deleted user)");
    }
}
