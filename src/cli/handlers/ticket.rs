//! Ticket handlers: create, show, and the combined update
//!
//! The update handler is the one place where partial authorization shows:
//! one submission may carry a comment, a status change, and an assignment
//! change, and each part is gated independently. Denied parts are skipped
//! with a warning; permitted parts persist together in one write.

use super::common::HandlerContext;
use crate::cli::OutputFormatter;
use crate::core::policy::{self, TicketAction, can_view_ticket};
use crate::core::{Comment, ReferenceData, StatusId, Ticket, User, UserId};
use crate::error::{Result, ServiceDeskError};
use crate::storage::{ReferenceRepository, TicketRepository, UserRepository};
use dialoguer::{Input, theme::ColorfulTheme};
use tracing::debug;

/// Parameters for creating a ticket
pub struct NewTicketParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
}

/// Handle the ticket new command
///
/// Missing title/description are prompted for; category and priority
/// default to the first seeded rows. The requester is always the session
/// actor, the status always starts at the initial status.
pub fn handle_ticket_new_command(
    params: NewTicketParams,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    let reference = ctx.storage.load_reference()?;

    let title = match params.title {
        Some(t) => t,
        None => prompt("What is the problem?")?,
    };
    let description = match params.description {
        Some(d) => d,
        None => prompt_allow_empty("Details")?,
    };

    let category = match params.category.as_deref() {
        Some(reference_str) => {
            reference
                .resolve_category(reference_str)
                .ok_or_else(|| ServiceDeskError::UnknownCategory {
                    name: reference_str.to_string(),
                })?
        },
        None => reference.categories.first().ok_or_else(|| {
            ServiceDeskError::InvalidInput("no categories seeded".to_string())
        })?,
    };
    let priority = match params.priority.as_deref() {
        Some(reference_str) => {
            reference
                .resolve_priority(reference_str)
                .ok_or_else(|| ServiceDeskError::UnknownPriority {
                    name: reference_str.to_string(),
                })?
        },
        None => reference.priorities.first().ok_or_else(|| {
            ServiceDeskError::InvalidInput("no priorities seeded".to_string())
        })?,
    };
    let initial_status = reference
        .initial_status()
        .ok_or_else(|| ServiceDeskError::InvalidInput("no statuses seeded".to_string()))?;

    let ticket = Ticket::new(
        title,
        description,
        category.id,
        priority.id,
        initial_status.id,
        actor.id,
    );
    ctx.storage.save(&ticket)?;

    formatter.success(&format!(
        "Created ticket '{}' ({})",
        ticket.title,
        &ticket.id.to_string()[..8]
    ));
    Ok(())
}

/// Handle the ticket show command
///
/// Tickets outside the actor's visibility are reported as not found, so
/// their existence does not leak.
pub fn handle_ticket_show_command(
    ticket_ref: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    let ticket = load_visible_ticket(&ctx, &actor, ticket_ref)?;

    if formatter.is_json() {
        return Ok(formatter.json(&ticket)?);
    }

    let reference = ctx.storage.load_reference()?;
    let users = ctx.storage.load_all_users()?;

    formatter.info(&format!("Ticket {}", ticket.id));
    formatter.info(&format!("  Title:     {}", ticket.title));
    if !ticket.description.is_empty() {
        formatter.info(&format!("  Details:   {}", ticket.description));
    }
    formatter.info(&format!(
        "  Category:  {}",
        reference
            .category(ticket.category_id)
            .map_or("?", |c| c.name.as_str())
    ));
    formatter.info(&format!(
        "  Priority:  {}",
        reference
            .priority(ticket.priority_id)
            .map_or("?", |p| p.name.as_str())
    ));
    formatter.info(&format!(
        "  Status:    {}",
        reference
            .status(ticket.status_id)
            .map_or("?", |s| s.name.as_str())
    ));
    formatter.info(&format!("  Requester: {}", display_name(&users, ticket.requester_id)));
    formatter.info(&format!(
        "  Assigned:  {}",
        ticket
            .assigned_to
            .map_or_else(|| "unassigned".to_string(), |id| display_name(&users, id))
    ));
    formatter.info(&format!(
        "  Opened:    {}",
        ticket.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if !ticket.comments.is_empty() {
        formatter.info("");
        formatter.info(&format!("  {} comment(s):", ticket.comments.len()));
        for comment in &ticket.comments {
            formatter.info(&format!(
                "    [{}] {}: {}",
                comment.created_at.format("%Y-%m-%d %H:%M"),
                display_name(&users, comment.author_id),
                comment.content
            ));
        }
    }
    Ok(())
}

/// One combined ticket update submission, fields still unresolved
pub struct UpdateRequest {
    pub comment: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
}

impl UpdateRequest {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.comment.is_none() && self.status.is_none() && self.assignee.is_none()
    }
}

/// What happened to each part of an update submission
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub comment_added: bool,
    pub new_status: Option<StatusId>,
    pub new_assignee: Option<UserId>,
    pub skipped: Vec<TicketAction>,
}

/// Apply a combined update to a ticket, gating each part by role
///
/// Pure over its inputs: resolution and validation happen here, mutation is
/// confined to `ticket`, and nothing is persisted. Parts the actor's role
/// does not permit are skipped silently (recorded in the report) without
/// even validating their payload, matching the behavior of a form whose
/// denied fields are ignored wholesale. Validation failures of a permitted
/// part fail the whole submission before anything is persisted.
pub fn apply_ticket_update(
    actor: &User,
    ticket: &mut Ticket,
    request: &UpdateRequest,
    reference: &ReferenceData,
    users: &[User],
) -> Result<UpdateReport> {
    let mut report = UpdateReport::default();

    if let Some(content) = &request.comment {
        // Comment permission == view permission, which the caller has
        // already established.
        ticket.add_comment(Comment::new(actor.id, content.clone()));
        report.comment_added = true;
    }

    if let Some(status_ref) = &request.status {
        if policy::ticket_action(actor.role, TicketAction::ChangeStatus).is_allowed() {
            let status = reference.resolve_status(status_ref).ok_or_else(|| {
                ServiceDeskError::UnknownStatus {
                    name: status_ref.clone(),
                }
            })?;
            ticket.status_id = status.id;
            report.new_status = Some(status.id);
        } else {
            report.skipped.push(TicketAction::ChangeStatus);
        }
    }

    if let Some(assignee_ref) = &request.assignee {
        if policy::ticket_action(actor.role, TicketAction::Assign).is_allowed() {
            let assignee = resolve_assignee(users, assignee_ref)?;
            ticket.assigned_to = Some(assignee.id);
            report.new_assignee = Some(assignee.id);
        } else {
            report.skipped.push(TicketAction::Assign);
        }
    }

    Ok(report)
}

/// Handle the ticket update command
pub fn handle_ticket_update_command(
    ticket_ref: &str,
    request: UpdateRequest,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let actor = ctx.current_actor()?;
    let mut ticket = load_visible_ticket(&ctx, &actor, ticket_ref)?;

    if request.is_empty() {
        formatter.info("Nothing to update");
        return Ok(());
    }

    let reference = ctx.storage.load_reference()?;
    let users = ctx.storage.load_all_users()?;

    let report = apply_ticket_update(&actor, &mut ticket, &request, &reference, &users)?;

    // Everything that survived the gates lands in one write
    ctx.storage.save(&ticket)?;
    debug!(ticket = %ticket.id, actor = %actor.username, "ticket updated");

    if report.comment_added {
        formatter.success("Comment added");
    }
    if let Some(status_id) = report.new_status {
        let name = reference.status(status_id).map_or("?", |s| s.name.as_str());
        formatter.success(&format!("Status set to {name}"));
    }
    if let Some(assignee_id) = report.new_assignee {
        formatter.success(&format!(
            "Assigned to {}",
            display_name(&users, assignee_id)
        ));
    }
    for action in &report.skipped {
        formatter.warning(&format!(
            "{} ignored: your role does not permit it",
            action.label()
        ));
    }
    Ok(())
}

/// Load a ticket, treating invisible tickets as missing
fn load_visible_ticket(
    ctx: &HandlerContext,
    actor: &User,
    ticket_ref: &str,
) -> Result<Ticket> {
    let id = ctx.resolve_ticket_ref(ticket_ref)?;
    let ticket = ctx.storage.load(&id)?;

    if can_view_ticket(actor.role, actor.id, &ticket) {
        Ok(ticket)
    } else {
        Err(ServiceDeskError::TicketNotFound {
            id: ticket_ref.to_string(),
        })
    }
}

/// An assignment target must exist and hold a staff role
fn resolve_assignee<'a>(users: &'a [User], assignee_ref: &str) -> Result<&'a User> {
    let user = users
        .iter()
        .find(|u| u.username == assignee_ref || u.id.to_string() == assignee_ref)
        .ok_or_else(|| ServiceDeskError::UserNotFound {
            id: assignee_ref.to_string(),
        })?;

    if user.role.is_staff() {
        Ok(user)
    } else {
        Err(ServiceDeskError::InvalidAssignee {
            username: user.username.clone(),
        })
    }
}

fn display_name(users: &[User], id: UserId) -> String {
    users
        .iter()
        .find(|u| u.id == id)
        .map_or_else(|| "(deleted user)".to_string(), |u| u.username.clone())
}

fn prompt(text: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(text)
        .interact()
        .map_err(|e| ServiceDeskError::InvalidInput(e.to_string()))
}

fn prompt_allow_empty(text: &str) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(text)
        .allow_empty(true)
        .interact()
        .map_err(|e| ServiceDeskError::InvalidInput(e.to_string()))
}
