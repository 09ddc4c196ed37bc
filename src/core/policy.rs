//! Authorization policy
//!
//! Pure decision functions over (role, action, resource). Nothing in this
//! module touches storage or session state; handlers thread the actor in
//! explicitly and act on the returned decision.
//!
//! Denials inside a combined ticket update are silent per field: the
//! permitted parts of the submission still apply. Whole-route denials
//! (account administration) surface as errors the caller turns into a
//! warning for the actor.

use super::{Role, Ticket, UserId};

/// The gatable parts of a ticket update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketAction {
    /// Change the ticket status
    ChangeStatus,
    /// Assign the ticket to a technician
    Assign,
    /// Append a comment to the thread
    Comment,
}

impl TicketAction {
    /// Human-readable label used when reporting a skipped sub-action
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChangeStatus => "status change",
            Self::Assign => "assignment change",
            Self::Comment => "comment",
        }
    }
}

/// Outcome of a policy check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// The per-role ticket visibility rule
///
/// Admins see every ticket. Technicians see tickets assigned to them plus
/// the unassigned pool. Employees see only tickets they requested.
#[must_use]
pub fn can_view_ticket(role: Role, actor: UserId, ticket: &Ticket) -> bool {
    match role {
        Role::Admin => true,
        Role::Technician => ticket.is_unassigned() || ticket.assigned_to == Some(actor),
        Role::Employee => ticket.requester_id == actor,
    }
}

/// Role gate for the sub-actions of a ticket update
///
/// Comment permission is granted to anyone who can view the ticket; callers
/// check [`can_view_ticket`] before reaching this table.
#[must_use]
pub const fn ticket_action(role: Role, action: TicketAction) -> Decision {
    match (role, action) {
        (_, TicketAction::Comment) => Decision::Allow,
        (Role::Admin | Role::Technician, TicketAction::ChangeStatus) => Decision::Allow,
        (Role::Admin, TicketAction::Assign) => Decision::Allow,
        _ => Decision::Deny,
    }
}

/// Whether the role may list, edit, or delete accounts
#[must_use]
pub const fn can_manage_users(role: Role) -> bool {
    matches!(role, Role::Admin)
}

/// Account deletion gate: admin only, and never the actor's own account
#[must_use]
pub fn can_delete_user(role: Role, actor: UserId, target: UserId) -> Decision {
    if !can_manage_users(role) || actor == target {
        Decision::Deny
    } else {
        Decision::Allow
    }
}
