use crate::cli::utils::find_store_root;
use crate::config::Config;
use crate::core::{Ticket, TicketId, User, UserId};
use crate::error::{Result, ServiceDeskError};
use crate::storage::{FileStorage, SessionRepository, TicketRepository, UserRepository};
use uuid::Uuid;

/// Common context for all handler operations
pub struct HandlerContext {
    pub storage: FileStorage,
}

impl HandlerContext {
    /// Open the store discovered from the project directory (or cwd)
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let config = Config::load_or_default()?;
        let root = find_store_root(project_dir, &config.store.dir)?;
        let storage = FileStorage::new(root.join(&config.store.dir));

        Ok(Self { storage })
    }

    /// The actor bound to the current session
    ///
    /// A session pointing at a deleted account reads as logged out.
    pub fn current_actor(&self) -> Result<User> {
        let id = self
            .storage
            .current()?
            .ok_or(ServiceDeskError::NotLoggedIn)?;

        match self.storage.load_user(&id) {
            Ok(user) => Ok(user),
            Err(ServiceDeskError::UserNotFound { .. }) => Err(ServiceDeskError::NotLoggedIn),
            Err(e) => Err(e),
        }
    }

    /// Resolve a ticket reference: a full UUID or a unique id prefix
    pub fn resolve_ticket_ref(&self, ticket_ref: &str) -> Result<TicketId> {
        // Try to parse as UUID first
        if let Ok(id) = Uuid::parse_str(ticket_ref) {
            return Ok(TicketId::from_uuid(id));
        }

        // Fall back to a unique prefix match
        let tickets = self.storage.load_all()?;
        let matches: Vec<&Ticket> = tickets
            .iter()
            .filter(|t| t.id.to_string().starts_with(ticket_ref))
            .collect();

        match matches.as_slice() {
            [ticket] => Ok(ticket.id),
            _ => Err(ServiceDeskError::TicketNotFound {
                id: ticket_ref.to_string(),
            }),
        }
    }

    /// Resolve a user reference: a username or a full UUID
    pub fn resolve_user_ref(&self, user_ref: &str) -> Result<User> {
        if let Ok(id) = Uuid::parse_str(user_ref) {
            return self.storage.load_user(&UserId::from_uuid(id));
        }

        self.storage
            .find_user_by_username(user_ref)?
            .ok_or_else(|| ServiceDeskError::UserNotFound {
                id: user_ref.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CategoryId, PriorityId, StatusId};
    use tempfile::TempDir;

    fn context() -> (TempDir, HandlerContext) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".servicedesk"));
        storage.init_layout().unwrap();
        (temp_dir, HandlerContext { storage })
    }

    #[test]
    fn test_current_actor_requires_login() {
        let (_guard, ctx) = context();
        assert!(matches!(
            ctx.current_actor(),
            Err(ServiceDeskError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_stale_session_reads_as_logged_out() {
        let (_guard, ctx) = context();
        ctx.storage.set_current(&UserId::new()).unwrap();

        assert!(matches!(
            ctx.current_actor(),
            Err(ServiceDeskError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_resolve_ticket_by_prefix() {
        let (_guard, ctx) = context();
        let ticket = Ticket::new(
            "Printer jam",
            "",
            CategoryId(1),
            PriorityId(1),
            StatusId(1),
            UserId::new(),
        );
        ctx.storage.save(&ticket).unwrap();

        let prefix = &ticket.id.to_string()[..8];
        assert_eq!(ctx.resolve_ticket_ref(prefix).unwrap(), ticket.id);
    }

    #[test]
    fn test_resolve_unknown_ticket() {
        let (_guard, ctx) = context();
        assert!(matches!(
            ctx.resolve_ticket_ref("deadbeef"),
            Err(ServiceDeskError::TicketNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_user_by_username() {
        let (_guard, ctx) = context();
        let user = User::new("alice", "alice@example.com", "hash", "Alice Martin");
        ctx.storage.create_user(&user).unwrap();

        assert_eq!(ctx.resolve_user_ref("alice").unwrap().id, user.id);
        assert!(ctx.resolve_user_ref("mallory").is_err());
    }
}
