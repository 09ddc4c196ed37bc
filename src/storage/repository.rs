use crate::core::{ReferenceData, Ticket, TicketId, User, UserId};
use crate::error::{Result, ServiceDeskError};

/// Repository trait for the user directory
///
/// This trait defines the interface for storing and retrieving accounts,
/// allowing for different storage implementations. Username and email
/// uniqueness is enforced here, on create and on update.
pub trait UserRepository: Send + Sync {
    /// Creates a new account, rejecting username/email collisions
    fn create_user(&self, user: &User) -> Result<()>;

    /// Overwrites an existing account, rejecting collisions with others
    fn update_user(&self, user: &User) -> Result<()>;

    /// Loads an account by ID
    fn load_user(&self, id: &UserId) -> Result<User>;

    /// Loads all accounts
    fn load_all_users(&self) -> Result<Vec<User>>;

    /// Deletes an account by ID
    fn delete_user(&self, id: &UserId) -> Result<()>;

    /// Finds an account by exact username
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

/// Repository trait for ticket storage operations
pub trait TicketRepository: Send + Sync {
    /// Saves a ticket (and its embedded comment thread) in one write
    fn save(&self, ticket: &Ticket) -> Result<()>;

    /// Loads a ticket by ID
    fn load(&self, id: &TicketId) -> Result<Ticket>;

    /// Loads all tickets
    fn load_all(&self) -> Result<Vec<Ticket>>;

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &TicketId) -> Result<bool>;

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool;

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> Result<usize>
    where
        F: Fn(&Ticket) -> bool;
}

/// Repository trait for the seeded lookup tables
///
/// Reference rows are written once at initialization and read-only
/// afterwards; there is no update operation.
pub trait ReferenceRepository: Send + Sync {
    /// Writes the seed rows
    fn seed_reference(&self, data: &ReferenceData) -> Result<()>;

    /// Loads all reference rows
    fn load_reference(&self) -> Result<ReferenceData>;
}

/// Repository trait for the session binding
///
/// At most one actor is bound per store; handlers read the binding and
/// thread the resolved actor through every operation explicitly.
pub trait SessionRepository: Send + Sync {
    /// Binds the session to the given user
    fn set_current(&self, id: &UserId) -> Result<()>;

    /// Gets the currently bound user, if any
    fn current(&self) -> Result<Option<UserId>>;

    /// Clears the binding unconditionally
    fn clear_current(&self) -> Result<()>;
}

/// Combined repository trait
pub trait Repository:
    UserRepository + TicketRepository + ReferenceRepository + SessionRepository
{
}

/// Implementation of Repository for types that implement all four traits
impl<T> Repository for T where
    T: UserRepository + TicketRepository + ReferenceRepository + SessionRepository
{
}

use super::file::FileStorage;

impl UserRepository for FileStorage {
    fn create_user(&self, user: &User) -> Result<()> {
        let taken = self.read_all_users()?.into_iter().any(|existing| {
            existing.username == user.username || existing.email == user.email
        });
        if taken {
            return Err(ServiceDeskError::DuplicateUser);
        }
        self.write_user(user)
    }

    fn update_user(&self, user: &User) -> Result<()> {
        // The record on disk is untouched unless the new version passes the
        // uniqueness scan, so a rejected edit leaves the prior data intact.
        let taken = self.read_all_users()?.into_iter().any(|existing| {
            existing.id != user.id
                && (existing.username == user.username || existing.email == user.email)
        });
        if taken {
            return Err(ServiceDeskError::DuplicateUser);
        }
        self.read_user(&user.id)?;
        self.write_user(user)
    }

    fn load_user(&self, id: &UserId) -> Result<User> {
        self.read_user(id)
    }

    fn load_all_users(&self) -> Result<Vec<User>> {
        self.read_all_users()
    }

    fn delete_user(&self, id: &UserId) -> Result<()> {
        self.remove_user(id)
    }

    fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.read_all_users()?;
        Ok(users.into_iter().find(|u| u.username == username))
    }
}

impl TicketRepository for FileStorage {
    fn save(&self, ticket: &Ticket) -> Result<()> {
        self.write_ticket(ticket)
    }

    fn load(&self, id: &TicketId) -> Result<Ticket> {
        self.read_ticket(id)
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.read_all_tickets()
    }

    fn exists(&self, id: &TicketId) -> Result<bool> {
        match self.read_ticket(id) {
            Ok(_) => Ok(true),
            Err(ServiceDeskError::TicketNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn find<F>(&self, predicate: F) -> Result<Vec<Ticket>>
    where
        F: Fn(&Ticket) -> bool,
    {
        let tickets = self.read_all_tickets()?;
        Ok(tickets.into_iter().filter(predicate).collect())
    }

    fn count<F>(&self, predicate: F) -> Result<usize>
    where
        F: Fn(&Ticket) -> bool,
    {
        let tickets = self.read_all_tickets()?;
        Ok(tickets.iter().filter(|t| predicate(t)).count())
    }
}

impl ReferenceRepository for FileStorage {
    fn seed_reference(&self, data: &ReferenceData) -> Result<()> {
        self.write_reference(data)
    }

    fn load_reference(&self) -> Result<ReferenceData> {
        self.read_reference()
    }
}

impl SessionRepository for FileStorage {
    fn set_current(&self, id: &UserId) -> Result<()> {
        self.write_session(id)
    }

    fn current(&self) -> Result<Option<UserId>> {
        self.read_session()
    }

    fn clear_current(&self) -> Result<()> {
        self.remove_session()
    }
}
