use super::{CategoryId, Comment, PriorityId, Role, StatusId, Ticket, TicketId, User, UserId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    description: Option<String>,
    category_id: Option<CategoryId>,
    priority_id: Option<PriorityId>,
    status_id: Option<StatusId>,
    requester_id: Option<UserId>,
    assigned_to: Option<UserId>,
    created_at: Option<DateTime<Utc>>,
    comments: Vec<Comment>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category
    #[must_use]
    pub const fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority_id: PriorityId) -> Self {
        self.priority_id = Some(priority_id);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status_id: StatusId) -> Self {
        self.status_id = Some(status_id);
        self
    }

    /// Set the requester
    #[must_use]
    pub const fn requester(mut self, requester_id: UserId) -> Self {
        self.requester_id = Some(requester_id);
        self
    }

    /// Set the assigned technician
    #[must_use]
    pub const fn assigned_to(mut self, user_id: UserId) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category_id: self.category_id.unwrap_or(CategoryId(1)),
            priority_id: self.priority_id.unwrap_or(PriorityId(1)),
            status_id: self.status_id.unwrap_or(StatusId(1)),
            requester_id: self.requester_id.unwrap_or_default(),
            assigned_to: self.assigned_to,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            comments: self.comments,
        }
    }
}

/// Builder for creating User instances
#[derive(Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    username: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
    role: Option<Role>,
    full_name: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl UserBuilder {
    /// Create a new user builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user ID
    #[must_use]
    pub const fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the stored password hash
    #[must_use]
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    /// Set the role
    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the full name
    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the user
    pub fn build(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password_hash: self.password_hash.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
