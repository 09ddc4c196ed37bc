//! Core domain types and the authorization policy

pub mod builders;
pub mod policy;
mod reference;
mod role;
mod ticket;
mod user;

pub use builders::{TicketBuilder, UserBuilder};
pub use reference::{
    Category, CategoryId, Priority, PriorityId, ReferenceData, Status, StatusId,
};
pub use role::Role;
pub use ticket::{Comment, CommentId, Ticket, TicketId};
pub use user::{User, UserId};
