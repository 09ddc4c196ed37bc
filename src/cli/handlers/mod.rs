//! Command handlers
//!
//! Each handler resolves the session actor explicitly and consults the
//! authorization policy before touching storage; there is no ambient
//! current-user state anywhere.

pub mod auth;
pub mod common;
pub mod dashboard;
pub mod init;
pub mod ticket;
pub mod users;

pub use auth::{
    RegisterParams, handle_login_command, handle_logout_command, handle_register_command,
    handle_whoami_command,
};
pub use common::HandlerContext;
pub use dashboard::{handle_dashboard_command, visible_tickets};
pub use init::{InitParams, handle_init_command};
pub use ticket::{
    NewTicketParams, UpdateReport, UpdateRequest, apply_ticket_update,
    handle_ticket_new_command, handle_ticket_show_command, handle_ticket_update_command,
};
pub use users::{
    EditUserParams, handle_user_delete_command, handle_user_edit_command,
    handle_users_list_command,
};
