//! Command-line interface definitions

use clap::{Parser, Subcommand};

/// Role-based IT support ticketing
#[derive(Parser)]
#[command(name = "servicedesk", version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory containing the ticket store
    #[arg(short, long, global = true, env = "SERVICEDESK_PROJECT")]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a ticket store in the current directory
    Init {
        /// Reinitialize even if a store already exists
        #[arg(long)]
        force: bool,

        /// Provision a first admin account with this username
        #[arg(long)]
        admin: Option<String>,

        /// Email for the admin account
        #[arg(long)]
        email: Option<String>,

        /// Full name for the admin account
        #[arg(long)]
        full_name: Option<String>,

        /// Password for the admin account (prompted if omitted)
        #[arg(long, env = "SERVICEDESK_ADMIN_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account (new accounts are always employees)
    Register {
        /// Username for the new account
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Full name
        #[arg(long)]
        full_name: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and bind the session to an account
    Login {
        /// Username to log in as
        username: String,

        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out, clearing the session
    Logout,

    /// Show the logged-in account
    Whoami,

    /// List the tickets visible to the logged-in account
    Dashboard,

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        command: TicketCommands,
    },

    /// Account administration (admin only)
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// File a new ticket
    New {
        /// Ticket title
        #[arg(long)]
        title: Option<String>,

        /// Problem description
        #[arg(long)]
        description: Option<String>,

        /// Category (name or id)
        #[arg(long)]
        category: Option<String>,

        /// Priority (name or id)
        #[arg(long)]
        priority: Option<String>,
    },

    /// Show a ticket and its comment thread
    Show {
        /// Ticket id (full or unique prefix)
        ticket: String,
    },

    /// Update a ticket: comment, status, and assignment in one submission
    ///
    /// Each part is gated by role independently; parts the actor may not
    /// perform are skipped, the rest still apply.
    Update {
        /// Ticket id (full or unique prefix)
        ticket: String,

        /// Append a comment to the thread
        #[arg(long)]
        comment: Option<String>,

        /// Set the status (name or id)
        #[arg(long)]
        status: Option<String>,

        /// Assign to a technician or admin (username or id)
        #[arg(long)]
        assign: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all accounts
    List,

    /// Edit an account
    Edit {
        /// Account to edit (username or id)
        user: String,

        /// New username
        #[arg(long)]
        username: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New full name
        #[arg(long)]
        full_name: Option<String>,

        /// New role (EMPLOYEE, TECHNICIAN, or ADMIN)
        #[arg(long)]
        role: Option<String>,
    },

    /// Delete an account
    Delete {
        /// Account to delete (username or id)
        user: String,
    },
}
