//! servicedesk - Role-based IT support ticketing
//!
//! This is the main entry point for the servicedesk CLI application.
//! It handles command-line argument parsing and dispatches to the
//! appropriate command handlers.

use clap::Parser;
use servicedesk::cli::{Cli, Commands, OutputFormatter, TicketCommands, UserCommands, handlers};
use servicedesk::error::Result;
use std::process;

/// Main entry point for the servicedesk CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful messages to users.
fn main() {
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    dispatch_command(cli.command, cli.project.as_deref(), formatter)
}

/// Dispatch to the appropriate command handler
///
/// Each handler is responsible for its own actor resolution and
/// authorization; dispatch only routes.
fn dispatch_command(
    command: Commands,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Init {
            force,
            admin,
            email,
            full_name,
            password,
        } => handlers::handle_init_command(
            handlers::InitParams {
                force,
                admin,
                email,
                full_name,
                password,
            },
            project,
            formatter,
        ),
        Commands::Register {
            username,
            email,
            full_name,
            password,
        } => handlers::handle_register_command(
            handlers::RegisterParams {
                username,
                email,
                full_name,
                password,
            },
            project,
            formatter,
        ),
        Commands::Login { username, password } => {
            handlers::handle_login_command(&username, password, project, formatter)
        },
        Commands::Logout => handlers::handle_logout_command(project, formatter),
        Commands::Whoami => handlers::handle_whoami_command(project, formatter),
        Commands::Dashboard => handlers::handle_dashboard_command(project, formatter),
        Commands::Ticket { command } => dispatch_ticket_command(command, project, formatter),
        Commands::Users { command } => dispatch_users_command(command, project, formatter),
    }
}

fn dispatch_ticket_command(
    command: TicketCommands,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        TicketCommands::New {
            title,
            description,
            category,
            priority,
        } => handlers::handle_ticket_new_command(
            handlers::NewTicketParams {
                title,
                description,
                category,
                priority,
            },
            project,
            formatter,
        ),
        TicketCommands::Show { ticket } => {
            handlers::handle_ticket_show_command(&ticket, project, formatter)
        },
        TicketCommands::Update {
            ticket,
            comment,
            status,
            assign,
        } => handlers::handle_ticket_update_command(
            &ticket,
            handlers::UpdateRequest {
                comment,
                status,
                assignee: assign,
            },
            project,
            formatter,
        ),
    }
}

fn dispatch_users_command(
    command: UserCommands,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        UserCommands::List => handlers::handle_users_list_command(project, formatter),
        UserCommands::Edit {
            user,
            username,
            email,
            full_name,
            role,
        } => handlers::handle_user_edit_command(
            handlers::EditUserParams {
                user,
                username,
                email,
                full_name,
                role,
            },
            project,
            formatter,
        ),
        UserCommands::Delete { user } => {
            handlers::handle_user_delete_command(&user, project, formatter)
        },
    }
}

/// Handle errors and display them to the user
///
/// Shows the user-facing message, any suggestions, and, in JSON mode, a
/// structured error document. Internal details stay out of the output
/// unless debug logging is enabled.
fn handle_error(error: &servicedesk::ServiceDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.user_message(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        // Test that the CLI can be parsed with various commands
        let _cli = Cli::parse_from(["servicedesk", "init"]);
        let _cli = Cli::parse_from(["servicedesk", "dashboard"]);
        let _cli = Cli::parse_from(["servicedesk", "login", "alice"]);
        let _cli = Cli::parse_from(["servicedesk", "ticket", "new", "--title", "x"]);
        let _cli = Cli::parse_from([
            "servicedesk",
            "ticket",
            "update",
            "abc123",
            "--status",
            "2",
            "--comment",
            "on it",
        ]);
        let _cli = Cli::parse_from(["servicedesk", "users", "delete", "carol"]);
    }
}
