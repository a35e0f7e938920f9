//! Command Registrar
//!
//! Registers the four moderation commands at startup, replacing any
//! previously registered set.

use tracing::info;
use uuid::Uuid;
use warden_platform::{CommandData, CommandOption};

use crate::platform::{PlatformClient, PlatformError};

/// Register the relay's slash commands for the application.
pub async fn register_commands(
    platform: &PlatformClient,
    application_id: Uuid,
) -> Result<(), PlatformError> {
    platform
        .register_commands(application_id, command_set())
        .await?;
    info!("Moderation commands registered");
    Ok(())
}

/// The relay's full command set.
fn command_set() -> Vec<CommandData> {
    vec![
        CommandData {
            name: "globalban".to_string(),
            description: "Globally ban a user from all servers.".to_string(),
            options: vec![
                CommandOption::user("user", "User to ban"),
                CommandOption::string("reason", "Reason for ban"),
            ],
        },
        CommandData {
            name: "globalkick".to_string(),
            description: "Globally kick a user from all servers.".to_string(),
            options: vec![
                CommandOption::user("user", "User to kick"),
                CommandOption::string("reason", "Reason for kick"),
            ],
        },
        CommandData {
            name: "globalnick".to_string(),
            description: "Globally change a user's nickname across all servers.".to_string(),
            options: vec![
                CommandOption::user("user", "User to change nickname for"),
                CommandOption::string("nickname", "New nickname"),
            ],
        },
        CommandData {
            name: "globalunban".to_string(),
            description: "Globally unban a user from all servers.".to_string(),
            options: vec![CommandOption::user("user", "User to unban")],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::types::ModAction;

    #[test]
    fn registers_all_four_actions() {
        let commands = command_set();
        assert_eq!(commands.len(), 4);
        for command in &commands {
            assert!(ModAction::from_command(&command.name).is_some());
        }
    }

    #[test]
    fn required_options_match_the_schema() {
        let commands = command_set();
        let by_name = |name: &str| commands.iter().find(|c| c.name == name).unwrap();

        let option_names =
            |cmd: &CommandData| cmd.options.iter().map(|o| o.name.clone()).collect::<Vec<_>>();

        assert_eq!(option_names(by_name("globalban")), ["user", "reason"]);
        assert_eq!(option_names(by_name("globalkick")), ["user", "reason"]);
        assert_eq!(option_names(by_name("globalnick")), ["user", "nickname"]);
        assert_eq!(option_names(by_name("globalunban")), ["user"]);
        assert!(commands.iter().flat_map(|c| &c.options).all(|o| o.required));
    }
}
