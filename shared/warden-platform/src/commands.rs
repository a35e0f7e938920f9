//! Slash Command Definitions
//!
//! Request types for registering commands with the platform
//! (`PUT /api/applications/{id}/commands` replaces the full command set).

use serde::{Deserialize, Serialize};

/// Command option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandOptionType {
    /// String input.
    String,
    /// Integer input.
    Integer,
    /// Boolean input.
    Boolean,
    /// User mention.
    User,
    /// Channel mention.
    Channel,
    /// Role mention.
    Role,
}

/// Command option definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name.
    pub name: String,
    /// Option description.
    pub description: String,
    /// Option type.
    #[serde(rename = "type")]
    pub option_type: CommandOptionType,
    /// Whether this option is required.
    pub required: bool,
}

impl CommandOption {
    /// A required user option.
    pub fn user(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            option_type: CommandOptionType::User,
            required: true,
        }
    }

    /// A required string option.
    pub fn string(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            option_type: CommandOptionType::String,
            required: true,
        }
    }
}

/// Single command definition (name 1-32 chars, description 1-100 chars).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandData {
    /// Command name.
    pub name: String,
    /// Command description.
    pub description: String,
    /// Command options/parameters.
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

/// Request body for registering commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCommandsRequest {
    /// Commands to register; replaces all previously registered commands.
    pub commands: Vec<CommandData>,
}
