//! Request Handler
//!
//! Turns a `command.invoked` event into a pending action card in the log
//! channel. Fails closed: wrong guild or missing staff role gets an
//! ephemeral refusal and nothing is posted.

use tracing::{debug, info};
use uuid::Uuid;
use warden_platform::{
    ActionRow, Button, ButtonStyle, CommandInvoked, CreateMessageRequest, InteractionResponse,
};

use crate::api::AppState;
use crate::platform::PlatformError;

use super::token::{ActionToken, CANCEL_ID};
use super::types::ModAction;
use super::{cards, is_staff};

/// Handle a slash-command invocation.
pub async fn handle(state: &AppState, ev: CommandInvoked) -> Result<(), PlatformError> {
    let Some(action) = ModAction::from_command(&ev.command_name) else {
        debug!(command = %ev.command_name, "Ignoring unknown command");
        return Ok(());
    };

    if ev.guild_id != Some(state.config.control_guild_id) {
        state
            .platform
            .respond(
                ev.interaction_id,
                &InteractionResponse::ephemeral(
                    "🚫 This command can only be used in the control guild.",
                ),
            )
            .await?;
        return Ok(());
    }

    if !is_staff(&ev.member_roles, &state.config.staff_role_ids) {
        state
            .platform
            .respond(
                ev.interaction_id,
                &InteractionResponse::ephemeral(
                    "🚫 You do not have permission to use this command.",
                ),
            )
            .await?;
        return Ok(());
    }

    let token = match build_token(action, &ev) {
        Ok(token) => token,
        Err(problem) => {
            state
                .platform
                .respond(ev.interaction_id, &InteractionResponse::ephemeral(problem))
                .await?;
            return Ok(());
        }
    };

    let custom_id = match token.encode() {
        Ok(id) => id,
        Err(err) => {
            state
                .platform
                .respond(
                    ev.interaction_id,
                    &InteractionResponse::ephemeral(format!("🚫 {err}.")),
                )
                .await?;
            return Ok(());
        }
    };

    let card = cards::request_card(&token, ev.user_id);
    let components = vec![ActionRow {
        buttons: vec![
            Button {
                custom_id,
                label: "✅ Confirm".to_string(),
                style: ButtonStyle::Danger,
            },
            Button {
                custom_id: CANCEL_ID.to_string(),
                label: "❌ Cancel".to_string(),
                style: ButtonStyle::Secondary,
            },
        ],
    }];

    // No retry: a failed post propagates and fails this delivery.
    let posted = state
        .platform
        .create_message(
            state.config.log_channel_id,
            &CreateMessageRequest {
                content: staff_mentions(&state.config.staff_role_ids),
                embeds: vec![card],
                components,
            },
        )
        .await?;

    info!(
        action = %token.action,
        target_user_id = %token.target_user_id,
        requested_by = %ev.user_id,
        card_message_id = %posted.id,
        "Pending action card posted"
    );

    state
        .platform
        .respond(
            ev.interaction_id,
            &InteractionResponse::ephemeral(format!(
                "✅ {} requested for <@{}>. Waiting for confirmation in <#{}>.",
                token.action.display_name(),
                token.target_user_id,
                state.config.log_channel_id
            )),
        )
        .await?;

    Ok(())
}

/// Assemble the typed action payload from the invocation's options.
fn build_token(action: ModAction, ev: &CommandInvoked) -> Result<ActionToken, &'static str> {
    let target_user_id: Uuid = ev
        .options
        .get("user")
        .and_then(|v| v.parse().ok())
        .ok_or("🚫 Missing or invalid user option.")?;

    let nickname = ev.options.get("nickname").cloned().filter(|n| !n.is_empty());
    if action == ModAction::GlobalNick && nickname.is_none() {
        return Err("🚫 A nickname is required.");
    }

    let reason = ev
        .options
        .get("reason")
        .cloned()
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "No reason provided.".to_string());

    Ok(ActionToken {
        action,
        target_user_id,
        reason,
        nickname,
    })
}

/// Role mentions posted alongside the card as a notification.
fn staff_mentions(staff_role_ids: &[Uuid]) -> String {
    staff_role_ids
        .iter()
        .map(|role| format!("<@&{role}>"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn invocation(command: &str, options: &[(&str, &str)]) -> CommandInvoked {
        CommandInvoked {
            interaction_id: Uuid::new_v4(),
            command_name: command.to_string(),
            guild_id: Some(Uuid::new_v4()),
            channel_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            member_roles: vec![],
            options: options
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn token_defaults_missing_reason() {
        let user = Uuid::new_v4().to_string();
        let ev = invocation("globalunban", &[("user", &user)]);
        let token = build_token(ModAction::GlobalUnban, &ev).unwrap();
        assert_eq!(token.reason, "No reason provided.");
        assert_eq!(token.nickname, None);
    }

    #[test]
    fn token_requires_a_target_user() {
        let ev = invocation("globalban", &[("reason", "spam")]);
        assert!(build_token(ModAction::GlobalBan, &ev).is_err());

        let ev = invocation("globalban", &[("user", "not-a-uuid"), ("reason", "spam")]);
        assert!(build_token(ModAction::GlobalBan, &ev).is_err());
    }

    #[test]
    fn nickname_action_requires_a_nickname() {
        let user = Uuid::new_v4().to_string();
        let ev = invocation("globalnick", &[("user", &user)]);
        assert!(build_token(ModAction::GlobalNick, &ev).is_err());

        let ev = invocation("globalnick", &[("user", &user), ("nickname", "Bob")]);
        let token = build_token(ModAction::GlobalNick, &ev).unwrap();
        assert_eq!(token.nickname.as_deref(), Some("Bob"));
    }

    #[test]
    fn mentions_join_all_staff_roles() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(staff_mentions(&[a, b]), format!("<@&{a}> <@&{b}>"));
        assert_eq!(staff_mentions(&[]), "");
    }
}
