//! Confirmation Handler
//!
//! Handles the pending card's button presses. Cancel clears the card and
//! performs nothing. Confirm claims the card, runs the fan-out, optionally
//! notifies the target user, and replaces the card with the result. Any
//! failure of the confirmed flow is caught here, logged, and answered with
//! the generic error card.

use tracing::{debug, error, warn};
use warden_platform::{ComponentInteraction, CreateMessageRequest, InteractionResponse};

use crate::api::AppState;
use crate::platform::PlatformError;

use super::token::{ActionToken, CANCEL_ID, CONFIRM_PREFIX};
use super::{cards, fanout, is_staff};

/// Handle a component interaction on a pending action card.
pub async fn handle(state: &AppState, ev: ComponentInteraction) -> Result<(), PlatformError> {
    if ev.custom_id != CANCEL_ID && !ev.custom_id.starts_with(CONFIRM_PREFIX) {
        debug!(custom_id = %ev.custom_id, "Ignoring unrelated component");
        return Ok(());
    }

    if !is_staff(&ev.member_roles, &state.config.staff_role_ids) {
        state
            .platform
            .respond(
                ev.interaction_id,
                &InteractionResponse::ephemeral(
                    "🚫 You are not authorized to confirm or cancel actions.",
                ),
            )
            .await?;
        return Ok(());
    }

    if ev.custom_id == CANCEL_ID {
        state
            .platform
            .respond(
                ev.interaction_id,
                &InteractionResponse::UpdateMessage {
                    content: "❌ Action has been cancelled.".to_string(),
                    embeds: vec![],
                    components: vec![],
                },
            )
            .await?;
        return Ok(());
    }

    let token = match ActionToken::decode(&ev.custom_id) {
        Ok(token) => token,
        Err(err) => {
            warn!(message_id = %ev.message_id, error = %err, "Undecodable confirm token");
            respond_error_card(state, &ev).await;
            return Ok(());
        }
    };

    if !state.confirmations.begin(ev.message_id) {
        state
            .platform
            .respond(
                ev.interaction_id,
                &InteractionResponse::ephemeral("⏳ This action is already being processed."),
            )
            .await?;
        return Ok(());
    }

    if let Err(err) = run_confirmed(state, &ev, &token).await {
        error!(
            action = %token.action,
            target_user_id = %token.target_user_id,
            confirmed_by = %ev.user_id,
            error = %err,
            "Confirmed action failed"
        );
        respond_error_card(state, &ev).await;
    }

    Ok(())
}

/// The confirmed path: fan-out, optional notification, result card.
async fn run_confirmed(
    state: &AppState,
    ev: &ComponentInteraction,
    token: &ActionToken,
) -> Result<(), PlatformError> {
    let outcomes = fanout::execute(&state.platform, &state.config.target_guild_ids, token).await;

    if state.config.notify_target_user {
        notify_target(state, token).await;
    }

    state
        .platform
        .respond(
            ev.interaction_id,
            &InteractionResponse::UpdateMessage {
                content: format!("✅ {} completed.", token.action.display_name()),
                embeds: vec![cards::result_card(token, ev.user_id, &outcomes)],
                components: vec![],
            },
        )
        .await?;

    Ok(())
}

/// Best-effort direct message to the target user; failures are logged and
/// never affect the confirmation's outcome.
async fn notify_target(state: &AppState, token: &ActionToken) {
    let delivery: Result<(), PlatformError> = async {
        let dm = state.platform.open_dm(token.target_user_id).await?;
        state
            .platform
            .create_message(
                dm.channel_id,
                &CreateMessageRequest {
                    content: cards::notify_message(token),
                    ..CreateMessageRequest::default()
                },
            )
            .await?;
        Ok(())
    }
    .await;

    if let Err(err) = delivery {
        warn!(
            user_id = %token.target_user_id,
            error = %err,
            "Failed to deliver direct notification"
        );
    }
}

/// Replace the card with the generic error card, swallowing a second failure.
async fn respond_error_card(state: &AppState, ev: &ComponentInteraction) {
    let response = InteractionResponse::UpdateMessage {
        content: "❌ Something went wrong. Please try again later.".to_string(),
        embeds: vec![cards::error_card()],
        components: vec![],
    };
    if let Err(err) = state.platform.respond(ev.interaction_id, &response).await {
        error!(message_id = %ev.message_id, error = %err, "Failed to post error card");
    }
}
