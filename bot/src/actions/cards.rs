//! Card Rendering
//!
//! Pure embed construction for the three card variants: the red pending
//! (request) card, the green result card, and the generic error card. The
//! "New Nickname" field appears only for the nickname action.

use chrono::Utc;
use uuid::Uuid;
use warden_platform::{Embed, EmbedField, EmbedFooter};

use super::fanout::{tally, GuildOutcome, Outcome};
use super::token::ActionToken;
use super::types::ModAction;

const COLOR_PENDING: u32 = 0xFF_0000;
const COLOR_CONFIRMED: u32 = 0x00_FF00;

/// Render the pending card posted to the log channel.
pub fn request_card(token: &ActionToken, staff_id: Uuid) -> Embed {
    let action = token.action;
    let mut fields = common_fields(token, staff_id);
    fields.push(EmbedField::new(
        "🔄 Action",
        action.display_name().to_string(),
        false,
    ));
    push_nickname_field(&mut fields, token);

    Embed {
        title: Some(format!("{} Requested", action.display_name())),
        description: Some(format!(
            "A **{}** action has been requested for <@{}>.",
            action.display_name(),
            token.target_user_id
        )),
        fields,
        color: Some(COLOR_PENDING),
        footer: Some(EmbedFooter {
            text: format!("Requested by {staff_id}"),
            icon_url: None,
        }),
        thumbnail_url: None,
        timestamp: Some(Utc::now().to_rfc3339()),
    }
}

/// Render the result card shown after a confirmed fan-out.
pub fn result_card(token: &ActionToken, staff_id: Uuid, outcomes: &[GuildOutcome]) -> Embed {
    let action = token.action;
    let mut fields = common_fields(token, staff_id);
    fields.push(EmbedField::new(
        "🔄 Action Performed",
        format!("**{}**", action.display_name()),
        false,
    ));
    push_nickname_field(&mut fields, token);
    fields.push(EmbedField::new("🌐 Guilds", outcome_summary(outcomes), false));

    Embed {
        title: Some(format!("{} - Action Confirmed", action.display_name())),
        description: Some("Action has been completed.".to_string()),
        fields,
        color: Some(COLOR_CONFIRMED),
        footer: Some(EmbedFooter {
            text: format!("Executed by {staff_id}"),
            icon_url: None,
        }),
        thumbnail_url: None,
        timestamp: Some(Utc::now().to_rfc3339()),
    }
}

/// Render the generic error card used when a confirmed flow fails wholesale.
pub fn error_card() -> Embed {
    Embed {
        title: Some("Action Failed".to_string()),
        description: Some("Something went wrong. Please try again later.".to_string()),
        color: Some(COLOR_PENDING),
        timestamp: Some(Utc::now().to_rfc3339()),
        ..Embed::default()
    }
}

/// Direct-message body sent to the target user after a confirmed action.
pub fn notify_message(token: &ActionToken) -> String {
    match token.action {
        ModAction::GlobalBan => format!(
            "You have been globally banned from all servers for the following reason: {}.",
            token.reason
        ),
        ModAction::GlobalKick => format!(
            "You have been globally kicked from all servers for the following reason: {}.",
            token.reason
        ),
        ModAction::GlobalNick => format!(
            "Your nickname has been globally changed across all servers to: {}.",
            token.nickname.as_deref().unwrap_or("No nickname set")
        ),
        ModAction::GlobalUnban => {
            "You have been globally unbanned from all servers.".to_string()
        }
    }
}

fn common_fields(token: &ActionToken, staff_id: Uuid) -> Vec<EmbedField> {
    vec![
        EmbedField::new("👤 Target User", format!("<@{}>", token.target_user_id), true),
        EmbedField::new("🛡️ Staff Member", format!("<@{staff_id}>"), true),
        EmbedField::new("📅 Date Issued", Utc::now().to_rfc3339(), true),
        EmbedField::new("📝 Reason", token.reason.clone(), false),
    ]
}

fn push_nickname_field(fields: &mut Vec<EmbedField>, token: &ActionToken) {
    if token.action == ModAction::GlobalNick {
        fields.push(EmbedField::new(
            "🆕 New Nickname",
            token
                .nickname
                .clone()
                .unwrap_or_else(|| "Not provided".to_string()),
            false,
        ));
    }
}

/// One line per guild plus a tally header.
fn outcome_summary(outcomes: &[GuildOutcome]) -> String {
    let counts = tally(outcomes);
    let mut summary = format!(
        "{} applied, {} skipped, {} failed",
        counts.applied, counts.skipped, counts.failed
    );

    for entry in outcomes {
        match &entry.outcome {
            Outcome::Applied => {}
            Outcome::Skipped(reason) => {
                summary.push_str(&format!("\n⏭️ `{}`: skipped ({reason})", entry.guild_id));
            }
            Outcome::Failed(error) => {
                summary.push_str(&format!("\n❌ `{}`: failed ({error})", entry.guild_id));
            }
        }
    }

    summary
}
