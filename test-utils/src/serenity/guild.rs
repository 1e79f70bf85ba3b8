//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are what Discord sends in `GUILD_CREATE`, including the presences of
//! members that are not offline. These factories build valid Guild objects by
//! deserializing JSON, simulating what Discord's gateway would return.

use serenity::all::Guild;

/// Creates a test Serenity Guild with no presences.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(guild_id: u64, name: &str) -> Guild {
    create_test_guild_with_presences(guild_id, name, &[])
}

/// Creates a test Serenity Guild carrying the given member presences.
///
/// Each presence is a `(user_id, status)` pair where status is one of Discord's
/// wire values: `online`, `idle`, `dnd`, `invisible` or `offline`.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `presences` - Member presences included in the snapshot
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::guild::create_test_guild_with_presences;
///
/// let guild = create_test_guild_with_presences(
///     123456789,
///     "Test Guild",
///     &[(111111111, "online"), (222222222, "idle")],
/// );
/// assert_eq!(guild.presences.len(), 2);
/// ```
pub fn create_test_guild_with_presences(
    guild_id: u64,
    name: &str,
    presences: &[(u64, &str)],
) -> Guild {
    let presences: Vec<serde_json::Value> = presences
        .iter()
        .map(|(user_id, status)| {
            serde_json::json!({
                "user": { "id": user_id.to_string() },
                "guild_id": guild_id.to_string(),
                "status": status,
                "activities": [],
                "client_status": null,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": [],
        "threads": [],
        "presences": presences,
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
