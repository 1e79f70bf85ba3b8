//! Test factory for creating Serenity Presence objects.
//!
//! Presences arrive in `PRESENCE_UPDATE` events and inside guild snapshots.

use serenity::all::Presence;

/// Creates a test Serenity Presence for a single user.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `guild_id` - Guild the presence was reported in, if any
/// - `status` - Discord wire status: `online`, `idle`, `dnd`, `invisible` or `offline`
///
/// # Returns
/// - `Presence` - A valid Serenity Presence struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::presence::create_test_presence;
///
/// let presence = create_test_presence(123456789, Some(987654321), "dnd");
/// assert_eq!(presence.user.id.get(), 123456789);
/// ```
pub fn create_test_presence(user_id: u64, guild_id: Option<u64>, status: &str) -> Presence {
    serde_json::from_value(serde_json::json!({
        "user": { "id": user_id.to_string() },
        "guild_id": guild_id.map(|id| id.to_string()),
        "status": status,
        "activities": [],
        "client_status": null,
    }))
    .expect("Failed to create test presence - invalid JSON structure")
}
