//! Presence tracking service.
//!
//! Presence information reaches the bot from three places: the snapshot taken
//! once the bot is ready, the snapshot sent when a guild becomes available, and
//! live `PRESENCE_UPDATE` events. All of them go through `PresenceState`'s status
//! update, so there is exactly one code path that mutates the presence set.

use dioxus_logger::tracing;

use crate::{
    model::{
        event::ReadySnapshot,
        presence::{GuildPresences, PresenceUpdate},
    },
    state::PresenceState,
};

#[cfg(test)]
mod test;

pub struct PresenceService<'a> {
    state: &'a PresenceState,
}

impl<'a> PresenceService<'a> {
    pub fn new(state: &'a PresenceState) -> Self {
        Self { state }
    }

    /// Applies a single live presence change.
    pub async fn update(&self, update: &PresenceUpdate) {
        tracing::debug!(
            "Presence update for user {}: {:?}",
            update.user_id,
            update.status
        );

        self.state.set_status(&update.user_id, update.status).await;
    }

    /// Replays the presences included in a guild snapshot.
    ///
    /// # Returns
    /// - `usize` - Number of presences applied
    pub async fn apply_guild(&self, guild: &GuildPresences) -> usize {
        let applied = self.state.set_statuses(&guild.presences).await;

        tracing::debug!(
            "Applied {} presences from guild {}",
            applied,
            guild.guild_id
        );

        applied
    }

    /// Replays the presences of every guild known at ready time.
    ///
    /// # Returns
    /// - `usize` - Number of presences applied across all guilds
    pub async fn apply_ready(&self, snapshot: &ReadySnapshot) -> usize {
        let mut applied = 0;
        for guild in &snapshot.guilds {
            applied += self.apply_guild(guild).await;
        }

        tracing::info!(
            "Ready snapshot applied: {} presences across {} guilds, {} users online",
            applied,
            snapshot.guilds.len(),
            self.state.online_count().await
        );

        applied
    }
}
