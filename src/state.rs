//! Shared in-memory presence state.
//!
//! `PresenceState` owns the set of users currently considered online and the time
//! each user was last reminded. Both live behind a single lock so presence updates
//! and message handling are linearized. The state is created once at startup and
//! handed to the bot handler; tests create a fresh one per case.
//!
//! Nothing is persisted. Entries are only as fresh as the last gateway event.

use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::{
    presence::{PresenceStatus, PresenceUpdate},
    reminder::ReminderEligibility,
};

#[derive(Default)]
struct PresenceStateInner {
    /// Users whose last presence event was not offline.
    online_users: HashSet<String>,
    /// Time of the last successfully sent reminder per user. Absent means never.
    last_notified: HashMap<String, DateTime<Utc>>,
    /// Users with a reminder reply currently being sent.
    pending_reminders: HashSet<String>,
}

impl PresenceStateInner {
    /// The only place membership of `online_users` changes.
    fn apply(&mut self, user_id: &str, status: PresenceStatus) {
        if status.is_online() {
            if !self.online_users.contains(user_id) {
                self.online_users.insert(user_id.to_string());
            }
        } else {
            self.online_users.remove(user_id);
        }
    }
}

/// Presence set and reminder bookkeeping shared across event handlers.
///
/// Cloning is cheap and every clone refers to the same state.
#[derive(Clone, Default)]
pub struct PresenceState {
    inner: Arc<RwLock<PresenceStateInner>>,
}

impl PresenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `status` as the latest status of `user_id`.
    ///
    /// Idempotent: repeating the same update leaves the state unchanged.
    pub async fn set_status(&self, user_id: &str, status: PresenceStatus) {
        self.inner.write().await.apply(user_id, status);
    }

    /// Applies a batch of updates under a single lock acquisition.
    ///
    /// Updates are applied in order, so a later entry for the same user wins.
    ///
    /// # Returns
    /// - `usize` - Number of updates applied
    pub async fn set_statuses<'a, I>(&self, updates: I) -> usize
    where
        I: IntoIterator<Item = &'a PresenceUpdate>,
    {
        let mut inner = self.inner.write().await;
        let mut applied = 0;
        for update in updates {
            inner.apply(&update.user_id, update.status);
            applied += 1;
        }
        applied
    }

    pub async fn is_online(&self, user_id: &str) -> bool {
        self.inner.read().await.online_users.contains(user_id)
    }

    pub async fn online_count(&self) -> usize {
        self.inner.read().await.online_users.len()
    }

    #[cfg(test)]
    pub async fn last_notified(&self, user_id: &str) -> Option<DateTime<Utc>> {
        self.inner.read().await.last_notified.get(user_id).copied()
    }

    /// Checks whether `user_id` may be reminded at `now` and claims the reminder if so.
    ///
    /// On `Eligible` the user is marked in flight until `complete_reminder` is
    /// called, so concurrent messages from the same user cannot trigger a second
    /// reply. A user that was never reminded is always past the cooldown.
    ///
    /// # Arguments
    /// - `user_id` - Author of the incoming message
    /// - `now` - Current time
    /// - `cooldown` - Minimum time between reminders
    ///
    /// # Returns
    /// - `ReminderEligibility` - Decision for this message
    pub async fn try_claim_reminder(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        cooldown: Duration,
    ) -> ReminderEligibility {
        let mut inner = self.inner.write().await;

        if inner.online_users.contains(user_id) {
            return ReminderEligibility::Online;
        }

        if let Some(last) = inner.last_notified.get(user_id) {
            let elapsed = now - *last;
            if elapsed < cooldown {
                return ReminderEligibility::CoolingDown {
                    remaining: cooldown - elapsed,
                };
            }
        }

        if !inner.pending_reminders.insert(user_id.to_string()) {
            return ReminderEligibility::InFlight;
        }

        ReminderEligibility::Eligible
    }

    /// Releases a reminder claimed with `try_claim_reminder`.
    ///
    /// # Arguments
    /// - `user_id` - User the reminder was claimed for
    /// - `sent_at` - Time the reply was sent, or `None` if sending failed. The
    ///   last-notified time is only updated on success.
    pub async fn complete_reminder(&self, user_id: &str, sent_at: Option<DateTime<Utc>>) {
        let mut inner = self.inner.write().await;
        inner.pending_reminders.remove(user_id);
        if let Some(sent_at) = sent_at {
            inner.last_notified.insert(user_id.to_string(), sent_at);
        }
    }

    /// Snapshot of the presence set.
    #[cfg(test)]
    pub async fn online_users(&self) -> HashSet<String> {
        self.inner.read().await.online_users.clone()
    }

    /// Snapshot of the last-notified map.
    #[cfg(test)]
    pub async fn last_notified_all(&self) -> HashMap<String, DateTime<Utc>> {
        self.inner.read().await.last_notified.clone()
    }
}
