use serenity::all::{Guild, OnlineStatus, Presence};

/// A user's reported availability in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Invisible,
    Offline,
}

impl PresenceStatus {
    /// Whether this status counts as present.
    ///
    /// Everything except `Offline` is online-like.
    pub fn is_online(self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl From<OnlineStatus> for PresenceStatus {
    fn from(status: OnlineStatus) -> Self {
        match status {
            OnlineStatus::Offline => Self::Offline,
            OnlineStatus::Invisible => Self::Invisible,
            OnlineStatus::Idle => Self::Idle,
            OnlineStatus::DoNotDisturb => Self::DoNotDisturb,
            OnlineStatus::Online => Self::Online,
            // Statuses added by Discord later are treated as present
            _ => Self::Online,
        }
    }
}

/// Presence change for a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceUpdate {
    pub user_id: String,
    pub status: PresenceStatus,
}

impl PresenceUpdate {
    pub fn new(user_id: impl Into<String>, status: PresenceStatus) -> Self {
        Self {
            user_id: user_id.into(),
            status,
        }
    }
}

impl From<&Presence> for PresenceUpdate {
    fn from(presence: &Presence) -> Self {
        Self {
            user_id: presence.user.id.to_string(),
            status: presence.status.into(),
        }
    }
}

/// Presences of one guild as included in a guild snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildPresences {
    pub guild_id: String,
    pub presences: Vec<PresenceUpdate>,
}

impl From<&Guild> for GuildPresences {
    fn from(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.to_string(),
            presences: guild.presences.values().map(PresenceUpdate::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{
        create_test_guild, create_test_guild_with_presences, create_test_presence,
    };

    #[test]
    fn only_offline_is_absent() {
        assert!(PresenceStatus::Online.is_online());
        assert!(PresenceStatus::Idle.is_online());
        assert!(PresenceStatus::DoNotDisturb.is_online());
        assert!(PresenceStatus::Invisible.is_online());
        assert!(!PresenceStatus::Offline.is_online());
    }

    /// Tests converting a Serenity presence for each wire status.
    ///
    /// Expected: user ID carried as a string and status mapped one to one
    #[test]
    fn converts_serenity_presence() {
        let cases = [
            ("online", PresenceStatus::Online),
            ("idle", PresenceStatus::Idle),
            ("dnd", PresenceStatus::DoNotDisturb),
            ("invisible", PresenceStatus::Invisible),
            ("offline", PresenceStatus::Offline),
        ];

        for (wire, expected) in cases {
            let presence = create_test_presence(123456789, Some(987654321), wire);
            let update = PresenceUpdate::from(&presence);

            assert_eq!(update.user_id, "123456789");
            assert_eq!(update.status, expected, "wire status {wire}");
        }
    }

    #[test]
    fn converts_guild_presences() {
        let guild = create_test_guild_with_presences(
            987654321,
            "Test Guild",
            &[(111111111, "online"), (222222222, "idle")],
        );

        let snapshot = GuildPresences::from(&guild);
        let mut presences = snapshot.presences.clone();
        presences.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        assert_eq!(snapshot.guild_id, "987654321");
        assert_eq!(
            presences,
            vec![
                PresenceUpdate::new("111111111", PresenceStatus::Online),
                PresenceUpdate::new("222222222", PresenceStatus::Idle),
            ]
        );
    }

    #[test]
    fn converts_guild_without_presences() {
        let guild = create_test_guild(987654321, "Quiet Guild");

        assert!(GuildPresences::from(&guild).presences.is_empty());
    }
}
