use super::*;

/// Tests replaying a guild snapshot.
///
/// Expected: online-like members added, offline members not added
#[tokio::test]
async fn applies_guild_snapshot() {
    let state = PresenceState::new();
    let service = PresenceService::new(&state);

    let guild = GuildPresences {
        guild_id: "900".to_string(),
        presences: vec![
            PresenceUpdate::new("111", PresenceStatus::Online),
            PresenceUpdate::new("222", PresenceStatus::Idle),
            PresenceUpdate::new("333", PresenceStatus::Offline),
        ],
    };

    let applied = service.apply_guild(&guild).await;

    assert_eq!(applied, 3);
    assert!(state.is_online("111").await);
    assert!(state.is_online("222").await);
    assert!(!state.is_online("333").await);
}

/// Tests that a guild snapshot overrides earlier live events.
///
/// Expected: user reported offline in the snapshot is removed
#[tokio::test]
async fn snapshot_overrides_previous_status() {
    let state = PresenceState::new();
    let service = PresenceService::new(&state);

    service
        .update(&PresenceUpdate::new("111", PresenceStatus::Online))
        .await;

    let guild = GuildPresences {
        guild_id: "900".to_string(),
        presences: vec![PresenceUpdate::new("111", PresenceStatus::Offline)],
    };
    service.apply_guild(&guild).await;

    assert!(!state.is_online("111").await);
}

/// Tests that an empty snapshot leaves state untouched.
///
/// Expected: zero applied, existing members kept
#[tokio::test]
async fn empty_snapshot_keeps_state() {
    let state = PresenceState::new();
    let service = PresenceService::new(&state);

    service
        .update(&PresenceUpdate::new("111", PresenceStatus::Online))
        .await;

    let applied = service.apply_guild(&GuildPresences::default()).await;

    assert_eq!(applied, 0);
    assert!(state.is_online("111").await);
}
