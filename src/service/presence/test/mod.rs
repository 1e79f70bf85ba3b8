use crate::{
    model::{
        event::ReadySnapshot,
        presence::{GuildPresences, PresenceStatus, PresenceUpdate},
    },
    service::presence::PresenceService,
    state::PresenceState,
};

mod apply_guild;
