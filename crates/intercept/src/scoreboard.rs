//! Scoreboard observer
//!
//! Tallies destruction events broadcast by the resolver, split by entity
//! kind, without touching the entity list.

use strike_sim::prelude::*;

/// Running destruction tally
#[derive(Debug, Default)]
pub struct Scoreboard {
    /// Bunkers (targets) destroyed
    pub targets_destroyed: u32,

    /// Missiles expended, whether they hit or missed
    pub projectiles_expended: u32,

    /// Decoys caught in mutual destruction
    pub mobiles_destroyed: u32,
}

impl Observer for Scoreboard {
    fn update(&mut self, event: &Event<'_>) {
        if event.kind != EVENT_ENTITY_DESTROYED {
            return;
        }
        let Some(destruction) = event.payload_as::<Destruction>() else {
            return;
        };
        match destruction.kind {
            EntityKind::Target => self.targets_destroyed += 1,
            EntityKind::Projectile { .. } => self.projectiles_expended += 1,
            EntityKind::Mobile => self.mobiles_destroyed += 1,
        }
    }
}
