//! Entity model
//!
//! Entities are owned by the external simulation loop; the resolver only
//! reads positions and flags and may flip `alive` to false. The
//! projectile/target/mobile discriminator is a tagged variant so resolver
//! branch logic stays exhaustive.

use crate::foundation::math::Vec2;
use crate::SimError;

/// Entity identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(u32);

impl EntityId {
    /// Create a new entity ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn id(self) -> u32 {
        self.0
    }
}

/// Entity role discriminator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// Generic mobile with no special impact behavior
    Mobile,

    /// Strikes other mobiles and is consumed on impact
    Projectile {
        /// Chance in [0, 1] that an impact against a target succeeds
        kill_probability: f32,
    },

    /// Destructible objective eligible for probabilistic kills
    Target,
}

/// A live simulation object
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Stable identifier assigned by the owning simulation
    pub id: EntityId,

    /// Position in 2-D world space
    pub position: Vec2,

    /// Whether the entity is still live; the resolver only transitions
    /// this from true to false
    pub alive: bool,

    /// Role discriminator
    pub kind: EntityKind,
}

impl Entity {
    /// Create a generic mobile entity
    pub fn mobile(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            position,
            alive: true,
            kind: EntityKind::Mobile,
        }
    }

    /// Create a target entity
    pub fn target(id: EntityId, position: Vec2) -> Self {
        Self {
            id,
            position,
            alive: true,
            kind: EntityKind::Target,
        }
    }

    /// Create a projectile entity
    ///
    /// # Errors
    ///
    /// Returns [`SimError::KillProbabilityOutOfRange`] if `kill_probability`
    /// is outside [0, 1] or not finite. Rejected eagerly so configuration
    /// mistakes surface at construction, not mid-simulation.
    pub fn projectile(id: EntityId, position: Vec2, kill_probability: f32) -> Result<Self, SimError> {
        if !kill_probability.is_finite() || !(0.0..=1.0).contains(&kill_probability) {
            return Err(SimError::KillProbabilityOutOfRange(kill_probability));
        }
        Ok(Self {
            id,
            position,
            alive: true,
            kind: EntityKind::Projectile { kill_probability },
        })
    }

    /// Check whether this entity is a live projectile
    pub fn is_projectile(&self) -> bool {
        matches!(self.kind, EntityKind::Projectile { .. })
    }

    /// Check whether this entity is a target
    pub fn is_target(&self) -> bool {
        matches!(self.kind, EntityKind::Target)
    }

    /// Get the kill probability if this entity is a projectile
    pub fn kill_probability(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Projectile { kill_probability } => Some(kill_probability),
            _ => None,
        }
    }

    /// Mark this entity dead
    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}
