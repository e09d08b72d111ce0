//! Simulation core: entity model and per-tick collision resolution

mod entity;
mod resolver;

pub use entity::{Entity, EntityId, EntityKind};
pub use resolver::{CollisionResolver, Destruction, EVENT_ENTITY_DESTROYED};
