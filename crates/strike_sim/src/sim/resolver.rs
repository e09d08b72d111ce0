//! Per-tick collision resolution
//!
//! The resolver performs an all-pairs proximity test between live
//! projectiles and every other live mobile. No spatial partitioning: at the
//! entity counts this core targets, the O(P * E) pass is cheaper than
//! maintaining an acceleration structure.
//!
//! Determinism contract: given the same entity insertion order and a seeded
//! random source, every tick resolves identically. When several candidates
//! sit within radius of one projectile, candidate-list order decides which
//! one is resolved first; the projectile is consumed by the first impact
//! attempt against a target.

use log::{debug, info, trace};
use rand::Rng;

use super::entity::{Entity, EntityId, EntityKind};
use crate::config::SimConfig;
use crate::events::EventDispatcher;
use crate::foundation::math::distance;
use crate::SimError;

/// Event kind broadcast for every alive-to-dead transition
pub const EVENT_ENTITY_DESTROYED: &str = "entity_destroyed";

/// Payload published with [`EVENT_ENTITY_DESTROYED`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destruction {
    /// The entity that was destroyed
    pub entity: EntityId,
    /// Role the entity had when destroyed
    pub kind: EntityKind,
}

/// Resolves projectile impacts against an externally-owned entity list
///
/// The resolver never creates or removes entities; its only mutation is
/// flipping `alive` flags during its own [`CollisionResolver::update`]
/// pass. Single-threaded and tick-driven: the caller serializes access to
/// the entity list.
pub struct CollisionResolver {
    impact_radius: f32,
    projectile_collision_enabled: bool,
}

impl CollisionResolver {
    /// Create a resolver from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidImpactRadius`] if the configured radius is
    /// not a finite positive value.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            impact_radius: config.impact_radius,
            projectile_collision_enabled: config.projectile_collision_enabled,
        })
    }

    /// Get the configured impact radius
    pub fn impact_radius(&self) -> f32 {
        self.impact_radius
    }

    /// Run one simulation tick over the shared entity list
    ///
    /// Filters live projectiles and live candidates in insertion order,
    /// tests every projectile/candidate pair, and resolves encounters
    /// within the impact radius. A projectile consumed mid-tick is skipped
    /// for its remaining candidates, and dead candidates are never
    /// re-resolved.
    ///
    /// When `events` is supplied, every destruction is broadcast as an
    /// [`EVENT_ENTITY_DESTROYED`] event carrying a [`Destruction`] payload.
    pub fn update<R: Rng>(
        &self,
        entities: &mut [Entity],
        rng: &mut R,
        events: Option<&EventDispatcher>,
    ) {
        // Read-only partition pass, preserving insertion order.
        let projectiles: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.alive && e.is_projectile())
            .map(|(i, _)| i)
            .collect();
        let candidates: Vec<usize> = entities
            .iter()
            .enumerate()
            .filter(|(_, e)| e.alive)
            .map(|(i, _)| i)
            .collect();

        for &p in &projectiles {
            for &c in &candidates {
                if c == p {
                    continue;
                }
                // A projectile consumed earlier this tick must not resolve again.
                if !entities[p].alive {
                    break;
                }
                if !entities[c].alive {
                    continue;
                }

                let separation = distance(entities[p].position, entities[c].position);
                if separation <= self.impact_radius {
                    self.handle_collision(entities, p, c, separation, rng, events);
                }
            }
        }
    }

    /// Resolve a single projectile/candidate encounter
    fn handle_collision<R: Rng>(
        &self,
        entities: &mut [Entity],
        p: usize,
        c: usize,
        separation: f32,
        rng: &mut R,
        events: Option<&EventDispatcher>,
    ) {
        debug!(
            "impact attempt: projectile {} vs entity {} at distance {:.1}",
            entities[p].id.id(),
            entities[c].id.id(),
            separation
        );

        match entities[c].kind {
            EntityKind::Target => {
                // kill_probability is validated at construction, so this
                // branch can only be reached with a value in [0, 1].
                let kill_probability = entities[p]
                    .kill_probability()
                    .unwrap_or_default();
                let sample: f32 = rng.gen();
                if sample < kill_probability {
                    info!(
                        "projectile {} destroyed target {}",
                        entities[p].id.id(),
                        entities[c].id.id()
                    );
                    Self::destroy(entities, c, events);
                } else {
                    info!(
                        "projectile {} missed target {}",
                        entities[p].id.id(),
                        entities[c].id.id()
                    );
                }
                // Consumed on any impact attempt against a target, win or lose.
                Self::destroy(entities, p, events);
            }
            _ if self.projectile_collision_enabled => {
                info!(
                    "projectile {} and mobile {} destroyed each other",
                    entities[p].id.id(),
                    entities[c].id.id()
                );
                Self::destroy(entities, p, events);
                Self::destroy(entities, c, events);
            }
            _ => {
                trace!(
                    "projectile {} ignored mobile {} (projectile collisions disabled)",
                    entities[p].id.id(),
                    entities[c].id.id()
                );
            }
        }
    }

    /// Flip an entity dead and broadcast the destruction
    fn destroy(entities: &mut [Entity], index: usize, events: Option<&EventDispatcher>) {
        entities[index].kill();
        if let Some(dispatcher) = events {
            let payload = Destruction {
                entity: entities[index].id,
                kind: entities[index].kind,
            };
            dispatcher.notify(EVENT_ENTITY_DESTROYED, &payload);
        }
    }
}
