//! # Strike Sim
//!
//! A small tick-driven simulation core for projectile impact resolution.
//!
//! ## Features
//!
//! - **Collision Resolver**: all-pairs proximity testing between live
//!   projectiles and other mobiles, with probabilistic kills against targets
//! - **Event Dispatcher**: synchronous broadcast observer bus for
//!   destruction notifications
//! - **Deterministic**: outcomes are reproducible given entity insertion
//!   order and a seeded random source
//! - **File Configuration**: TOML and RON config loading with fail-fast
//!   validation
//!
//! ## Quick Start
//!
//! ```rust
//! use strike_sim::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! fn main() -> Result<(), SimError> {
//!     let mut entities = vec![
//!         Entity::projectile(EntityId::new(0), Vec2::new(0.0, 0.0), 1.0)?,
//!         Entity::target(EntityId::new(1), Vec2::new(30.0, 40.0)),
//!     ];
//!
//!     let resolver = CollisionResolver::new(&SimConfig::default())?;
//!     let mut rng = StdRng::seed_from_u64(7);
//!     resolver.update(&mut entities, &mut rng, None);
//!
//!     assert!(!entities[1].alive);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod events;
pub mod foundation;
pub mod sim;

mod error;

pub use error::SimError;

/// Common imports for simulation users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SimConfig},
        events::{Event, EventDispatcher, Observer, SharedObserver},
        foundation::math::{distance, Vec2},
        sim::{
            CollisionResolver, Destruction, Entity, EntityId, EntityKind, EVENT_ENTITY_DESTROYED,
        },
        SimError,
    };
}
