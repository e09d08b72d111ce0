//! Scenario construction and per-tick movement
//!
//! The entity list is owned here, by the driver; strike_sim only flips
//! alive flags during resolution. Movement is deliberately simple: each
//! missile closes on its assigned bunker in a straight line, decoys loiter
//! where they spawned.

use rand::Rng;
use strike_sim::prelude::*;

use crate::config::ScenarioConfig;

/// A built scenario: the entity list plus each missile's assigned bunker
pub struct Scenario {
    /// All simulation entities, missiles first, then bunkers, then decoys
    pub entities: Vec<Entity>,
    /// Missile entity index -> assigned bunker entity index
    assignments: Vec<(usize, usize)>,
    missile_speed: f32,
}

impl Scenario {
    /// Build the initial entity list from the scenario configuration
    ///
    /// # Errors
    ///
    /// Returns [`SimError::KillProbabilityOutOfRange`] if the configured
    /// missile kill probability is invalid.
    pub fn build<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Result<Self, SimError> {
        let mut entities = Vec::new();
        let mut next_id = 0u32;
        let mut id = || {
            let id = EntityId::new(next_id);
            next_id += 1;
            id
        };

        // Missiles spawn on a distant line north of the defended area.
        for i in 0..config.missile_count {
            let spread = i as f32 * 1500.0;
            let jitter: f32 = rng.gen_range(-250.0..250.0);
            let position = Vec2::new(-6000.0 + spread + jitter, 30_000.0);
            entities.push(Entity::projectile(
                id(),
                position,
                config.missile_kill_probability,
            )?);
        }

        // Bunkers sit on a line at the origin.
        for i in 0..config.bunker_count {
            entities.push(Entity::target(id(), Vec2::new(i as f32 * 4000.0, 0.0)));
        }

        // Decoys loiter inside the engagement zone.
        for _ in 0..config.decoy_count {
            let x: f32 = rng.gen_range(-5000.0..15_000.0);
            let y: f32 = rng.gen_range(2000.0..20_000.0);
            entities.push(Entity::mobile(id(), Vec2::new(x, y)));
        }

        // Round-robin missile-to-bunker assignment.
        let missile_count = config.missile_count as usize;
        let bunker_count = config.bunker_count as usize;
        let assignments = if bunker_count == 0 {
            Vec::new()
        } else {
            (0..missile_count)
                .map(|m| (m, missile_count + (m % bunker_count)))
                .collect()
        };

        Ok(Self {
            entities,
            assignments,
            missile_speed: config.missile_speed,
        })
    }

    /// Advance every live missile toward its assigned bunker by one tick
    pub fn advance(&mut self) {
        for &(missile, bunker) in &self.assignments {
            if !self.entities[missile].alive {
                continue;
            }
            let to_bunker = self.entities[bunker].position - self.entities[missile].position;
            let range = to_bunker.magnitude();
            if range > f32::EPSILON {
                let step = self.missile_speed.min(range);
                self.entities[missile].position += to_bunker / range * step;
            }
        }
    }

    /// Count live entities of each kind: (missiles, bunkers, decoys)
    pub fn census(&self) -> (usize, usize, usize) {
        let mut missiles = 0;
        let mut bunkers = 0;
        let mut decoys = 0;
        for entity in self.entities.iter().filter(|e| e.alive) {
            match entity.kind {
                EntityKind::Projectile { .. } => missiles += 1,
                EntityKind::Target => bunkers += 1,
                EntityKind::Mobile => decoys += 1,
            }
        }
        (missiles, bunkers, decoys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_build_produces_configured_counts() {
        let config = ScenarioConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let scenario = Scenario::build(&config, &mut rng).unwrap();

        let (missiles, bunkers, decoys) = scenario.census();
        assert_eq!(missiles, config.missile_count as usize);
        assert_eq!(bunkers, config.bunker_count as usize);
        assert_eq!(decoys, config.decoy_count as usize);
    }

    #[test]
    fn test_build_rejects_bad_kill_probability() {
        let config = ScenarioConfig {
            missile_kill_probability: 1.5,
            ..ScenarioConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Scenario::build(&config, &mut rng).is_err());
    }

    #[test]
    fn test_advance_closes_on_bunkers() {
        let config = ScenarioConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut scenario = Scenario::build(&config, &mut rng).unwrap();

        let bunker = config.missile_count as usize;
        let before = distance(
            scenario.entities[0].position,
            scenario.entities[bunker].position,
        );
        scenario.advance();
        let after = distance(
            scenario.entities[0].position,
            scenario.entities[bunker].position,
        );
        assert!(after < before);
    }
}
