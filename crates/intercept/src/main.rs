//! Missile-intercept demo
//!
//! Drives the strike_sim resolver over a small missile raid: missiles
//! close on bunkers tick by tick while a scoreboard observer tallies every
//! destruction broadcast through the event dispatcher.

mod config;
mod scenario;
mod scoreboard;

use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use strike_sim::prelude::*;

use crate::config::RangeConfig;
use crate::scenario::Scenario;
use crate::scoreboard::Scoreboard;

fn main() -> ExitCode {
    strike_sim::foundation::logging::init();

    let config = RangeConfig::load_or_default();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RangeConfig) -> Result<(), SimError> {
    log::info!(
        "starting intercept run: {} missiles vs {} bunkers ({} decoys), seed {}",
        config.scenario.missile_count,
        config.scenario.bunker_count,
        config.scenario.decoy_count,
        config.scenario.seed
    );

    let resolver = CollisionResolver::new(&config.sim)?;
    let mut rng = StdRng::seed_from_u64(config.scenario.seed);
    let mut scenario = Scenario::build(&config.scenario, &mut rng)?;

    let dispatcher = EventDispatcher::new();
    let scoreboard = Rc::new(RefCell::new(Scoreboard::default()));
    dispatcher.attach(scoreboard.clone());

    for tick in 0..config.scenario.ticks {
        scenario.advance();
        resolver.update(&mut scenario.entities, &mut rng, Some(&dispatcher));

        let (missiles, bunkers, decoys) = scenario.census();
        log::debug!("tick {tick}: {missiles} missiles, {bunkers} bunkers, {decoys} decoys alive");
        if missiles == 0 {
            log::info!("all missiles resolved after {} ticks", tick + 1);
            break;
        }
    }

    let scoreboard = scoreboard.borrow();
    let (_, bunkers, _) = scenario.census();
    log::info!(
        "raid over: {} bunkers destroyed, {} surviving, {} missiles expended, {} decoys lost",
        scoreboard.targets_destroyed,
        bunkers,
        scoreboard.projectiles_expended,
        scoreboard.mobiles_destroyed
    );

    Ok(())
}
