//! World domain: systems that build the world and drive its tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::StrikeOutcome;
use crate::content::{ContentRegistry, GameplayDefaults};
use crate::core::{GameConfig, GameState};
use crate::movement::InputLatch;
use crate::world::events::LevelEnteredEvent;
use crate::world::sim::SimWorld;

pub(crate) fn setup_world(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    defaults: Res<GameplayDefaults>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut level_events: MessageWriter<LevelEnteredEvent>,
) {
    let seed = config.seed();
    match SimWorld::new(&registry, &defaults, seed) {
        Ok(world) => {
            info!("World ready with rng seed {}", seed);
            level_events.write(LevelEnteredEvent {
                level_id: world.level.id.clone(),
            });
            commands.insert_resource(world);
            next_state.set(GameState::Playing);
        }
        Err(e) => error!("Cannot build world: {}", e),
    }
}

/// Advance the simulation by one fixed tick with the latched input.
pub(crate) fn run_tick(
    mut world: ResMut<SimWorld>,
    registry: Res<ContentRegistry>,
    mut latch: ResMut<InputLatch>,
    mut level_events: MessageWriter<LevelEnteredEvent>,
) {
    let input = latch.take();
    let report = world.tick(&input, &registry);

    for outcome in &report.player_hits {
        match outcome {
            StrikeOutcome::Hit(damage) => debug!(
                "Player took {} damage ({} left)",
                damage, world.player.health.current
            ),
            StrikeOutcome::Parried => info!("Parried!"),
            StrikeOutcome::Ignored => {}
        }
    }

    if let Some(level_id) = report.entered_level {
        level_events.write(LevelEnteredEvent { level_id });
    }

    if report.player_died {
        warn!("Player fell in '{}'", world.level.id);
        match world.respawn(&registry) {
            Ok(()) => {
                level_events.write(LevelEnteredEvent {
                    level_id: world.level.id.clone(),
                });
            }
            Err(e) => error!("Respawn failed: {}", e),
        }
    }
}

pub(crate) fn interact_with_npc(keyboard: Res<ButtonInput<KeyCode>>, world: Res<SimWorld>) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }
    if let Some(npc) = world.nearby_npc() {
        match &npc.dialog_key {
            Some(key) => info!("{} [{}]", npc.name, key),
            None => info!("{} has nothing to say", npc.name),
        }
    }
}
