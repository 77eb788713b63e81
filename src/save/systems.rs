//! Save domain: quick save and quick load keys.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::content::ContentRegistry;
use crate::core::GameConfig;
use crate::save::data::{load_progress, save_progress};
use crate::world::{LevelEnteredEvent, SimWorld};

/// F5 writes the save file.
pub(crate) fn quick_save(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    world: Res<SimWorld>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    match save_progress(&world, Path::new(&config.save_path)) {
        Ok(data) => info!(
            "Saved to {} ({} abilities, {} pickups)",
            config.save_path,
            data.abilities.len(),
            data.collected.len()
        ),
        Err(e) => error!("{}", e),
    }
}

/// F9 restores the save file into the running world.
pub(crate) fn quick_load(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    registry: Res<ContentRegistry>,
    mut world: ResMut<SimWorld>,
    mut level_events: MessageWriter<LevelEnteredEvent>,
) {
    if !keyboard.just_pressed(KeyCode::F9) {
        return;
    }
    let result =
        load_progress(Path::new(&config.save_path)).and_then(|data| data.apply(&mut world, &registry));
    match result {
        Ok(()) => {
            info!("Loaded {}", config.save_path);
            level_events.write(LevelEnteredEvent {
                level_id: world.level.id.clone(),
            });
        }
        Err(e) => warn!("Could not load {}: {}", config.save_path, e),
    }
}
