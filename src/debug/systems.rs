//! Debug domain: hotkeys and periodic state logging.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::Ability;
use crate::content::ContentRegistry;
use crate::debug::state::DebugState;
use crate::world::{LevelEnteredEvent, SimWorld};

/// Handle Ctrl+key shortcuts for debug actions
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut world: ResMut<SimWorld>,
    registry: Res<ContentRegistry>,
    mut level_events: MessageWriter<LevelEnteredEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+I: Toggle invincibility
    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        info!("[DEBUG] Invincibility {}", on_off(debug_state.invincible));
    }

    // Ctrl+L: Toggle periodic state logging
    if keyboard.just_pressed(KeyCode::KeyL) {
        debug_state.log_state = !debug_state.log_state;
        info!("[DEBUG] State logging {}", on_off(debug_state.log_state));
    }

    // Ctrl+H: Full heal
    if keyboard.just_pressed(KeyCode::KeyH) {
        let player = &mut world.player;
        player.health.current = player.health.max;
        player.stamina.current = player.stamina.max;
        info!("[DEBUG] Full heal");
    }

    // Ctrl+G: Grant every ability
    if keyboard.just_pressed(KeyCode::KeyG) {
        for ability in Ability::ALL {
            world.abilities.unlock(ability);
        }
        info!("[DEBUG] All abilities granted");
    }

    // Ctrl+1..9: Warp to the nth level by id order
    let digits = [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
    ];
    let Some(index) = digits.iter().position(|key| keyboard.just_pressed(*key)) else {
        return;
    };
    let mut level_ids: Vec<&String> = registry.levels.keys().collect();
    level_ids.sort();
    let Some(level_id) = level_ids.get(index) else {
        return;
    };
    match world.enter_level(&registry, level_id, None) {
        Ok(()) => {
            info!("[DEBUG] Warped to {}", level_id);
            level_events.write(LevelEnteredEvent {
                level_id: level_id.to_string(),
            });
        }
        Err(e) => warn!("[DEBUG] Warp failed: {}", e),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

/// Keep the player topped up while invincible
pub(crate) fn apply_invincibility(debug_state: Res<DebugState>, mut world: ResMut<SimWorld>) {
    if !debug_state.invincible {
        return;
    }
    let player = &mut world.player;
    player.combat.invulnerable = true;
    player.combat.invulnerable_timer = player.combat.invulnerable_timer.max(2);
    player.health.current = player.health.max;
}

pub(crate) fn log_player_state(debug_state: Res<DebugState>, world: Res<SimWorld>) {
    if !debug_state.should_log(world.tick_count()) {
        return;
    }
    let s = world.snapshot();
    debug!(
        "[DEBUG] tick {} level {} pos ({:.1}, {:.1}) ground {} wall {:?} dash {} slide {} hp {:.0}/{:.0} sp {:.1}/{:.0} actors {}",
        world.tick_count(),
        world.level.id,
        s.bbox.x,
        s.bbox.y,
        s.on_ground,
        s.touching_wall,
        s.is_dashing,
        s.is_wall_sliding,
        s.health,
        s.max_health,
        s.stamina,
        s.max_stamina,
        world.actors.len(),
    );
}
