//! Core domain: camera setup and the pause key.

use bevy::prelude::*;

use crate::core::resources::GameplayPaused;

const MENU_PAUSE: &str = "menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut gameplay_paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        if gameplay_paused.toggle(MENU_PAUSE) {
            info!("Paused");
        } else {
            info!("Resumed");
        }
    }
}
