//! Movement domain: keyboard sampling into the tick's logical input.

use bevy::prelude::*;

use crate::movement::PlayerInput;

/// Input gathered across render frames until the next fixed tick consumes it.
///
/// Presses are OR-ed so a tap shorter than a tick is not lost, and cleared
/// once a tick has seen them.
#[derive(Resource, Debug, Default)]
pub struct InputLatch {
    pending: PlayerInput,
}

impl InputLatch {
    pub fn record(&mut self, sample: PlayerInput) {
        let pending = &mut self.pending;
        pending.left = sample.left;
        pending.right = sample.right;
        pending.attack_held = sample.attack_held;
        pending.jump_pressed |= sample.jump_pressed;
        pending.dash_pressed |= sample.dash_pressed;
        pending.attack_pressed |= sample.attack_pressed;
        pending.parry_pressed |= sample.parry_pressed;
    }

    /// Input for this tick; edges are consumed, held state carries over.
    pub fn take(&mut self) -> PlayerInput {
        let input = self.pending;
        self.pending.jump_pressed = false;
        self.pending.dash_pressed = false;
        self.pending.attack_pressed = false;
        self.pending.parry_pressed = false;
        input
    }

    /// Forget everything, held state included.
    pub fn clear(&mut self) {
        self.pending = PlayerInput::default();
    }
}

/// Keys pressed while gameplay is paused never reach a tick.
pub(crate) fn drop_paused_input(mut latch: ResMut<InputLatch>) {
    latch.clear();
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut latch: ResMut<InputLatch>) {
    let sample = PlayerInput {
        left: keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight),
        jump_pressed: keyboard.just_pressed(KeyCode::Space),
        dash_pressed: keyboard.just_pressed(KeyCode::KeyC)
            || keyboard.just_pressed(KeyCode::ShiftLeft),
        attack_pressed: keyboard.just_pressed(KeyCode::KeyZ),
        attack_held: keyboard.pressed(KeyCode::KeyZ),
        parry_pressed: keyboard.just_pressed(KeyCode::KeyX),
    };
    latch.record(sample);
}
