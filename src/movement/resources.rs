//! Movement domain: tuning and input resources.

use serde::{Deserialize, Serialize};

/// Movement tuning in pixels per tick (and pixels per tick squared for
/// gravity). Negative vertical values point up.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub body_width: f32,
    pub body_height: f32,
    pub max_speed: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_impulse: f32,
    pub wall_jump_impulse: f32,
    pub wall_slide_speed: f32,
    pub dash_speed: f32,
    pub dash_duration: u32,
    pub dash_cooldown: u32,
    pub dash_cost: f32,
    /// Height of the probe strip used for ground detection
    pub ground_probe: f32,
    /// Air jumps granted by the double jump ability
    pub max_air_jumps: u8,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            body_width: 50.0,
            body_height: 50.0,
            max_speed: 5.0,
            gravity: 0.5,
            terminal_velocity: 10.0,
            jump_impulse: -12.0,
            wall_jump_impulse: -10.0,
            wall_slide_speed: 1.0,
            dash_speed: 10.0,
            dash_duration: 15,
            dash_cooldown: 30,
            dash_cost: 20.0,
            ground_probe: 1.0,
            max_air_jumps: 1,
        }
    }
}

/// Logical input for one tick.
///
/// Directions and `attack_held` are held state. The `*_pressed` fields are
/// edges: true only on the tick the button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
    pub attack_held: bool,
    pub parry_pressed: bool,
}

impl PlayerInput {
    pub fn axis(&self) -> f32 {
        let mut x = 0.0;
        if self.left {
            x -= 1.0;
        }
        if self.right {
            x += 1.0;
        }
        x
    }
}
