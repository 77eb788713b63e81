//! Movement domain: per-tick kinematic steps for the player.
//!
//! Each step reads flags written by the ones before it, so `integrate` must
//! call them in order: gravity, horizontal intent (dash), jump, wall slide,
//! then resolution and contact sensing.

use bevy::prelude::*;

use crate::abilities::{Ability, AbilityFlags};
use crate::combat::Stamina;
use crate::movement::{Facing, KinematicState, MovementTuning, PlayerInput, WallContact};
use crate::physics::{self, Aabb, Obstacle, SweepResult};

/// Read-only inputs shared by every step of a tick.
#[derive(Debug, Clone, Copy)]
pub struct MotionContext<'a> {
    pub obstacles: &'a [Obstacle],
    pub abilities: &'a AbilityFlags,
    pub tuning: &'a MovementTuning,
}

pub fn apply_gravity(state: &mut KinematicState, tuning: &MovementTuning) {
    if state.on_ground || state.is_dashing {
        return;
    }
    state.velocity.y = (state.velocity.y + tuning.gravity).min(tuning.terminal_velocity);
}

/// Begin a dash if the ability is owned, no dash is running or cooling down,
/// and stamina covers the cost. Stamina is only spent on success.
pub fn try_start_dash(
    state: &mut KinematicState,
    stamina: &mut Stamina,
    abilities: &AbilityFlags,
    tuning: &MovementTuning,
) -> bool {
    if !abilities.has(Ability::Dash) || state.is_dashing || state.dash_cooldown_timer > 0 {
        return false;
    }
    if !stamina.try_spend(tuning.dash_cost) {
        return false;
    }
    state.is_dashing = true;
    state.dash_timer = tuning.dash_duration;
    state.dash_cooldown_timer = tuning.dash_cooldown;
    debug!("Dash started facing {:?}", state.facing);
    true
}

pub fn apply_horizontal_movement(
    state: &mut KinematicState,
    stamina: &mut Stamina,
    input: &PlayerInput,
    abilities: &AbilityFlags,
    tuning: &MovementTuning,
) {
    state.velocity.x = 0.0;

    if !state.is_dashing {
        if let Some(facing) = Facing::from_sign(input.axis()) {
            state.facing = facing;
        }
        if input.dash_pressed {
            try_start_dash(state, stamina, abilities, tuning);
        }
    }

    state.velocity.x = if state.is_dashing {
        state.facing.sign() * tuning.dash_speed
    } else {
        input.axis() * tuning.max_speed
    };
}

pub fn apply_jump(
    state: &mut KinematicState,
    input: &PlayerInput,
    abilities: &AbilityFlags,
    tuning: &MovementTuning,
) {
    if !input.jump_pressed || state.is_dashing {
        return;
    }

    if state.on_ground {
        state.velocity.y = tuning.jump_impulse;
        state.on_ground = false;
    } else if abilities.has(Ability::WallJump) && state.touching_wall.is_touching() {
        state.velocity.y = tuning.wall_jump_impulse;
        state.velocity.x = state.touching_wall.away_sign() * tuning.max_speed;
        debug!("Wall jump off {:?}", state.touching_wall);
    } else if abilities.has(Ability::DoubleJump) && state.air_jumps_remaining > 0 {
        state.velocity.y = tuning.jump_impulse;
        state.air_jumps_remaining -= 1;
        debug!("Air jump: {} remaining", state.air_jumps_remaining);
    }
}

pub fn apply_wall_slide(state: &mut KinematicState, input: &PlayerInput, tuning: &MovementTuning) {
    let holding_toward_wall = match state.touching_wall {
        WallContact::Left => input.left,
        WallContact::Right => input.right,
        WallContact::None => false,
    };

    // Rising along a wall (including the tick a wall jump fires) is not a slide.
    state.is_wall_sliding = holding_toward_wall
        && state.is_airborne()
        && !state.is_dashing
        && state.velocity.y >= 0.0;
    if state.is_wall_sliding {
        state.velocity.y = state.velocity.y.min(tuning.wall_slide_speed);
    }
}

/// Which wall stopped the horizontal move, judged by how far the box fell
/// short of the requested displacement from its previous X.
pub fn wall_contact(previous_x: f32, resolved_x: f32, requested_dx: f32) -> WallContact {
    let shortfall = requested_dx - (resolved_x - previous_x);
    if shortfall > 0.0 {
        WallContact::Right
    } else if shortfall < 0.0 {
        WallContact::Left
    } else {
        WallContact::None
    }
}

/// Move the body, then rebuild ground and wall contact from where it ended.
pub fn resolve_motion(
    body: &mut Aabb,
    state: &mut KinematicState,
    ctx: &MotionContext<'_>,
) -> SweepResult {
    let previous_x = body.x;
    let result = physics::resolve(body, state.velocity, ctx.obstacles);
    body.x = result.x;
    body.y = result.y;

    let was_on_ground = state.on_ground;
    state.on_ground = physics::is_grounded(body, ctx.obstacles, ctx.tuning.ground_probe);
    if state.on_ground && !was_on_ground {
        state.air_jumps_remaining = ctx.tuning.max_air_jumps;
        debug!("Landed at ({}, {})", body.x, body.y);
    }

    state.touching_wall = if result.collided_x {
        wall_contact(previous_x, result.x, state.velocity.x)
    } else {
        WallContact::None
    };

    if result.collided_x {
        state.velocity.x = 0.0;
    }
    if result.collided_y {
        state.velocity.y = 0.0;
    }

    result
}

/// Gravity through contact sensing for one tick. Timers and stamina
/// regeneration are the caller's job and must already have run.
pub fn integrate(
    body: &mut Aabb,
    state: &mut KinematicState,
    stamina: &mut Stamina,
    input: &PlayerInput,
    ctx: &MotionContext<'_>,
) -> SweepResult {
    apply_gravity(state, ctx.tuning);
    apply_horizontal_movement(state, stamina, input, ctx.abilities, ctx.tuning);
    apply_jump(state, input, ctx.abilities, ctx.tuning);
    apply_wall_slide(state, input, ctx.tuning);
    resolve_motion(body, state, ctx)
}
