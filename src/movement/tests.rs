//! Movement domain: tests for the kinematic state machine.

use bevy::prelude::Vec2;

use super::controller::{
    apply_gravity, apply_horizontal_movement, apply_jump, apply_wall_slide, integrate,
    try_start_dash, wall_contact,
};
use super::{
    InputLatch, KinematicState, MotionContext, MovementTuning, PlayerInput, WallContact,
};
use crate::abilities::{Ability, AbilityFlags};
use crate::combat::Stamina;
use crate::physics::Aabb;

fn floor() -> Aabb {
    Aabb::new(0.0, 500.0, 1000.0, 40.0)
}

fn full_stamina() -> Stamina {
    Stamina::new(100.0, 0.5)
}

fn airborne_against(wall: WallContact) -> KinematicState {
    KinematicState {
        velocity: Vec2::new(0.0, 3.0),
        on_ground: false,
        touching_wall: wall,
        ..Default::default()
    }
}

/// Runs the full per-tick order the player uses, minus combat.
fn tick(
    body: &mut Aabb,
    state: &mut KinematicState,
    stamina: &mut Stamina,
    input: &PlayerInput,
    ctx: &MotionContext<'_>,
) {
    state.tick_timers();
    stamina.regenerate();
    integrate(body, state, stamina, input, ctx);
}

// -----------------------------------------------------------------------------
// Gravity
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_clamps_to_terminal_velocity() {
    let tuning = MovementTuning::default();
    let mut state = KinematicState::default();

    for _ in 0..100 {
        apply_gravity(&mut state, &tuning);
    }

    assert_eq!(state.velocity.y, tuning.terminal_velocity);
}

#[test]
fn test_gravity_skipped_on_ground_and_while_dashing() {
    let tuning = MovementTuning::default();

    let mut grounded = KinematicState {
        on_ground: true,
        ..Default::default()
    };
    apply_gravity(&mut grounded, &tuning);
    assert_eq!(grounded.velocity.y, 0.0);

    let mut dashing = KinematicState {
        is_dashing: true,
        velocity: Vec2::new(10.0, 2.0),
        ..Default::default()
    };
    apply_gravity(&mut dashing, &tuning);
    assert_eq!(dashing.velocity.y, 2.0);
}

// -----------------------------------------------------------------------------
// Horizontal intent and dash
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_input_sets_speed_and_facing() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::default();
    let mut stamina = full_stamina();
    let mut state = KinematicState::default();

    let left = PlayerInput {
        left: true,
        ..Default::default()
    };
    apply_horizontal_movement(&mut state, &mut stamina, &left, &abilities, &tuning);
    assert_eq!(state.velocity.x, -tuning.max_speed);
    assert_eq!(state.facing, super::Facing::Left);

    apply_horizontal_movement(
        &mut state,
        &mut stamina,
        &PlayerInput::default(),
        &abilities,
        &tuning,
    );
    assert_eq!(state.velocity.x, 0.0);
    assert_eq!(state.facing, super::Facing::Left);
}

#[test]
fn test_dash_denied_with_insufficient_stamina() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::Dash]);
    let mut stamina = full_stamina();
    stamina.current = 15.0;
    let mut state = KinematicState::default();

    assert!(!try_start_dash(&mut state, &mut stamina, &abilities, &tuning));
    assert!(!state.is_dashing);
    assert_eq!(stamina.current, 15.0);
}

#[test]
fn test_dash_denied_without_ability() {
    let tuning = MovementTuning::default();
    let mut stamina = full_stamina();
    let mut state = KinematicState::default();

    assert!(!try_start_dash(
        &mut state,
        &mut stamina,
        &AbilityFlags::default(),
        &tuning
    ));
    assert_eq!(stamina.current, 100.0);
}

#[test]
fn test_dash_on_cooldown_falls_through_to_input() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::Dash]);
    let mut stamina = full_stamina();
    let mut state = KinematicState {
        dash_cooldown_timer: 5,
        ..Default::default()
    };
    let input = PlayerInput {
        right: true,
        dash_pressed: true,
        ..Default::default()
    };

    apply_horizontal_movement(&mut state, &mut stamina, &input, &abilities, &tuning);

    assert!(!state.is_dashing);
    assert_eq!(state.velocity.x, tuning.max_speed);
    assert_eq!(stamina.current, 100.0);
}

#[test]
fn test_dash_lasts_its_duration_and_costs_once() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::Dash]);
    let obstacles = [floor()];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(100.0, 450.0, 50.0, 50.0);
    let mut state = KinematicState {
        on_ground: true,
        ..Default::default()
    };
    let mut stamina = Stamina::new(100.0, 0.0);

    let dash = PlayerInput {
        dash_pressed: true,
        ..Default::default()
    };
    tick(&mut body, &mut state, &mut stamina, &dash, &ctx);
    assert!(state.is_dashing);
    assert_eq!(stamina.current, 80.0);

    let mut dash_ticks = 1;
    for _ in 0..40 {
        // Holding the dash button again must not restart or re-charge it.
        tick(&mut body, &mut state, &mut stamina, &dash, &ctx);
        if state.velocity.x == tuning.dash_speed {
            dash_ticks += 1;
        } else {
            break;
        }
    }

    assert_eq!(dash_ticks, tuning.dash_duration);
    assert!(!state.is_dashing);
    assert_eq!(stamina.current, 80.0);
    assert!(state.on_ground);
}

// -----------------------------------------------------------------------------
// Jumping
// -----------------------------------------------------------------------------

#[test]
fn test_ground_jump_applies_impulse() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::default();
    let obstacles = [floor()];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(100.0, 450.0, 50.0, 50.0);
    let mut state = KinematicState {
        on_ground: true,
        ..Default::default()
    };
    let jump = PlayerInput {
        jump_pressed: true,
        ..Default::default()
    };

    integrate(&mut body, &mut state, &mut full_stamina(), &jump, &ctx);

    assert_eq!(state.velocity.y, tuning.jump_impulse);
    assert_eq!(body.y, 450.0 + tuning.jump_impulse);
    assert!(!state.on_ground);
}

#[test]
fn test_wall_jump_requires_ability() {
    let tuning = MovementTuning::default();
    let jump = PlayerInput {
        jump_pressed: true,
        right: true,
        ..Default::default()
    };

    let mut locked = airborne_against(WallContact::Right);
    apply_jump(&mut locked, &jump, &AbilityFlags::default(), &tuning);
    assert_eq!(locked.velocity, Vec2::new(0.0, 3.0));

    let mut unlocked = airborne_against(WallContact::Right);
    apply_jump(
        &mut unlocked,
        &jump,
        &AbilityFlags::with(&[Ability::WallJump]),
        &tuning,
    );
    assert_eq!(unlocked.velocity.y, tuning.wall_jump_impulse);
    assert_eq!(unlocked.velocity.x, -tuning.max_speed);
}

#[test]
fn test_wall_jump_pushes_away_from_left_wall() {
    let tuning = MovementTuning::default();
    let jump = PlayerInput {
        jump_pressed: true,
        ..Default::default()
    };
    let mut state = airborne_against(WallContact::Left);

    apply_jump(
        &mut state,
        &jump,
        &AbilityFlags::with(&[Ability::WallJump]),
        &tuning,
    );

    assert_eq!(state.velocity.x, tuning.max_speed);
}

#[test]
fn test_double_jump_consumes_air_jump() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::DoubleJump]);
    let jump = PlayerInput {
        jump_pressed: true,
        ..Default::default()
    };
    let mut state = KinematicState {
        velocity: Vec2::new(0.0, 4.0),
        air_jumps_remaining: 1,
        ..Default::default()
    };

    apply_jump(&mut state, &jump, &abilities, &tuning);
    assert_eq!(state.velocity.y, tuning.jump_impulse);
    assert_eq!(state.air_jumps_remaining, 0);

    state.velocity.y = 4.0;
    apply_jump(&mut state, &jump, &abilities, &tuning);
    assert_eq!(state.velocity.y, 4.0);
}

#[test]
fn test_no_jump_while_dashing() {
    let tuning = MovementTuning::default();
    let jump = PlayerInput {
        jump_pressed: true,
        ..Default::default()
    };
    let mut state = KinematicState {
        on_ground: true,
        is_dashing: true,
        ..Default::default()
    };

    apply_jump(&mut state, &jump, &AbilityFlags::default(), &tuning);

    assert_eq!(state.velocity.y, 0.0);
    assert!(state.on_ground);
}

#[test]
fn test_landing_refills_air_jumps() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::DoubleJump]);
    let obstacles = [floor()];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(100.0, 445.0, 50.0, 50.0);
    let mut state = KinematicState {
        velocity: Vec2::new(0.0, 8.0),
        air_jumps_remaining: 0,
        ..Default::default()
    };

    integrate(
        &mut body,
        &mut state,
        &mut full_stamina(),
        &PlayerInput::default(),
        &ctx,
    );

    assert_eq!(body.y, 450.0);
    assert!(state.on_ground);
    assert_eq!(state.velocity.y, 0.0);
    assert_eq!(state.air_jumps_remaining, tuning.max_air_jumps);
}

// -----------------------------------------------------------------------------
// Wall slide and wall contact
// -----------------------------------------------------------------------------

#[test]
fn test_wall_slide_needs_input_toward_wall() {
    let tuning = MovementTuning::default();

    let mut toward = airborne_against(WallContact::Right);
    toward.velocity.y = 5.0;
    let hold_right = PlayerInput {
        right: true,
        ..Default::default()
    };
    apply_wall_slide(&mut toward, &hold_right, &tuning);
    assert!(toward.is_wall_sliding);
    assert_eq!(toward.velocity.y, tuning.wall_slide_speed);

    let mut away = airborne_against(WallContact::Right);
    away.velocity.y = 5.0;
    let hold_left = PlayerInput {
        left: true,
        ..Default::default()
    };
    apply_wall_slide(&mut away, &hold_left, &tuning);
    assert!(!away.is_wall_sliding);
    assert_eq!(away.velocity.y, 5.0);
}

#[test]
fn test_no_wall_slide_while_rising() {
    let tuning = MovementTuning::default();
    let mut state = airborne_against(WallContact::Right);
    state.velocity.y = tuning.wall_jump_impulse;
    let hold_right = PlayerInput {
        right: true,
        ..Default::default()
    };

    apply_wall_slide(&mut state, &hold_right, &tuning);

    assert!(!state.is_wall_sliding);
    assert_eq!(state.velocity.y, tuning.wall_jump_impulse);
}

#[test]
fn test_wall_slide_never_on_ground() {
    let tuning = MovementTuning::default();
    let mut state = KinematicState {
        on_ground: true,
        touching_wall: WallContact::Left,
        ..Default::default()
    };
    let hold_left = PlayerInput {
        left: true,
        ..Default::default()
    };

    apply_wall_slide(&mut state, &hold_left, &tuning);

    assert!(!state.is_wall_sliding);
}

#[test]
fn test_wall_contact_from_shortfall() {
    assert_eq!(wall_contact(90.0, 90.0, 5.0), WallContact::Right);
    assert_eq!(wall_contact(48.0, 48.0, -5.0), WallContact::Left);
    // Zero-velocity frame after being pushed back to the left.
    assert_eq!(wall_contact(93.0, 90.0, 0.0), WallContact::Right);
    assert_eq!(wall_contact(90.0, 90.0, 0.0), WallContact::None);
}

#[test]
fn test_walking_into_wall_sets_contact_and_zeroes_velocity() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::default();
    let obstacles = [floor(), Aabb::new(140.0, 300.0, 40.0, 200.0)];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(88.0, 450.0, 50.0, 50.0);
    let mut state = KinematicState {
        on_ground: true,
        ..Default::default()
    };
    let hold_right = PlayerInput {
        right: true,
        ..Default::default()
    };

    integrate(&mut body, &mut state, &mut full_stamina(), &hold_right, &ctx);

    assert_eq!(body.x, 90.0);
    assert_eq!(state.touching_wall, WallContact::Right);
    assert_eq!(state.velocity.x, 0.0);
    assert!(state.on_ground);
    assert!(!state.is_wall_sliding);
}

#[test]
fn test_wall_jump_sequence_leaves_the_wall() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::with(&[Ability::WallJump]);
    let obstacles = [Aabb::new(140.0, 0.0, 40.0, 500.0)];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(90.0, 300.0, 50.0, 50.0);
    let mut state = KinematicState::default();
    let mut stamina = full_stamina();

    let hold_right = PlayerInput {
        right: true,
        ..Default::default()
    };
    integrate(&mut body, &mut state, &mut stamina, &hold_right, &ctx);
    assert_eq!(state.touching_wall, WallContact::Right);
    assert_eq!(body.x, 90.0);

    let jump = PlayerInput {
        right: true,
        jump_pressed: true,
        ..Default::default()
    };
    integrate(&mut body, &mut state, &mut stamina, &jump, &ctx);

    assert_eq!(state.velocity, Vec2::new(-tuning.max_speed, tuning.wall_jump_impulse));
    assert_eq!(body.x, 85.0);
    assert_eq!(state.touching_wall, WallContact::None);
    assert!(!state.is_wall_sliding);
}

#[test]
fn test_ceiling_bump_zeroes_vertical_velocity() {
    let tuning = MovementTuning::default();
    let abilities = AbilityFlags::default();
    let obstacles = [Aabb::new(0.0, 0.0, 1000.0, 40.0)];
    let ctx = MotionContext {
        obstacles: &obstacles,
        abilities: &abilities,
        tuning: &tuning,
    };
    let mut body = Aabb::new(100.0, 45.0, 50.0, 50.0);
    let mut state = KinematicState {
        velocity: Vec2::new(0.0, -12.0),
        ..Default::default()
    };

    integrate(
        &mut body,
        &mut state,
        &mut full_stamina(),
        &PlayerInput::default(),
        &ctx,
    );

    assert_eq!(body.y, 40.0);
    assert_eq!(state.velocity.y, 0.0);
}

// -----------------------------------------------------------------------------
// Input latch
// -----------------------------------------------------------------------------

#[test]
fn test_latch_keeps_press_from_an_earlier_frame() {
    let mut latch = InputLatch::default();
    latch.record(PlayerInput {
        jump_pressed: true,
        dash_pressed: true,
        ..Default::default()
    });
    // A later frame before the tick no longer reports the edge.
    latch.record(PlayerInput::default());

    let input = latch.take();
    assert!(input.jump_pressed);
    assert!(input.dash_pressed);
}

#[test]
fn test_latch_take_consumes_edges_and_keeps_held_state() {
    let mut latch = InputLatch::default();
    latch.record(PlayerInput {
        left: true,
        attack_held: true,
        jump_pressed: true,
        attack_pressed: true,
        parry_pressed: true,
        ..Default::default()
    });

    let first = latch.take();
    assert!(first.jump_pressed && first.attack_pressed && first.parry_pressed);

    let second = latch.take();
    assert_eq!(
        second,
        PlayerInput {
            left: true,
            attack_held: true,
            ..Default::default()
        }
    );
}

#[test]
fn test_latch_clear_drops_presses_made_while_paused() {
    let mut latch = InputLatch::default();
    latch.record(PlayerInput {
        right: true,
        jump_pressed: true,
        ..Default::default()
    });

    latch.clear();

    assert_eq!(latch.take(), PlayerInput::default());
}
