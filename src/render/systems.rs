//! Render domain: mirror the simulation into sprites.
//!
//! The simulation uses screen-style coordinates (origin top-left, y down);
//! Bevy's world has y up, so every rect is flipped on the way out.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::abilities::CollectibleKind;
use crate::actors::Actor;
use crate::core::GameConfig;
use crate::physics::Aabb;
use crate::render::components::{ActorSprite, CollectibleSprite, LevelSprite, PlayerSprite};
use crate::world::{LevelEnteredEvent, SimWorld};

const TILE_Z: f32 = 0.0;
const PICKUP_Z: f32 = 1.0;
const ACTOR_Z: f32 = 2.0;
const PLAYER_Z: f32 = 3.0;

/// Center of `rect` in Bevy world space.
pub fn to_translation(rect: &Aabb, z: f32) -> Vec3 {
    let center = rect.center();
    Vec3::new(center.x, -center.y, z)
}

fn rect_sprite(rect: &Aabb, color: Color, z: f32) -> (Sprite, Transform) {
    (
        Sprite {
            color,
            custom_size: Some(Vec2::new(rect.w, rect.h)),
            ..default()
        },
        Transform::from_translation(to_translation(rect, z)),
    )
}

fn collectible_color(kind: &CollectibleKind) -> Color {
    match kind {
        CollectibleKind::Health(_) => Color::srgb(0.2, 0.9, 0.3),
        CollectibleKind::Ability(_) => Color::srgb(1.0, 0.85, 0.2),
    }
}

pub(crate) fn spawn_player_sprite(mut commands: Commands, world: Res<SimWorld>) {
    let appearance = world.player.appearance();
    commands.spawn((
        PlayerSprite,
        rect_sprite(&appearance.rect, appearance.color, PLAYER_Z),
    ));
}

/// Rebuild tiles, transition zones and pickups whenever a level is entered.
pub(crate) fn rebuild_level(
    mut commands: Commands,
    mut events: MessageReader<LevelEnteredEvent>,
    world: Res<SimWorld>,
    existing: Query<Entity, With<LevelSprite>>,
    actor_sprites: Query<Entity, With<ActorSprite>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for entity in existing.iter().chain(actor_sprites.iter()) {
        commands.entity(entity).despawn();
    }

    let tile_color = Color::srgb(0.35, 0.35, 0.4);
    for obstacle in world.level.obstacles() {
        commands.spawn((LevelSprite, rect_sprite(obstacle, tile_color, TILE_Z)));
    }

    let portal_color = Color::srgba(0.4, 0.6, 0.9, 0.4);
    for transition in &world.level.transitions {
        commands.spawn((
            LevelSprite,
            rect_sprite(&transition.rect, portal_color, TILE_Z),
        ));
    }

    for collectible in &world.level.collectibles {
        commands.spawn((
            LevelSprite,
            CollectibleSprite {
                id: collectible.id.clone(),
            },
            rect_sprite(
                &collectible.rect,
                collectible_color(&collectible.kind),
                PICKUP_Z,
            ),
        ));
    }

    debug!(
        "Drew '{}': {} tiles, {} pickups",
        event.level_id,
        world.level.obstacles().len(),
        world.level.collectibles.len()
    );
}

pub(crate) fn sync_player(
    world: Res<SimWorld>,
    mut query: Query<(&mut Transform, &mut Visibility), With<PlayerSprite>>,
) {
    let appearance = world.player.appearance();
    for (mut transform, mut visibility) in &mut query {
        transform.translation = to_translation(&appearance.rect, PLAYER_Z);
        *visibility = if appearance.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

/// Keep one sprite per actor, matched by list index.
pub(crate) fn sync_actors(
    mut commands: Commands,
    world: Res<SimWorld>,
    mut query: Query<(Entity, &ActorSprite, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let mut drawn = vec![false; world.actors.len()];

    for (entity, index, mut transform, mut sprite, mut visibility) in &mut query {
        let Some(actor) = world.actors.get(index.0) else {
            commands.entity(entity).despawn();
            continue;
        };
        let appearance = actor.appearance();
        transform.translation = to_translation(&appearance.rect, ACTOR_Z);
        sprite.color = appearance.color;
        sprite.custom_size = Some(Vec2::new(appearance.rect.w, appearance.rect.h));
        *visibility = if appearance.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        drawn[index.0] = true;
    }

    for (index, actor) in world.actors.iter().enumerate() {
        if drawn[index] {
            continue;
        }
        let appearance = actor.appearance();
        commands.spawn((
            ActorSprite(index),
            rect_sprite(&appearance.rect, appearance.color, ACTOR_Z),
        ));
    }
}

pub(crate) fn despawn_collected(
    mut commands: Commands,
    world: Res<SimWorld>,
    query: Query<(Entity, &CollectibleSprite)>,
) {
    for (entity, sprite) in &query {
        if world.collected.contains(&sprite.id) {
            commands.entity(entity).despawn();
        }
    }
}

/// Center the camera on the player, kept inside the level where it is
/// larger than the view.
pub(crate) fn follow_player(
    world: Res<SimWorld>,
    config: Res<GameConfig>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let target = camera_target(
        world.player.body.center(),
        world.level.bounds(),
        Vec2::new(config.window.width as f32, config.window.height as f32) / 2.0,
    );
    for mut transform in &mut camera {
        transform.translation.x = target.x;
        transform.translation.y = -target.y;
    }
}

/// Camera center in simulation coordinates.
pub fn camera_target(focus: Vec2, bounds: Option<Aabb>, half_view: Vec2) -> Vec2 {
    let Some(bounds) = bounds else {
        return focus;
    };
    let clamp_axis = |value: f32, min: f32, max: f32, half: f32| {
        if max - min <= half * 2.0 {
            (min + max) / 2.0
        } else {
            value.clamp(min + half, max - half)
        }
    };
    Vec2::new(
        clamp_axis(focus.x, bounds.left(), bounds.right(), half_view.x),
        clamp_axis(focus.y, bounds.top(), bounds.bottom(), half_view.y),
    )
}
