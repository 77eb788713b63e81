//! Render domain: health and stamina bars fed from the world snapshot.

use bevy::prelude::*;

use crate::world::SimWorld;

const BAR_WIDTH: f32 = 200.0;
const BAR_HEIGHT: f32 = 20.0;
const BAR_PADDING: f32 = 16.0;
const BAR_GAP: f32 = 6.0;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudBar {
    Health,
    Stamina,
}

/// Marker for the fill element inside a bar
#[derive(Component, Debug)]
pub struct HudBarFill(pub HudBar);

pub(crate) fn spawn_hud(mut commands: Commands) {
    for (row, bar) in [HudBar::Health, HudBar::Stamina].into_iter().enumerate() {
        commands
            .spawn((
                bar,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(BAR_PADDING),
                    top: Val::Px(BAR_PADDING + row as f32 * (BAR_HEIGHT + BAR_GAP)),
                    width: Val::Px(BAR_WIDTH),
                    height: Val::Px(BAR_HEIGHT),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    HudBarFill(bar),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                ));
            });
    }
}

/// Green through yellow to red as `percent` drops.
pub fn health_color(percent: f32) -> Color {
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn update_hud(
    world: Res<SimWorld>,
    mut fills: Query<(&HudBarFill, &mut Node, &mut BackgroundColor)>,
) {
    let snapshot = world.snapshot();
    for (fill, mut node, mut bg_color) in &mut fills {
        let percent = match fill.0 {
            HudBar::Health => snapshot.health / snapshot.max_health,
            HudBar::Stamina => snapshot.stamina / snapshot.max_stamina,
        }
        .clamp(0.0, 1.0);
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = match fill.0 {
            HudBar::Health => health_color(percent),
            HudBar::Stamina => Color::srgb(0.9, 0.75, 0.2),
        };
    }
}
