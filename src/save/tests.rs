use std::path::PathBuf;

use super::*;
use crate::abilities::{Ability, CollectibleKind};
use crate::content::{CollectibleDef, ContentRegistry, GameplayDefaults, LevelDef, ObstacleDef};
use crate::physics::Aabb;
use crate::world::SimWorld;

fn level(id: &str) -> LevelDef {
    LevelDef {
        id: id.to_string(),
        name: id.to_string(),
        player_spawn: (100.0, 450.0),
        obstacles: vec![ObstacleDef::Rect {
            x: 0.0,
            y: 500.0,
            w: 1000.0,
            h: 40.0,
        }],
        transitions: Vec::new(),
        collectibles: vec![CollectibleDef {
            id: format!("{}_potion", id),
            rect: Aabb::new(600.0, 470.0, 20.0, 20.0),
            kind: CollectibleKind::Health(25.0),
        }],
        actors: Vec::new(),
    }
}

fn setup() -> (SimWorld, ContentRegistry) {
    let mut registry = ContentRegistry::default();
    for def in [level("hall"), level("vault")] {
        registry.levels.insert(def.id.clone(), def);
    }
    let world = SimWorld::new(&registry, &GameplayDefaults::builtin("hall"), 3).expect("world");
    (world, registry)
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hollowreach_{}_{}.json", name, std::process::id()))
}

#[test]
fn test_save_then_load_restores_progress() {
    let (mut world, registry) = setup();
    world.abilities.unlock(Ability::WallJump);
    world.collected.insert("vault_potion".to_string());
    world.enter_level(&registry, "vault", None).expect("vault");
    world.player.health.current = 40.0;

    let path = temp_path("round_trip");
    let written = save_progress(&world, &path).expect("save");
    assert_eq!(written.level_id, "vault");
    assert_eq!(written.abilities, vec![Ability::WallJump]);

    let (mut fresh, _) = setup();
    let loaded = load_progress(&path).expect("load");
    loaded.apply(&mut fresh, &registry).expect("apply");
    let _ = std::fs::remove_file(&path);

    assert_eq!(fresh.level.id, "vault");
    assert_eq!(fresh.player.health.current, 40.0);
    assert!(fresh.abilities.has(Ability::WallJump));
    // The taken pickup stays gone after loading.
    assert!(fresh.level.collectibles.is_empty());
}

#[test]
fn test_apply_keeps_newer_abilities() {
    let (mut world, registry) = setup();
    world.abilities.unlock(Ability::Dash);

    let data = SaveData {
        version: SAVE_VERSION,
        level_id: "hall".to_string(),
        health: 100.0,
        abilities: vec![Ability::DoubleJump],
        collected: Vec::new(),
    };
    data.apply(&mut world, &registry).expect("apply");

    assert!(world.abilities.has(Ability::Dash));
    assert!(world.abilities.has(Ability::DoubleJump));
}

#[test]
fn test_apply_keeps_pickups_taken_after_save() {
    let (mut world, registry) = setup();
    world.collected.insert("hall_potion".to_string());

    let data = SaveData {
        version: SAVE_VERSION,
        level_id: "hall".to_string(),
        health: 100.0,
        abilities: Vec::new(),
        collected: vec!["vault_potion".to_string()],
    };
    data.apply(&mut world, &registry).expect("apply");

    assert!(world.collected.contains("hall_potion"));
    assert!(world.collected.contains("vault_potion"));
    assert!(world.level.collectibles.is_empty());
}

#[test]
fn test_apply_rejects_unknown_level() {
    let (mut world, registry) = setup();
    let data = SaveData {
        version: SAVE_VERSION,
        level_id: "attic".to_string(),
        health: 50.0,
        abilities: vec![Ability::Dash],
        collected: Vec::new(),
    };

    let error = data.apply(&mut world, &registry).expect_err("unknown level");
    assert!(matches!(error, SaveError::UnknownLevel(ref id) if id == "attic"));
    // Nothing was applied.
    assert!(!world.abilities.has(Ability::Dash));
    assert_eq!(world.level.id, "hall");
}

#[test]
fn test_zero_health_save_loads_at_full() {
    let (mut world, registry) = setup();
    let data = SaveData {
        version: SAVE_VERSION,
        level_id: "hall".to_string(),
        health: 0.0,
        abilities: Vec::new(),
        collected: Vec::new(),
    };
    data.apply(&mut world, &registry).expect("apply");
    assert_eq!(world.player.health.current, 100.0);
}

#[test]
fn test_load_rejects_other_versions() {
    let path = temp_path("old_version");
    std::fs::write(
        &path,
        r#"{"version":99,"level_id":"hall","health":10.0,"abilities":[],"collected":[]}"#,
    )
    .expect("write");

    let result = load_progress(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(SaveError::UnsupportedVersion(99))));
}

#[test]
fn test_load_reports_malformed_and_missing_files() {
    let path = temp_path("malformed");
    std::fs::write(&path, "{ not json").expect("write");
    let malformed = load_progress(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(malformed, Err(SaveError::Format(_))));

    let missing = load_progress(&temp_path("never_written"));
    assert!(matches!(missing, Err(SaveError::Io(_))));
}

#[test]
fn test_collected_ids_are_sorted() {
    let (mut world, _) = setup();
    world.collected.insert("b".to_string());
    world.collected.insert("a".to_string());
    assert_eq!(
        SaveData::from_world(&world).collected,
        vec!["a".to_string(), "b".to_string()]
    );
}
