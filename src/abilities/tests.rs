use super::*;
use crate::combat::Health;
use crate::physics::Aabb;

#[test]
fn test_flags_start_locked() {
    let flags = AbilityFlags::default();
    for ability in Ability::ALL {
        assert!(!flags.has(ability));
    }
    assert!(flags.unlocked().is_empty());
}

#[test]
fn test_unlock_reports_first_time_only() {
    let mut flags = AbilityFlags::default();
    assert!(flags.unlock(Ability::Dash));
    assert!(!flags.unlock(Ability::Dash));
    assert!(flags.has(Ability::Dash));
    assert!(!flags.has(Ability::WallJump));
}

#[test]
fn test_absorb_never_removes() {
    let mut flags = AbilityFlags::with(&[Ability::DoubleJump, Ability::Dash]);
    let before = flags;

    flags.absorb(&AbilityFlags::with(&[Ability::WallJump]));
    flags.absorb(&AbilityFlags::default());

    for ability in before.unlocked() {
        assert!(flags.has(ability));
    }
    assert_eq!(
        flags.unlocked(),
        vec![Ability::DoubleJump, Ability::WallJump, Ability::Dash]
    );
}

fn pickup(kind: CollectibleKind) -> Collectible {
    Collectible::new("test_pickup", Aabb::new(100.0, 100.0, 20.0, 20.0), kind)
}

#[test]
fn test_ability_pickup_applies_once() {
    let mut item = pickup(CollectibleKind::Ability(Ability::WallJump));
    let mut health = Health::new(100.0);
    let mut flags = AbilityFlags::default();
    let touching = Aabb::new(90.0, 90.0, 50.0, 50.0);

    assert_eq!(
        item.try_collect(&touching, &mut health, &mut flags),
        Some(PickupOutcome::Unlocked(Ability::WallJump))
    );
    assert!(item.collected);
    assert!(flags.has(Ability::WallJump));
    assert_eq!(item.try_collect(&touching, &mut health, &mut flags), None);
}

#[test]
fn test_pickup_needs_overlap() {
    let mut item = pickup(CollectibleKind::Ability(Ability::Dash));
    let mut health = Health::new(100.0);
    let mut flags = AbilityFlags::default();
    // Shares an edge only.
    let adjacent = Aabb::new(50.0, 100.0, 50.0, 50.0);

    assert_eq!(item.try_collect(&adjacent, &mut health, &mut flags), None);
    assert!(!item.collected);
    assert!(!flags.has(Ability::Dash));
}

#[test]
fn test_owned_ability_pickup_is_consumed() {
    let mut item = pickup(CollectibleKind::Ability(Ability::Dash));
    let mut health = Health::new(100.0);
    let mut flags = AbilityFlags::with(&[Ability::Dash]);
    let touching = Aabb::new(100.0, 100.0, 50.0, 50.0);

    assert_eq!(
        item.try_collect(&touching, &mut health, &mut flags),
        Some(PickupOutcome::AlreadyOwned(Ability::Dash))
    );
    assert!(item.collected);
}

#[test]
fn test_health_pickup_caps_at_max() {
    let mut item = pickup(CollectibleKind::Health(30.0));
    let mut health = Health::new(100.0);
    health.take_damage(10.0);
    let mut flags = AbilityFlags::default();
    let touching = Aabb::new(100.0, 100.0, 50.0, 50.0);

    assert_eq!(
        item.try_collect(&touching, &mut health, &mut flags),
        Some(PickupOutcome::Healed(10.0))
    );
    assert_eq!(health.current, 100.0);
}
