//! Validation for level geometry and cross-references between definitions.
//!
//! The resolver assumes every obstacle has positive width and height; this is
//! the only place that assumption is checked.

use std::collections::HashMap;

use super::data::*;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingReference {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
        target_type: &'static str,
        missing_id: String,
    },
    DegenerateObstacle {
        level_id: String,
        index: usize,
    },
    DuplicateId {
        kind: &'static str,
        id: String,
        first_seen_in: String,
        seen_again_in: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingReference {
                source_type,
                source_id,
                field,
                target_type,
                missing_id,
            } => write!(
                f,
                "{} '{}' references missing {} '{}' in field '{}'",
                source_type, source_id, target_type, missing_id, field
            ),
            ValidationError::DegenerateObstacle { level_id, index } => write!(
                f,
                "Level '{}' obstacle #{} has zero or negative size",
                level_id, index
            ),
            ValidationError::DuplicateId {
                kind,
                id,
                first_seen_in,
                seen_again_in,
            } => write!(
                f,
                "{} id '{}' appears in both '{}' and '{}'",
                kind, id, first_seen_in, seen_again_in
            ),
        }
    }
}

/// Helper macro for checking a reference exists
macro_rules! check_ref {
    ($errors:expr, $registry_map:expr, $source_type:expr, $source_id:expr, $field:expr, $target_type:expr, $ref_id:expr) => {
        if !$registry_map.contains_key($ref_id) {
            $errors.push(ValidationError::MissingReference {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                target_type: $target_type,
                missing_id: $ref_id.to_string(),
            });
        }
    };
}

/// Validate geometry, ids and cross-references.
/// Returns a list of validation errors, empty if the content is usable.
pub fn validate_content(
    registry: &ContentRegistry,
    defaults: &GameplayDefaults,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_ref!(
        errors,
        registry.levels,
        "GameplayDefaults",
        "gameplay_defaults",
        "start_level",
        "Level",
        &defaults.start_level
    );

    // Sorted so error order is stable between runs
    let mut level_ids: Vec<&String> = registry.levels.keys().collect();
    level_ids.sort();

    let mut collectible_owners: HashMap<&str, &str> = HashMap::new();

    for id in level_ids {
        let level = &registry.levels[id];

        let rects = level.obstacles.iter().flat_map(|def| def.rects());
        for (index, rect) in rects.enumerate() {
            if rect.is_degenerate() {
                errors.push(ValidationError::DegenerateObstacle {
                    level_id: id.clone(),
                    index,
                });
            }
        }

        for transition in &level.transitions {
            check_ref!(
                errors,
                registry.levels,
                "Level",
                id,
                "transitions.target",
                "Level",
                &transition.target
            );
        }

        for collectible in &level.collectibles {
            match collectible_owners.get(collectible.id.as_str()) {
                Some(owner) => errors.push(ValidationError::DuplicateId {
                    kind: "Collectible",
                    id: collectible.id.clone(),
                    first_seen_in: owner.to_string(),
                    seen_again_in: id.clone(),
                }),
                None => {
                    collectible_owners.insert(&collectible.id, id);
                }
            }
        }
    }

    errors
}
