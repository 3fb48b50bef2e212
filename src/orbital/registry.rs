//! Body registry: the only path from computed poses to scene nodes.
//!
//! Handles are created once while the scene is spawned and live for the whole
//! session. Applying a frame only rewrites transforms of existing entities.

use std::collections::HashMap;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;

use crate::catalog::{BodyId, CelestialCatalog};
use crate::core::CoreError;
use crate::core::space::{scene_rotation_to_render, scene_to_render};
use crate::orbital::motion::FrameTransforms;

/// Scene nodes backing one body.
///
/// `anchor` carries the position and parents moons, rings, atmosphere and
/// labels. `globe` is the anchor's child carrying tilt and spin, so spinning a
/// planet does not drag its moons around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyHandle {
    pub anchor: Entity,
    pub globe: Entity,
}

/// Anything the registry can write transforms into.
pub trait NodeTransforms {
    /// Run `f` on the node's transform. Returns false if the node is gone.
    fn with_transform(&mut self, node: Entity, f: impl FnOnce(&mut Transform)) -> bool;
}

impl<F: QueryFilter> NodeTransforms for Query<'_, '_, &mut Transform, F> {
    fn with_transform(&mut self, node: Entity, f: impl FnOnce(&mut Transform)) -> bool {
        match self.get_mut(node) {
            Ok(mut transform) => {
                f(&mut transform);
                true
            }
            Err(_) => false,
        }
    }
}

impl NodeTransforms for HashMap<Entity, Transform> {
    fn with_transform(&mut self, node: Entity, f: impl FnOnce(&mut Transform)) -> bool {
        match self.get_mut(&node) {
            Some(transform) => {
                f(transform);
                true
            }
            None => false,
        }
    }
}

/// Identifier → handle table owned for the session.
#[derive(Resource, Default, Debug)]
pub struct BodyRegistry {
    entries: HashMap<BodyId, BodyHandle>,
}

impl BodyRegistry {
    /// One-time association of a catalog body with its scene nodes.
    pub fn register(
        &mut self,
        catalog: &CelestialCatalog,
        id: &str,
        handle: BodyHandle,
    ) -> Result<BodyId, CoreError> {
        let body_id = catalog.resolve(id)?.id();
        let handle = self
            .entries
            .get(&body_id)
            .ok_or(CoreError::NotRegistered(body_id))?;
        if !nodes.with_transform(handle.anchor, |t| t.translation = translation) {
            return Err(CoreError::NodeMissing(body_id));
        }
        let rotated = rotation
            .is_none_or(|rotation| nodes.with_transform(handle.globe, |t| t.rotation = rotation));
        if !rotated {
            return Err(CoreError::NodeMissing(body_id));
        }
        Ok(())
    }

    /// Apply every pose in a frame. Returns how many bodies were updated.
    pub fn apply_frame(
        &self,
        catalog: &CelestialCatalog,
        frame: &FrameTransforms,
        nodes: &mut impl NodeTransforms,
    ) -> usize {
        frame
            .iter()
            .filter(|pose| {
                // Moon anchors hang off their planet's anchor; the rest are roots.
                let translation = match pose.parent {
                    Some(_) => pose.local_offset,
                    None => pose.world_position,
                };
                self.apply_transform(
                    catalog,
                    pose.id.as_str(),
                    scene_to_render(translation),
                    pose.orientation.map(scene_rotation_to_render),
                    nodes,
                )
                .is_ok()
            })
            .count()
    }
}
