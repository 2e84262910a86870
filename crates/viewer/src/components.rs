//! Showcase components - markers and per-part data for spawned entities

use bevy::gltf::Gltf;
use bevy::prelude::*;

/// Marks the root entity the whole showcase hangs from. The rig writes its
/// yaw/tilt here; parts are children and only ever move locally.
#[derive(Component)]
pub struct ShowcaseRoot;

/// One spawned part of the showcase, carrying its catalog poses
#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct PartSlot {
    /// Catalog index, doubles as the placeholder hue index
    pub index: usize,
    /// Local translation when fully assembled
    pub assembled: Vec3,
    /// Local translation at full spread
    pub exploded: Vec3,
    /// Extents of the fallback cuboid
    pub size: Vec3,
}

/// Tracks a part's in-flight GLB model load
#[derive(Component)]
pub struct PendingPartModel {
    pub handle: Handle<Gltf>,
}
