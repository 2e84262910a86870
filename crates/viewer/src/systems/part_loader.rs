//! Part model loader - swaps pending GLB handles for spawned scenes, with
//! placeholder fallback.
//!
//! Every failure is swallowed here: a part whose model cannot be loaded
//! gets its index-colored cuboid and a warning, and the showcase renders.

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

use vitrine_common::catalog::placeholder_color;

use crate::components::{PartSlot, PendingPartModel};

/// System to apply loaded GLB models once they're ready
pub fn apply_loaded_models(
    mut commands: Commands,
    gltf_assets: Res<Assets<Gltf>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    pending: Query<(Entity, &PartSlot, &Name, &PendingPartModel)>,
) {
    for (entity, slot, name, pending_model) in pending.iter() {
        match asset_server.load_state(&pending_model.handle) {
            LoadState::Loaded => {
                let Some(gltf) = gltf_assets.get(&pending_model.handle) else {
                    continue;
                };

                let scene = gltf
                    .default_scene
                    .clone()
                    .or_else(|| gltf.scenes.first().cloned());

                match scene {
                    Some(scene_handle) => {
                        info!("✅ Model ready for part '{}'", name);
                        commands.entity(entity).with_children(|parent| {
                            parent.spawn((SceneRoot(scene_handle), Transform::default()));
                        });
                    }
                    None => {
                        warn!("⚠ Model for part '{}' has no scenes, using placeholder", name);
                        spawn_placeholder(
                            &mut commands,
                            &mut meshes,
                            &mut materials,
                            entity,
                            slot.index,
                            slot.size,
                        );
                    }
                }

                commands.entity(entity).remove::<PendingPartModel>();
            }
            LoadState::Failed(_) => {
                warn!("⚠ Failed to load model for part '{}', using placeholder", name);
                spawn_placeholder(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    entity,
                    slot.index,
                    slot.size,
                );
                commands.entity(entity).remove::<PendingPartModel>();
            }
            _ => {
                // Still loading, check again next frame
            }
        }
    }
}

/// Spawn the index-colored fallback cuboid as a child of a part slot
pub fn spawn_placeholder(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    slot: Entity,
    index: usize,
    size: Vec3,
) {
    let [r, g, b, a] = placeholder_color(index);
    commands.entity(slot).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(r, g, b, a),
                perceptual_roughness: 0.9,
                ..default()
            })),
            Transform::default(),
        ));
    });
}
