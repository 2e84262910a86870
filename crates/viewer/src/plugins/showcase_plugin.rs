//! # Showcase Plugin
//!
//! Resolves the part catalog, spawns the showcase hierarchy, and keeps
//! part models applied as their GLBs finish loading.
//!
//! The catalog policy mirrors the rest of the viewer's failure handling:
//! anything that cannot be loaded falls back to something renderable, with
//! a warning, and the showcase always comes up.

use bevy::gltf::Gltf;
use bevy::prelude::*;
use vitrine_common::catalog::{default_catalog, PartCatalog};
use vitrine_common::vitrine_format::load_catalog;

use crate::components::{PartSlot, PendingPartModel, ShowcaseRoot};
use crate::settings::ViewerSettings;
use crate::systems::part_loader;
use crate::StartupArgs;

pub struct ShowcasePlugin;

impl Plugin for ShowcasePlugin {
    fn build(&self, app: &mut App) {
        app
            // Components
            .register_type::<PartSlot>()
            // Systems
            .add_systems(Startup, spawn_showcase)
            .add_systems(Update, part_loader::apply_loaded_models);
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Resolve the catalog: CLI path when given and loadable, built-in otherwise
fn resolve_catalog(args: &StartupArgs) -> PartCatalog {
    let Some(path) = &args.catalog_path else {
        info!("📦 No catalog file given, using the built-in teardown");
        return default_catalog();
    };

    match load_catalog(path) {
        Ok(catalog) => {
            info!("📂 Loaded catalog {:?} ({} parts)", path, catalog.parts.len());
            catalog
        }
        Err(e) => {
            warn!(
                "⚠ Failed to load catalog {:?}: {}. Using the built-in teardown.",
                path, e
            );
            default_catalog()
        }
    }
}

/// Spawn the showcase root and one child slot per part
fn spawn_showcase(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    args: Res<StartupArgs>,
    settings: Res<ViewerSettings>,
) {
    let catalog = resolve_catalog(&args);
    info!("🧱 Spawning showcase '{}'", catalog.name);

    let root = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            ShowcaseRoot,
            Name::new(catalog.name.clone()),
        ))
        .id();

    let force_placeholders = args.placeholders || settings.force_placeholders;

    for (index, part) in catalog.parts.iter().enumerate() {
        let slot = commands
            .spawn((
                Transform::from_translation(part.assembled_vec()),
                Visibility::default(),
                PartSlot {
                    index,
                    assembled: part.assembled_vec(),
                    exploded: part.exploded_vec(),
                    size: part.size_vec(),
                },
                Name::new(part.name.clone()),
            ))
            .id();
        commands.entity(root).add_child(slot);

        match &part.model {
            Some(model) if !force_placeholders => {
                let handle: Handle<Gltf> = asset_server.load(model.clone());
                commands.entity(slot).insert(PendingPartModel { handle });
            }
            _ => {
                part_loader::spawn_placeholder(
                    &mut commands,
                    &mut meshes,
                    &mut materials,
                    slot,
                    index,
                    part.size_vec(),
                );
            }
        }
    }
}
