//! # Stage Plugin
//!
//! Fixed camera and lighting for the showcase. There is no camera
//! controller on purpose: the rig owns all motion, the stage just frames
//! it.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use tracing::info;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_stage);
    }
}

/// Camera, key light, fill light, ambient
fn setup_stage(mut commands: Commands) {
    info!("💡 Setting up the stage...");

    // Camera - Reinhard tonemapping avoids the magenta missing-LUT bug
    commands.spawn((
        Camera3d::default(),
        Tonemapping::Reinhard,
        Transform::from_xyz(0.0, 1.6, 7.5).looking_at(Vec3::ZERO, Vec3::Y),
        Projection::Perspective(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Name::new("StageCamera"),
    ));

    // Key light (warm, casts the shadows)
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(1.0, 0.96, 0.88),
            illuminance: 32_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("KeyLight"),
    ));

    // Fill light (cool, softer, opposite side)
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.76, 0.82, 1.0),
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_xyz(-7.0, 4.0, -5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("FillLight"),
    ));

    // Ambient
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        affects_lightmapped_meshes: true,
    });
}
