//! Vitrine Viewer - scroll-driven 3D product showcase
//!
//! Renders a part catalog as an exploded-view showcase: scrolling (or a
//! one-finger drag) sweeps the rig through its teardown, A and E glide it
//! to the named poses, and the backdrop warms as the turntable passes its
//! glow window.
//!
//! ## Plugins
//! - StagePlugin: fixed camera and lights
//! - ShowcasePlugin: catalog resolution and part spawning
//! - InputPlugin: wheel/touch/keyboard translated to rig messages
//! - RigPlugin: the progress state machine and pose application

mod components;
mod plugins;
mod settings;
mod systems;

use bevy::prelude::*;
use std::path::PathBuf;

use plugins::{InputPlugin, RigPlugin, ShowcasePlugin, StagePlugin};
use settings::ViewerSettings;
use vitrine_common::services::backdrop;
use vitrine_common::vitrine_format::is_vitrine_file;

// ============================================================================
// Startup Arguments
// ============================================================================

/// Command-line arguments parsed at startup
#[derive(Resource, Default, Debug, Clone)]
pub struct StartupArgs {
    /// Catalog file to open (if any)
    pub catalog_path: Option<PathBuf>,

    /// Render every part as a colored cuboid, skipping model loads
    pub placeholders: bool,
}

impl StartupArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::parse_from(&args)
    }

    fn parse_from(args: &[String]) -> Self {
        let mut result = Self::default();

        let mut i = 1; // Skip program name
        while i < args.len() {
            let arg = &args[i];

            match arg.as_str() {
                "--placeholders" | "-p" => {
                    result.placeholders = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    // Check if it's a catalog path
                    if !arg.starts_with('-') {
                        let path = PathBuf::from(arg);
                        if is_vitrine_file(&path) {
                            result.catalog_path = Some(path);
                        } else {
                            eprintln!("Warning: Unknown argument or unsupported file: {}", arg);
                        }
                    }
                }
            }
            i += 1;
        }

        result
    }
}

/// Print help message
fn print_help() {
    println!(
        r#"
Vitrine Viewer - scroll-driven 3D product showcase

USAGE:
    vitrine-viewer [OPTIONS] [CATALOG_FILE]

ARGUMENTS:
    [CATALOG_FILE]    Path to a .vitrine or .ron catalog to open

OPTIONS:
    -h, --help            Show this help message
    -p, --placeholders    Render colored cuboids instead of loading models

CONTROLS:
    Scroll / drag    Sweep the showcase apart and back together
    A                Glide to the assembled pose
    E                Glide to the exploded pose

FILE EXTENSIONS:
    .vitrine    Vitrine catalog file (recommended)
    .ron        RON format catalog file
"#
    );
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let args = StartupArgs::parse();
    let settings = ViewerSettings::load_or_init();

    App::new()
        // Core Bevy plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Vitrine Showcase".to_string(),
                resolution: bevy::window::WindowResolution::new(1600, 900),
                present_mode: settings.present_mode(),
                ..default()
            }),
            ..default()
        }))
        // The backdrop starts at its resting charcoal
        .insert_resource(ClearColor(backdrop::base_color()))
        // Resources
        .insert_resource(args)
        .insert_resource(settings)
        // Stage, showcase, interaction
        .add_plugins(StagePlugin)
        .add_plugins(ShowcasePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(RigPlugin)
        .run();
}

// ============================================================================
// Tests
// ============================================================================
