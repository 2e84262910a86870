//! # Vitrine File Format (.vitrine)
//!
//! The canonical on-disk format for showcase catalogs.
//!
//! ## File Extensions
//! - `.vitrine` - canonical catalog format (opens in the Vitrine viewer)
//! - `.ron` - accepted on load for hand-authored files
//!
//! Both extensions carry identical RON structure.
//!
//! ## Format Features
//! - Human-readable RON syntax
//! - Versioned root (`format` field) checked on load
//! - Header comment so files self-describe in a text editor
//!
//! ## Usage
//! ```rust,ignore
//! use vitrine_common::vitrine_format::{load_catalog, save_catalog};
//!
//! let catalog = load_catalog("teardown.vitrine")?;
//! save_catalog(&catalog, "teardown.vitrine")?;
//! ```

use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::catalog::PartCatalog;

// ============================================================================
// Constants
// ============================================================================

/// Canonical catalog extension
pub const EXTENSION: &str = "vitrine";

/// All extensions accepted on load (canonical first)
pub const VALID_EXTENSIONS: &[&str] = &["vitrine", "ron"];

/// Current format version
pub const FORMAT_VERSION: &str = "vitrine_v1";

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when working with .vitrine files
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: String, found: String },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl From<ron::error::SpannedError> for VitrineError {
    fn from(e: ron::error::SpannedError) -> Self {
        VitrineError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VitrineError>;

// ============================================================================
// Core Functions
// ============================================================================

/// Load a .vitrine (or hand-authored .ron) catalog file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<PartCatalog> {
    let path = path.as_ref();

    // Check extension
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        if !VALID_EXTENSIONS.contains(&ext.as_str()) {
            return Err(VitrineError::InvalidFormat(format!(
                "Expected .{} or .ron file, got .{}",
                EXTENSION, ext
            )));
        }
    }

    // Check file exists
    if !path.exists() {
        return Err(VitrineError::NotFound(path.display().to_string()));
    }

    // Read file
    let content = std::fs::read_to_string(path)?;

    // Parse RON
    let catalog: PartCatalog = ron::from_str(&content)?;

    // Verify format version (any vitrine_* parses; others are rejected)
    if !catalog.format.starts_with("vitrine_") {
        return Err(VitrineError::VersionMismatch {
            expected: FORMAT_VERSION.to_string(),
            found: catalog.format.clone(),
        });
    }

    Ok(catalog)
}

/// Save a catalog to .vitrine format
/// If no valid extension is provided, defaults to .vitrine
pub fn save_catalog<P: AsRef<Path>>(catalog: &PartCatalog, path: P) -> Result<()> {
    let path = path.as_ref();

    // Check if extension is valid, otherwise default to the canonical one
    let path = if let Some(ext) = path.extension() {
        let ext_str = ext.to_string_lossy().to_lowercase();
        if VALID_EXTENSIONS.contains(&ext_str.as_str()) {
            path.to_path_buf()
        } else {
            path.with_extension(EXTENSION)
        }
    } else {
        path.with_extension(EXTENSION)
    };

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Serialize with pretty formatting
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(10)
        .separate_tuple_members(true)
        .enumerate_arrays(false)
        .new_line("\n".to_string())
        .indentor("    ".to_string());

    let content = ron::ser::to_string_pretty(catalog, pretty)
        .map_err(|e| VitrineError::Parse(e.to_string()))?;

    // Add header comment
    let header = format!(
        "// Vitrine Catalog - {}\n// Format: {}\n\n",
        catalog.name, FORMAT_VERSION
    );

    // Write file
    let mut file = std::fs::File::create(&path)?;
    file.write_all(header.as_bytes())?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Check if a path is a loadable catalog file
pub fn is_vitrine_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        VALID_EXTENSIONS.contains(&ext.as_str())
    } else {
        false
    }
}

/// Convert a path to the canonical .vitrine extension
pub fn to_vitrine_path<P: AsRef<Path>>(path: P) -> std::path::PathBuf {
    path.as_ref().with_extension(EXTENSION)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use std::path::PathBuf;

    fn temp_path(stem: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vitrine_{}_{}.vitrine", stem, std::process::id()))
    }

    #[test]
    fn test_is_vitrine_file() {
        // Valid extensions
        assert!(is_vitrine_file("teardown.vitrine"));
        assert!(is_vitrine_file("teardown.ron"));
        assert!(is_vitrine_file("TEARDOWN.VITRINE"));

        // Invalid
        assert!(!is_vitrine_file("teardown.json"));
        assert!(!is_vitrine_file("teardown.glb"));
        assert!(!is_vitrine_file("teardown"));
    }

    #[test]
    fn test_path_conversion() {
        assert_eq!(
            to_vitrine_path("teardown.json"),
            PathBuf::from("teardown.vitrine")
        );
        assert_eq!(
            to_vitrine_path("teardown"),
            PathBuf::from("teardown.vitrine")
        );
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("roundtrip");
        let catalog = default_catalog();

        save_catalog(&catalog, &path).expect("save");
        let loaded = load_catalog(&path).expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_save_defaults_the_extension() {
        let dir = std::env::temp_dir().join(format!("vitrine_ext_{}", std::process::id()));
        let given = dir.join("teardown.txt");
        let expected = dir.join("teardown.vitrine");

        save_catalog(&default_catalog(), &given).expect("save");
        assert!(expected.exists());
        assert!(!given.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_version_mismatch_is_rejected() {
        let path = temp_path("version");
        let mut catalog = default_catalog();
        catalog.format = "legacy_v0".to_string();

        save_catalog(&catalog, &path).expect("save");
        let result = load_catalog(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            result,
            Err(VitrineError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = load_catalog("teardown.toml");
        assert!(matches!(result, Err(VitrineError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let path = temp_path("never_written");
        let result = load_catalog(&path);
        assert!(matches!(result, Err(VitrineError::NotFound(_))));
    }
}
