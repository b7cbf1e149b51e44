use std::fs;
use tempfile::TempDir;

use tagkit::infrastructure::table::{CategoryTables, CURRENT_TABLE_FILE, LEGACY_TABLE_FILE};

/// Write both category table files into a fresh temp directory and load
/// them. The `TempDir` must be kept alive alongside the tables.
pub fn fixture_tables() -> (TempDir, CategoryTables) {
    let temp = TempDir::new().unwrap();

    let current = r#"{
        "1girl": ["camera_subject", "gender"],
        "1boy": ["camera_subject", "gender"],
        "school_uniform": ["clothing"],
        "long_hair": ["hair_style", "hair"],
        "short_hair": ["hair_style", "hair"],
        "twintails": ["hair_style"],
        "sitting": ["pose"],
        "standing": ["pose"],
        "lying": ["pose", "position"],
        "v": ["pose", "gesture"],
        "attack": ["pose", "action"],
        "looking_at_viewer": ["camera"]
    }"#;

    let legacy = r#"{
        "1girl": ["person"],
        "sitting": ["pose"]
    }"#;

    fs::write(temp.path().join(CURRENT_TABLE_FILE), current).unwrap();
    fs::write(temp.path().join(LEGACY_TABLE_FILE), legacy).unwrap();

    let tables = CategoryTables::load_dir(temp.path()).unwrap();
    (temp, tables)
}
