//! Loading index files in both formats.

use super::common::{generator_script, render_list, sample_index, temp_file};
use docsift::{IndexError, SearchIndex};

// ============================================================================
// SCRIPT FORMAT
// ============================================================================

#[test]
fn test_load_generator_script() {
    let original = sample_index();
    let file = temp_file(".js", &generator_script(&original));

    let loaded = SearchIndex::load(file.path()).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_loaded_script_searches_like_original() {
    let original = sample_index();
    let file = temp_file(".js", &generator_script(&original));
    let loaded = SearchIndex::load(file.path()).unwrap();

    assert_eq!(render_list(&loaded, "keys"), render_list(&original, "keys"));
}

#[test]
fn test_script_with_semicolon_and_newlines() {
    let source = "window.searchIndex = [\n  {\"Url\":\"/docs/1.1/core/keys.md\",\"Body\":\"keys\"},\n];\n";
    let file = temp_file(".js", source);
    let index = SearchIndex::load(file.path()).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.entries()[0].url, "/docs/1.1/core/keys.md");
}

#[test]
fn test_empty_script_array() {
    let file = temp_file(".js", "window.searchIndex = []");
    let index = SearchIndex::load(file.path()).unwrap();
    assert!(index.is_empty());
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[test]
fn test_load_json_array() {
    let original = sample_index();
    let json = serde_json::to_string_pretty(&original).unwrap();
    let file = temp_file(".json", &json);

    let loaded = SearchIndex::load(file.path()).unwrap();
    assert_eq!(loaded.len(), original.len());
    assert_eq!(loaded, original);
}

#[test]
fn test_json_uses_generator_field_names() {
    let json = serde_json::to_string(&sample_index()).unwrap();
    assert!(json.starts_with(r#"[{"Url":"#));
    assert!(json.contains(r#""Body":"#));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("searchIndex.js");
    let err = SearchIndex::load(&path).unwrap_err();

    assert!(matches!(err, IndexError::Io { .. }));
    assert!(err.to_string().contains("searchIndex.js"));
}

#[test]
fn test_script_without_assignment() {
    let file = temp_file(".js", "console.log('hi')");
    let err = SearchIndex::load(file.path()).unwrap_err();
    assert!(matches!(err, IndexError::Script(_)));
}

#[test]
fn test_entry_missing_body() {
    let file = temp_file(".json", r#"[{"Url":"/docs/1.1/core/keys.md"}]"#);
    let err = SearchIndex::load(file.path()).unwrap_err();
    assert!(matches!(err, IndexError::Json(_)));
}

// ============================================================================
// STATS
// ============================================================================

#[test]
fn test_stats_for_sample_site() {
    let stats = sample_index().stats(3);
    assert_eq!(stats.entries, 8);
    assert_eq!(stats.unexpected_suffix, 0);
    assert_eq!(stats.empty_bodies, 0);
    assert!(stats.body_bytes > 0);
    assert!(stats.largest.is_some());
}
