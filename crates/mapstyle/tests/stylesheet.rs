//! Loading stylesheets from disk.

use std::io::Write;
use std::path::PathBuf;

use mapstyle::{
    FeatureType, InteractionState, OverlayStyles, Rgba, StyleError, StyleSheet, StyleTable,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/styles")
        .join(name)
}

#[test]
fn test_default_fixture_matches_builtin() {
    let sheet = StyleSheet::from_path(fixture("default.yaml")).unwrap();
    assert_eq!(sheet.features(), StyleTable::builtin());
    assert_eq!(sheet.overlays(), OverlayStyles::builtin());
}

#[test]
fn test_high_contrast_fixture() {
    let table = StyleTable::from_path(fixture("high_contrast.yaml")).unwrap();

    let road = table.resolve(FeatureType::Road, InteractionState::Base);
    assert_eq!(road.color, Rgba::new(0, 0, 0, 0.5));
    assert_eq!(road.stroke_width, 12.0);
    assert!(table.is_visible_at_zoom(FeatureType::Road, 10.0));

    let lga = table.get(FeatureType::Lga);
    assert_eq!(lga.rgb(), (255, 255, 0));
    assert_eq!(lga.stroke_width_for(InteractionState::Selected), 12.0);

    // No selectRadius given, so selection falls back to the base radius.
    let address = table.resolve(FeatureType::Address, InteractionState::Selected);
    assert_eq!(address.radius, Some(6.0));

    let placename = table.get(FeatureType::Placename);
    assert_eq!(placename.min_zoom(), None);
    assert_eq!(placename.select_color(), mapstyle::PRIMARY_COLOR);
}

#[test]
fn test_missing_overlays_use_builtin() {
    let sheet = StyleSheet::from_path(fixture("high_contrast.yaml")).unwrap();
    assert_eq!(sheet.overlays(), OverlayStyles::builtin());
}

#[test]
fn test_narrow_hover_fixture_rejected() {
    let err = StyleSheet::from_path(fixture("narrow_hover.yaml")).unwrap_err();
    match err {
        StyleError::Invalid { context, message } => {
            assert_eq!(context, "placename");
            assert!(message.contains("hoverStrokeWidth"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = StyleSheet::from_path(fixture("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, StyleError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.yaml"));
}

#[test]
fn test_written_sheet_loads_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(StyleSheet::builtin().to_yaml().unwrap().as_bytes())
        .unwrap();

    let sheet = StyleSheet::from_path(file.path()).unwrap();
    assert_eq!(sheet, StyleSheet::builtin());
}

#[test]
fn test_malformed_yaml() {
    let err = StyleSheet::from_yaml("features: [road").unwrap_err();
    assert!(matches!(err, StyleError::Yaml(_)));
}
