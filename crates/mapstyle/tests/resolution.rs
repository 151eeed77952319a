//! Resolution behavior of the built-in table.

use mapstyle::{
    draw_style, get_style, get_style_by_name, hover_style, is_visible_at_zoom, overlay, resolve,
    FeatureType, InteractionState, OverlayKind, Rgba, StyleError, StyleTable,
};

#[test]
fn test_hover_stroke_never_narrower() {
    for feature in FeatureType::ALL {
        let style = get_style(feature);
        assert!(
            style.hover_stroke_width() >= style.stroke_width(),
            "{} hover stroke is narrower than base",
            feature
        );
    }
}

#[test]
fn test_point_radii_never_shrink() {
    for feature in FeatureType::ALL {
        let style = get_style(feature);
        if let Some(base) = style.radius_for(InteractionState::Base) {
            assert!(style.radius_for(InteractionState::Hover).unwrap() >= base);
            assert!(style.radius_for(InteractionState::Selected).unwrap() >= base);
        }
    }
}

#[test]
fn test_color_alpha_steps() {
    for feature in FeatureType::ALL {
        let style = get_style(feature);
        let (base, hover, select) = (
            style.base_color(),
            style.hover_color(),
            style.select_color(),
        );
        assert_eq!(base.alpha, 0.5);
        assert_eq!(hover.alpha, 0.7);
        assert_eq!(select.alpha, 1.0);
        assert_eq!(base.triple(), hover.triple());
        assert_eq!(hover.triple(), select.triple());
    }
}

#[test]
fn test_road_colors() {
    let road = get_style(FeatureType::Road);
    assert_eq!(road.base_color().to_string(), "rgba(0, 0, 255, 0.5)");
    assert_eq!(road.hover_color().to_string(), "rgba(0, 0, 255, 0.7)");
    assert_eq!(road.select_color().to_string(), "rgb(0, 0, 255)");
}

#[test]
fn test_road_zoom_floor() {
    assert!(is_visible_at_zoom(FeatureType::Road, 12.0));
    assert!(!is_visible_at_zoom(FeatureType::Road, 11.9));
}

#[test]
fn test_lga_has_no_floor() {
    assert!(is_visible_at_zoom(FeatureType::Lga, 0.0));
}

#[test]
fn test_address_floor_is_inclusive() {
    assert!(is_visible_at_zoom(FeatureType::Address, 16.9));
    assert!(!is_visible_at_zoom(FeatureType::Address, 16.89));
}

#[test]
fn test_locality_floor() {
    assert!(is_visible_at_zoom(FeatureType::Locality, 10.0));
    assert!(!is_visible_at_zoom(FeatureType::Locality, 9.5));
}

#[test]
fn test_placename_selected() {
    let placename = get_style(FeatureType::Placename);
    let resolved = resolve(FeatureType::Placename, InteractionState::Selected);
    assert_eq!(resolved.color, placename.select_color());
    assert_eq!(resolved.stroke_width, 14.0);
    assert_eq!(resolved.radius, Some(8.0));
}

#[test]
fn test_address_base() {
    let resolved = resolve(FeatureType::Address, InteractionState::Base);
    assert_eq!(resolved.color, Rgba::new(128, 128, 128, 0.5));
    assert_eq!(resolved.stroke_width, 4.0);
    assert_eq!(resolved.radius, Some(4.0));
}

#[test]
fn test_line_features_have_no_radius() {
    for feature in [FeatureType::Road, FeatureType::Lga, FeatureType::Locality] {
        for state in InteractionState::ALL {
            assert_eq!(resolve(feature, state).radius, None);
        }
    }
}

#[test]
fn test_unknown_name_fails() {
    let err = get_style_by_name("unknown").unwrap_err();
    assert!(matches!(err, StyleError::UnknownFeatureType(ref key) if key == "unknown"));
}

#[test]
fn test_known_names_resolve() {
    for feature in FeatureType::ALL {
        assert_eq!(get_style_by_name(feature.as_str()).unwrap(), get_style(feature));
    }
}

#[test]
fn test_repeated_resolution_is_stable() {
    for feature in FeatureType::ALL {
        for state in InteractionState::ALL {
            assert_eq!(resolve(feature, state), resolve(feature, state));
        }
    }
}

#[test]
fn test_overlays() {
    assert_eq!(draw_style().stroke_width, 2.0);
    assert_eq!(hover_style().stroke_width, 4.0);
    assert_eq!(overlay(OverlayKind::Draw), draw_style());
    assert_eq!(overlay(OverlayKind::Hover), hover_style());
    assert_eq!(draw_style().circle_stroke_color, Rgba::rgb(0, 0, 0));
}

#[test]
fn test_table_shared_across_threads() {
    let table: &'static StyleTable = StyleTable::builtin();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                FeatureType::ALL
                    .into_iter()
                    .map(|feature| table.resolve(feature, InteractionState::Hover))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let expected: Vec<_> = FeatureType::ALL
        .into_iter()
        .map(|feature| resolve(feature, InteractionState::Hover))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
