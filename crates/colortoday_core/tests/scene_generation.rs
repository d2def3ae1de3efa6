use colortoday_core::{date_key_to_seed, generate_scene, DateKey, Scene, Shape, DAILY_SHAPES};

const SAMPLE_DATES: [&str; 5] = [
    "2024-01-01",
    "2024-02-29",
    "2024-06-15",
    "2025-12-31",
    "2026-10-16",
];

fn daily(raw: &str) -> Scene {
    Scene::for_date(&DateKey::parse(raw).unwrap())
}

#[test]
fn same_date_generates_identical_scene() {
    for raw in SAMPLE_DATES {
        let key = DateKey::parse(raw).unwrap();
        let first = generate_scene(date_key_to_seed(&key), DAILY_SHAPES);
        let second = generate_scene(date_key_to_seed(&key), DAILY_SHAPES);
        assert_eq!(first, second, "scene for {raw} must be reproducible");
    }
}

#[test]
fn different_dates_generate_different_scenes() {
    assert_ne!(daily("2024-06-15"), daily("2024-06-16"));
}

#[test]
fn scene_length_matches_requested_count() {
    for count in [0, 1, 2, 7, 28, 100] {
        assert_eq!(generate_scene(12345, count).len(), count);
    }
}

#[test]
fn generated_shapes_respect_parameter_bounds() {
    for seed in 0..200_u32 {
        let scene = generate_scene(seed.wrapping_mul(2_654_435_761), DAILY_SHAPES);
        for shape in scene.shapes() {
            let center = shape.center();
            assert!((0.08..=0.92).contains(&center.x), "{shape:?}");
            assert!((0.08..=0.92).contains(&center.y), "{shape:?}");

            match shape {
                Shape::Circle { r, .. } => assert!((0.06..0.18).contains(r), "{shape:?}"),
                Shape::Rect { w, h, .. } => {
                    assert!((0.12..0.30).contains(w), "{shape:?}");
                    assert!((0.12..0.30).contains(h), "{shape:?}");
                }
                Shape::Polygon { cx, cy, points, .. } => {
                    assert!((5..=8).contains(&points.len()), "{shape:?}");
                    for point in points {
                        let distance = ((point.x - cx).powi(2) + (point.y - cy).powi(2)).sqrt();
                        // radius < 0.20 and wobble < 1.15
                        assert!(distance < 0.20 * 1.15 + 1e-12, "{shape:?}");
                        assert!(distance >= 0.08 * 0.65 - 1e-12, "{shape:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn ids_are_unique_and_ordered() {
    let scene = daily("2025-12-31");
    for (index, shape) in scene.shapes().iter().enumerate() {
        assert_eq!(shape.id(), format!("shape-{index}"));
    }
}

#[test]
fn reference_scene_has_expected_layout() {
    let scene = daily("2024-06-15");
    let kinds: String = scene
        .shapes()
        .iter()
        .map(|shape| match shape {
            Shape::Circle { .. } => 'c',
            Shape::Rect { .. } => 'r',
            Shape::Polygon { .. } => 'p',
        })
        .collect();
    assert_eq!(kinds, "rprpcrrrcpppcrcccrrprrpcccpr");

    match &scene.shapes()[0] {
        Shape::Rect { cx, cy, w, h, .. } => {
            assert_eq!(*cx, 0.553715156968683);
            assert_eq!(*cy, 0.13689257200807334);
            assert_eq!(*w, 0.19319354959297924);
            assert_eq!(*h, 0.2733126372098923);
        }
        other => panic!("expected rect, got {other:?}"),
    }

    match &scene.shapes()[4] {
        Shape::Circle { r, .. } => assert_eq!(*r, 0.06464396115392446),
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn polygon_vertices_match_reference_trigonometry() {
    let key = DateKey::parse("2024-01-01").unwrap();
    let scene = Scene::for_date(&key);

    match &scene.shapes()[8] {
        Shape::Polygon { points, .. } => {
            assert_eq!(points[0].y, 0.02485478520852355);
        }
        other => panic!("expected polygon, got {other:?}"),
    }
}

#[test]
fn scene_serializes_with_tagged_shapes() {
    let scene = generate_scene(5, 10);
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["seed"], 5);
    let shapes = json["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 10);
    for shape in shapes {
        let kind = shape["kind"].as_str().unwrap();
        assert!(["circle", "rect", "polygon"].contains(&kind));
    }
}
