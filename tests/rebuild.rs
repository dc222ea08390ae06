use std::rc::Rc;

use yew::Reducible;
use yew_safety_map::components::app::demo_tourists;
use yew_safety_map::model::{GeoPoint, MapAction, MapState, MapStyle, Tourist, TouristStatus, ZoneKind};
use yew_safety_map::scene::project::EDGE_MARGIN;
use yew_safety_map::scene::tooltip::TOOLTIP_WIDTH;
use yew_safety_map::scene::{build_markers, build_scene, place_tooltip, Viewport};

fn dispatch(state: Rc<MapState>, action: MapAction) -> Rc<MapState> {
    state.reduce(action)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 500.0)
}

fn tourist(id: &str, zone: ZoneKind, lat: f64, lng: f64) -> Tourist {
    Tourist {
        id: id.to_string(),
        name: format!("Tourist {id}"),
        nationality: "Testland".to_string(),
        hotel_name: "Test Hotel".to_string(),
        itinerary: "City walk".to_string(),
        status: TouristStatus::Active,
        safety_score: 80,
        zone_type: zone,
        location: Some(GeoPoint { lat, lng }),
    }
}

/// A style switch rebuilds the whole backdrop: new background, re-rolled
/// relief, but the safety zones stay where they were.
#[test]
fn style_switch_rebuilds_the_whole_backdrop() {
    let vp = viewport();
    let mut state = Rc::new(MapState::new(MapStyle::Terrain, 7));
    state = dispatch(
        state,
        MapAction::HoverEnter {
            id: "t1".to_string(),
            x: 120.0,
            y: 80.0,
        },
    );
    state = dispatch(
        state,
        MapAction::Select {
            id: "t1".to_string(),
        },
    );
    let before = build_scene(state.style, vp, state.relief_seed);

    state = dispatch(state, MapAction::SetStyle(MapStyle::Satellite));
    let after = build_scene(state.style, vp, state.relief_seed);

    assert!(state.hovered.is_none(), "hover dies with the old subtree");
    assert!(state.selected_id.is_none(), "selection dies with the old subtree");
    assert_ne!(before.background, after.background, "each style paints its own base");
    assert_ne!(before.groves, after.groves, "relief re-rolls on rebuild");
    assert_eq!(before.zones, after.zones, "zones are anchored, not procedural");
}

/// Swapping the entity feed tears the scene down the same way, except the
/// style (and therefore the background) is untouched.
#[test]
fn feed_swap_rerolls_relief_under_the_same_background() {
    let vp = viewport();
    let mut state = Rc::new(MapState::new(MapStyle::Road, 42));
    let before = build_scene(state.style, vp, state.relief_seed);

    state = dispatch(state, MapAction::DataChanged);
    let after = build_scene(state.style, vp, state.relief_seed);

    assert_eq!(state.style, MapStyle::Road);
    assert_eq!(before.background, after.background);
    assert_ne!(before.groves, after.groves);
    assert_eq!(before.zones, after.zones);
}

/// An empty feed is not an error: the backdrop renders in full with zero
/// markers on top of it.
#[test]
fn empty_feed_keeps_the_base_scene() {
    let vp = viewport();
    let markers = build_markers(&[], vp);
    assert!(markers.is_empty());

    let scene = build_scene(MapStyle::Terrain, vp, 1);
    assert_eq!(scene.hills.len(), 5);
    assert_eq!(scene.groves.len(), 8);
    assert_eq!(scene.byways.len(), 3);
    assert_eq!(scene.zones.len(), 5);
    assert!(!scene.river.is_empty());
    assert!(!scene.highway.is_empty());
}

/// The bundled demo feed parses in full and every entry lands inside the
/// frame. Its first entry sits exactly on the projection center.
#[test]
fn demo_feed_anchors_on_the_city_center() {
    let vp = viewport();
    let feed = demo_tourists();
    assert_eq!(feed.len(), 5, "all demo entries parse");

    let markers = build_markers(&feed, vp);
    assert_eq!(markers.len(), 5, "every demo entry carries a location");
    for m in &markers {
        assert!(m.x >= EDGE_MARGIN && m.x <= vp.width - EDGE_MARGIN, "{} x={}", m.id, m.x);
        assert!(m.y >= EDGE_MARGIN && m.y <= vp.height - EDGE_MARGIN, "{} y={}", m.id, m.y);
    }

    assert!((markers[0].x - vp.width / 2.0).abs() < 1e-9);
    assert!((markers[0].y - vp.height / 2.0).abs() < 1e-9);
}

/// Full interaction pass over live markers: hover raises a tooltip that
/// fits the frame, click selects, a stray leave does not disturb the
/// selection, and clearing returns to idle.
#[test]
fn hover_select_walkthrough_over_live_markers() {
    let vp = viewport();
    let feed = vec![
        tourist("t1", ZoneKind::Safe, 19.076, 72.8777),
        tourist("t2", ZoneKind::Caution, 28.7041, 77.1025),
    ];
    let markers = build_markers(&feed, vp);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].color, "#22c55e");
    assert_eq!(markers[1].color, "#f59e0b");

    let mut state = Rc::new(MapState::new(MapStyle::Terrain, 3));
    let m = markers[0].clone();
    state = dispatch(
        state,
        MapAction::HoverEnter {
            id: m.id.clone(),
            x: m.x,
            y: m.y,
        },
    );
    let anchor = state.hovered.clone();
    let anchor = match anchor {
        Some(a) => a,
        None => panic!("hover anchor missing"),
    };
    assert_eq!(anchor.tourist_id, "t1");

    let placement = place_tooltip(anchor.x, anchor.y, vp);
    assert!(placement.left >= 0.0);
    assert!(placement.left <= vp.width - TOOLTIP_WIDTH);
    assert!(placement.top >= 0.0);

    state = dispatch(
        state,
        MapAction::Select {
            id: anchor.tourist_id.clone(),
        },
    );
    assert_eq!(state.selected_id.as_deref(), Some("t1"));

    // Pointer wanders off; the open card must not close with it.
    state = dispatch(
        state,
        MapAction::HoverLeave {
            id: "t1".to_string(),
        },
    );
    assert!(state.hovered.is_none());
    assert_eq!(state.selected_id.as_deref(), Some("t1"));

    state = dispatch(state, MapAction::ClearSelection);
    assert!(state.selected_id.is_none());
}
