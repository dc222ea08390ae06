//! Core data models for the safety map.
//! Entity records mirror the tracking feed's wire names; `MapState` holds
//! the only mutable state the map owns (style, hover, selection, relief
//! seed) and is driven exclusively through `MapAction`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouristStatus {
    Active,
    Inactive,
    Missing,
}

impl TouristStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TouristStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TouristStatus::Active => "active",
            TouristStatus::Inactive => "inactive",
            TouristStatus::Missing => "missing",
        }
    }
}

/// Risk category attached to an entity (and to the static overlay zones).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Safe,
    Caution,
    Danger,
    /// Anything the feed sends that we do not recognize.
    #[serde(other)]
    Unknown,
}

impl ZoneKind {
    pub const fn color(&self) -> &'static str {
        match self {
            ZoneKind::Safe => "#22c55e",
            ZoneKind::Caution => "#f59e0b",
            ZoneKind::Danger => "#ef4444",
            ZoneKind::Unknown => "#9ca3af",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneKind::Safe => "safe",
            ZoneKind::Caution => "caution",
            ZoneKind::Danger => "danger",
            ZoneKind::Unknown => "unknown",
        }
    }
}

/// One monitored individual as delivered by the tracking feed. The map only
/// reads these; ownership stays with the data layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tourist {
    pub id: String,
    pub name: String,
    pub nationality: String,
    pub hotel_name: String,
    pub itinerary: String,
    pub status: TouristStatus,
    /// 0..=100, higher is safer.
    pub safety_score: u8,
    pub zone_type: ZoneKind,
    /// Entities without a position fix stay off the map.
    pub location: Option<GeoPoint>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Terrain,
    Satellite,
    Road,
}

impl MapStyle {
    pub const ALL: [MapStyle; 3] = [MapStyle::Terrain, MapStyle::Satellite, MapStyle::Road];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Terrain => "terrain",
            MapStyle::Satellite => "satellite",
            MapStyle::Road => "road",
        }
    }

    pub fn from_str(s: &str) -> Option<MapStyle> {
        match s {
            "terrain" => Some(MapStyle::Terrain),
            "satellite" => Some(MapStyle::Satellite),
            "road" => Some(MapStyle::Road),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapStyle::Terrain => "Terrain",
            MapStyle::Satellite => "Satellite",
            MapStyle::Road => "Road",
        }
    }
}

/// Container-relative pointer position captured when a marker was entered.
/// Exactly one may exist; replacing it is how rapid hover transitions stay
/// orphan-free.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverAnchor {
    pub tourist_id: String,
    pub x: f64,
    pub y: f64,
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug, PartialEq)]
pub struct MapState {
    pub style: MapStyle,
    pub hovered: Option<HoverAnchor>,
    pub selected_id: Option<String>,
    /// Seed for the procedural relief layout; re-rolled on every full
    /// rebuild so the backdrop stays visually fresh.
    pub relief_seed: u64,
}

impl MapState {
    pub fn new(style: MapStyle, relief_seed: u64) -> Self {
        Self {
            style,
            hovered: None,
            selected_id: None,
            relief_seed,
        }
    }
}

#[derive(Clone, Debug)]
pub enum MapAction {
    /// Style switch; the whole scene is rebuilt, so interaction state tied
    /// to the old marker subtree is discarded with it.
    SetStyle(MapStyle),
    /// Entity list replaced wholesale; same teardown as a style switch.
    DataChanged,
    HoverEnter { id: String, x: f64, y: f64 },
    HoverLeave { id: String },
    Select { id: String },
    ClearSelection,
}

impl Reducible for MapState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MapAction::*;
        let mut new = (*self).clone();
        match action {
            SetStyle(style) => {
                new.style = style;
                new.hovered = None;
                new.selected_id = None;
                new.relief_seed = next_seed(new.relief_seed);
            }
            DataChanged => {
                new.hovered = None;
                new.selected_id = None;
                new.relief_seed = next_seed(new.relief_seed);
            }
            HoverEnter { id, x, y } => {
                new.hovered = Some(HoverAnchor {
                    tourist_id: id,
                    x,
                    y,
                });
            }
            HoverLeave { id } => {
                // Leaves from a discarded subtree may arrive after the hover
                // moved on; only the currently hovered marker clears it.
                let matches = new
                    .hovered
                    .as_ref()
                    .map(|h| h.tourist_id == id)
                    .unwrap_or(false);
                if matches {
                    new.hovered = None;
                }
            }
            Select { id } => {
                new.selected_id = Some(id);
            }
            ClearSelection => {
                new.selected_id = None;
            }
        }
        Rc::new(new)
    }
}

/// Deterministic seed advance (64-bit LCG step). Rebuilds get fresh layouts
/// without asking the host for new entropy each time.
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<MapState>, action: MapAction) -> Rc<MapState> {
        state.reduce(action)
    }

    fn hover(id: &str) -> MapAction {
        MapAction::HoverEnter {
            id: id.to_string(),
            x: 100.0,
            y: 80.0,
        }
    }

    #[test]
    fn hover_then_leave_clears_anchor() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(s, hover("t1"));
        assert!(s.hovered.is_some());
        let s = dispatch(
            s,
            MapAction::HoverLeave {
                id: "t1".to_string(),
            },
        );
        assert!(s.hovered.is_none());
    }

    #[test]
    fn hover_then_hover_another_keeps_exactly_one_anchor() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(s, hover("t1"));
        let s = dispatch(s, hover("t2"));
        let anchor = s.hovered.as_ref();
        assert_eq!(anchor.map(|h| h.tourist_id.as_str()), Some("t2"));
    }

    #[test]
    fn stale_leave_from_discarded_marker_is_a_noop() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(s, hover("t2"));
        let s = dispatch(
            s,
            MapAction::HoverLeave {
                id: "t1".to_string(),
            },
        );
        assert_eq!(
            s.hovered.as_ref().map(|h| h.tourist_id.as_str()),
            Some("t2")
        );
    }

    #[test]
    fn leave_with_no_hover_is_a_noop() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(
            s,
            MapAction::HoverLeave {
                id: "t1".to_string(),
            },
        );
        assert!(s.hovered.is_none());
    }

    #[test]
    fn style_change_resets_hover_and_selection() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(s, hover("t1"));
        let s = dispatch(
            s,
            MapAction::Select {
                id: "t1".to_string(),
            },
        );
        let before_seed = s.relief_seed;
        let s = dispatch(s, MapAction::SetStyle(MapStyle::Satellite));
        assert_eq!(s.style, MapStyle::Satellite);
        assert!(s.hovered.is_none());
        assert!(s.selected_id.is_none());
        assert_ne!(s.relief_seed, before_seed);
    }

    #[test]
    fn data_change_resets_interaction_and_rerolls_seed() {
        let s = Rc::new(MapState::new(MapStyle::Road, 9));
        let s = dispatch(s, hover("t1"));
        let before_seed = s.relief_seed;
        let s = dispatch(s, MapAction::DataChanged);
        assert!(s.hovered.is_none());
        assert!(s.selected_id.is_none());
        assert_ne!(s.relief_seed, before_seed);
        // Style survives a data refresh.
        assert_eq!(s.style, MapStyle::Road);
    }

    #[test]
    fn select_then_clear_round_trips_to_none() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(
            s,
            MapAction::Select {
                id: "t1".to_string(),
            },
        );
        assert_eq!(s.selected_id.as_deref(), Some("t1"));
        let s = dispatch(s, MapAction::ClearSelection);
        assert!(s.selected_id.is_none());
    }

    #[test]
    fn selecting_again_replaces_selection() {
        let s = Rc::new(MapState::new(MapStyle::Terrain, 1));
        let s = dispatch(
            s,
            MapAction::Select {
                id: "t1".to_string(),
            },
        );
        let s = dispatch(
            s,
            MapAction::Select {
                id: "t2".to_string(),
            },
        );
        assert_eq!(s.selected_id.as_deref(), Some("t2"));
    }

    #[test]
    fn seed_advance_is_deterministic() {
        let a = Rc::new(MapState::new(MapStyle::Terrain, 42));
        let b = Rc::new(MapState::new(MapStyle::Terrain, 42));
        let a = dispatch(a, MapAction::DataChanged);
        let b = dispatch(b, MapAction::DataChanged);
        assert_eq!(a.relief_seed, b.relief_seed);
    }

    #[test]
    fn unknown_zone_string_parses_to_unknown() {
        let t: Tourist = serde_json::from_str(
            r#"{
                "id": "x1",
                "name": "A",
                "nationality": "B",
                "hotel_name": "C",
                "itinerary": "D",
                "status": "active",
                "safety_score": 50,
                "zone_type": "restricted",
                "location": {"lat": 26.1, "lng": 91.7}
            }"#,
        )
        .unwrap();
        assert_eq!(t.zone_type, ZoneKind::Unknown);
        assert_eq!(t.zone_type.color(), "#9ca3af");
    }

    #[test]
    fn map_style_round_trips_through_strings() {
        for style in MapStyle::ALL {
            assert_eq!(MapStyle::from_str(style.as_str()), Some(style));
        }
        assert_eq!(MapStyle::from_str("plasma"), None);
    }
}
