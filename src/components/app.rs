use yew::prelude::*;

use super::map_view::MapView;
use crate::model::Tourist;
use crate::util::clog;

/// Canned feed for the standalone build, mirroring the wire shape of
/// the live tracking endpoint.
pub const DEMO_FEED: &str = r#"[
  {
    "id": "t1",
    "name": "John Smith",
    "nationality": "USA",
    "hotel_name": "Hotel Royal",
    "itinerary": "Temple tour, Local markets",
    "status": "active",
    "safety_score": 85,
    "zone_type": "safe",
    "location": { "lat": 26.1445, "lng": 91.7362 }
  },
  {
    "id": "t2",
    "name": "Emma Wilson",
    "nationality": "UK",
    "hotel_name": "Brahmaputra Hotel",
    "itinerary": "Wildlife sanctuary, River cruise",
    "status": "active",
    "safety_score": 67,
    "zone_type": "caution",
    "location": { "lat": 26.1158, "lng": 91.7086 }
  },
  {
    "id": "t3",
    "name": "Hans Mueller",
    "nationality": "Germany",
    "hotel_name": "Northeast Inn",
    "itinerary": "Adventure trekking, Remote villages",
    "status": "active",
    "safety_score": 40,
    "zone_type": "danger",
    "location": { "lat": 26.1733, "lng": 91.7458 }
  },
  {
    "id": "t4",
    "name": "Maria Garcia",
    "nationality": "Spain",
    "hotel_name": "Paradise Resort",
    "itinerary": "Cultural sites, Photography",
    "status": "active",
    "safety_score": 78,
    "zone_type": "safe",
    "location": { "lat": 26.1341, "lng": 91.7880 }
  },
  {
    "id": "t5",
    "name": "Yuki Tanaka",
    "nationality": "Japan",
    "hotel_name": "Assam Palace",
    "itinerary": "Tea gardens, Monasteries",
    "status": "active",
    "safety_score": 92,
    "zone_type": "safe",
    "location": { "lat": 26.1689, "lng": 91.7631 }
  }
]"#;

pub fn demo_tourists() -> Vec<Tourist> {
    match serde_json::from_str(DEMO_FEED) {
        Ok(list) => list,
        Err(err) => {
            clog(&format!("demo feed parse failed: {}", err));
            Vec::new()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let tourists = use_state(demo_tourists);

    let on_select = Callback::from(|selected: Option<String>| match selected {
        Some(id) => clog(&format!("selected tourist {}", id)),
        None => clog("selection cleared"),
    });

    html! {
        <div style="max-width:1100px; margin:0 auto; padding:24px;">
            <h1 style="font-size:22px; margin-bottom:4px;">{ "Tourist Safety Map" }</h1>
            <p style="color:#94a3b8; margin-top:0; margin-bottom:16px;">
                { "Live positions over safety zones, relief and road layers." }
            </p>
            <MapView tourists={(*tourists).clone()} on_select={on_select} />
        </div>
    }
}
