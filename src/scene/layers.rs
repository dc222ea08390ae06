// Procedural construction of everything drawn beneath the markers.
// Draw order: background gradient, terrain texture, relief (hills and
// groves), the river, roads, then the safety-zone overlays.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::project::Viewport;
use crate::model::{MapStyle, ZoneKind};

pub const HILL_COUNT: usize = 5;
pub const GROVE_COUNT: usize = 8;

// Terrain texture tile: faint contour lines over a dark base.
pub const TERRAIN_TILE: f64 = 60.0;
pub const TERRAIN_BASE_FILL: &str = "#1e293b";
pub const CONTOUR_UPPER: &str = "M0,30 Q15,15 30,30 T60,30";
pub const CONTOUR_LOWER: &str = "M0,45 Q20,35 40,45 T60,45";
pub const CONTOUR_UPPER_STROKE: &str = "rgba(59, 130, 246, 0.15)";
pub const CONTOUR_LOWER_STROKE: &str = "rgba(59, 130, 246, 0.1)";

pub const HILL_FILL: &str = "rgba(34, 197, 94, 0.2)";
pub const HILL_STROKE: &str = "rgba(34, 197, 94, 0.4)";
pub const GROVE_FILL: &str = "rgba(34, 197, 94, 0.15)";
pub const GROVE_STROKE: &str = "rgba(34, 197, 94, 0.3)";

pub const RIVER_WIDTH: f64 = 12.0;
pub const RIVER_OPACITY: f64 = 0.8;
pub const WATER_GRAD_FROM: &str = "#1e40af";
pub const WATER_GRAD_TO: &str = "#3b82f6";

pub const HIGHWAY_STROKE: &str = "rgba(156, 163, 175, 0.6)";
pub const HIGHWAY_WIDTH: f64 = 4.0;
pub const BYWAY_STROKE: &str = "rgba(156, 163, 175, 0.4)";
pub const BYWAY_WIDTH: f64 = 2.0;
pub const BYWAY_DASH: &str = "10,5";

pub const ZONE_DASH: &str = "5,5";
pub const ZONE_WIDTH: f64 = 2.0;

/// Static zone layout: center as a fraction of the viewport, radius in px.
/// Schematic by design, not derived from entity density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafetyZone {
    pub fx: f64,
    pub fy: f64,
    pub radius: f64,
    pub kind: ZoneKind,
}

pub const SAFETY_ZONES: [SafetyZone; 5] = [
    SafetyZone {
        fx: 0.2,
        fy: 0.3,
        radius: 80.0,
        kind: ZoneKind::Safe,
    },
    SafetyZone {
        fx: 0.7,
        fy: 0.7,
        radius: 100.0,
        kind: ZoneKind::Safe,
    },
    SafetyZone {
        fx: 0.5,
        fy: 0.5,
        radius: 90.0,
        kind: ZoneKind::Caution,
    },
    SafetyZone {
        fx: 0.15,
        fy: 0.8,
        radius: 70.0,
        kind: ZoneKind::Danger,
    },
    SafetyZone {
        fx: 0.85,
        fy: 0.2,
        radius: 60.0,
        kind: ZoneKind::Danger,
    },
];

pub fn zone_fill(kind: ZoneKind) -> &'static str {
    match kind {
        ZoneKind::Safe => "rgba(34, 197, 94, 0.1)",
        ZoneKind::Caution => "rgba(251, 191, 36, 0.1)",
        ZoneKind::Danger => "rgba(239, 68, 68, 0.1)",
        ZoneKind::Unknown => "rgba(156, 163, 175, 0.1)",
    }
}

pub fn zone_stroke(kind: ZoneKind) -> &'static str {
    match kind {
        ZoneKind::Safe => "rgba(34, 197, 94, 0.3)",
        ZoneKind::Caution => "rgba(251, 191, 36, 0.4)",
        ZoneKind::Danger => "rgba(239, 68, 68, 0.4)",
        ZoneKind::Unknown => "rgba(156, 163, 175, 0.3)",
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendItem {
    pub color: &'static str,
    pub label: &'static str,
}

pub const LEGEND_ITEMS: [LegendItem; 4] = [
    LegendItem {
        color: ZoneKind::Safe.color(),
        label: "Safe Zone",
    },
    LegendItem {
        color: ZoneKind::Caution.color(),
        label: "Caution Zone",
    },
    LegendItem {
        color: ZoneKind::Danger.color(),
        label: "Danger Zone",
    },
    LegendItem {
        color: "#3b82f6",
        label: "Water Body",
    },
];

/// One relief hill: a filled triangle on a shared baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hill {
    pub x: f64,
    pub baseline: f64,
    pub width: f64,
    pub height: f64,
}

impl Hill {
    pub fn path(&self) -> String {
        format!(
            "M {} {} L {} {} L {} {} Z",
            self.x - self.width / 2.0,
            self.baseline,
            self.x,
            self.baseline - self.height,
            self.x + self.width / 2.0,
            self.baseline
        )
    }
}

/// A circular vegetation patch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grove {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// A zone overlay resolved against the current viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub kind: ZoneKind,
}

/// Pure description of one rebuilt scene (all layers except markers),
/// consumed by a single render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSpec {
    pub background: &'static str,
    pub hills: Vec<Hill>,
    pub groves: Vec<Grove>,
    pub river: String,
    pub highway: String,
    pub byways: Vec<String>,
    pub zones: Vec<ZoneCircle>,
}

pub fn background_css(style: MapStyle) -> &'static str {
    match style {
        MapStyle::Terrain => {
            "linear-gradient(135deg, #1a202c 0%, #2d3748 30%, #4a5568 70%, #2d3748 100%)"
        }
        MapStyle::Satellite => "linear-gradient(135deg, #2d3748 0%, #4a5568 50%, #2d3748 100%)",
        MapStyle::Road => "linear-gradient(135deg, #1e293b 0%, #334155 50%, #1e293b 100%)",
    }
}

/// Builds the full layer stack for one render. The seed pins the relief
/// layout; everything else is a pure function of style and viewport.
pub fn build_scene(style: MapStyle, viewport: Viewport, seed: u64) -> SceneSpec {
    let background = background_css(style);
    if !viewport.is_usable() {
        return SceneSpec {
            background,
            hills: Vec::new(),
            groves: Vec::new(),
            river: String::new(),
            highway: String::new(),
            byways: Vec::new(),
            zones: Vec::new(),
        };
    }

    let w = viewport.width;
    let h = viewport.height;
    let mut rng = SmallRng::seed_from_u64(seed);

    let hills = (0..HILL_COUNT)
        .map(|i| Hill {
            x: w / 6.0 * (i as f64 + 1.0),
            baseline: h * 0.3,
            width: rng.gen_range(60.0..100.0),
            height: rng.gen_range(40.0..70.0),
        })
        .collect();

    let groves = (0..GROVE_COUNT)
        .map(|_| Grove {
            cx: rng.gen_range(0.0..w),
            cy: rng.gen_range(0.0..h),
            r: rng.gen_range(20.0..50.0),
        })
        .collect();

    let river = format!(
        "M 0 {} Q {} {} {} {} T {} {}",
        h * 0.6,
        w * 0.3,
        h * 0.5,
        w * 0.6,
        h * 0.65,
        w,
        h * 0.7
    );

    let highway = format!(
        "M 0 {} Q {} {} {} {}",
        h * 0.4,
        w * 0.5,
        h * 0.35,
        w,
        h * 0.45
    );

    let byways = vec![
        format!("M {} 0 Q {} {} {} {}", w * 0.2, w * 0.25, h * 0.5, w * 0.3, h),
        format!("M {} 0 Q {} {} {} {}", w * 0.7, w * 0.65, h * 0.4, w * 0.8, h),
        format!(
            "M 0 {} Q {} {} {} {}",
            h * 0.2,
            w * 0.4,
            h * 0.15,
            w,
            h * 0.25
        ),
    ];

    let zones = SAFETY_ZONES
        .iter()
        .map(|z| ZoneCircle {
            cx: z.fx * w,
            cy: z.fy * h,
            r: z.radius,
            kind: z.kind,
        })
        .collect();

    SceneSpec {
        background,
        hills,
        groves,
        river,
        highway,
        byways,
        zones,
    }
}
