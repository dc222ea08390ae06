pub mod layers;
pub mod markers;
pub mod project;
pub mod tooltip;

pub use layers::{build_scene, SceneSpec};
pub use markers::{build_markers, MarkerSpec};
pub use project::{project, Viewport};
pub use tooltip::{place_tooltip, TooltipPlacement};
