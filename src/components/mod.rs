pub mod app;
pub mod detail_overlay;
pub mod legend;
pub mod map_view;
pub mod style_selector;
pub mod tooltip;

pub use app::App;
pub use detail_overlay::DetailOverlay;
pub use legend::Legend;
pub use map_view::MapView;
pub use style_selector::StyleSelector;
pub use tooltip::Tooltip;
