pub mod components;
pub mod model;
pub mod scene;
pub mod util;
