pub mod cross_section;
pub mod extruded_polygon;
pub mod hexagon;

pub use cross_section::{CrossSection, CrossSectionProvider};
pub use extruded_polygon::{ExtrudedPolygon, ZSection};
pub use hexagon::HexagonalWafer;
