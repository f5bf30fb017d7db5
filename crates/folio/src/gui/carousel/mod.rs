pub mod model;
pub mod view;

pub use model::{CarouselState, ItemGeometry};
pub use view::draw;

/// Pixel position inside the drawing area.
pub type Point = orbit::Offset;

pub const LOGO_SIZE: i32 = 56;
pub const FEATURED_RADIUS: f64 = 160.0;
pub const PERIPHERAL_RADIUS: f64 = 80.0;
pub const HOVER_SCALE: f64 = 1.05;
