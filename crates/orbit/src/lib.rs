//! Radial layout engine for the experience carousel.
//!
//! Items sit on a circle around a featured item. The [`Selection`] decides which item is
//! featured, and [`layout`] turns every item's slot into an offset from the circle's center.

mod macros;

pub mod carousel;
pub mod error;
pub mod item;
pub mod layout;
pub mod selection;

pub use carousel::{Carousel, Layout, Placement, Variant};
pub use error::OrbitError;
pub use item::{DateRange, Description, Item, Role, Title};
pub use layout::{Offset, RadiusMode, RadiusPolicy};
pub use selection::{Selection, Transition};
