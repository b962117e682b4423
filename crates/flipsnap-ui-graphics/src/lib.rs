//! Pure math/data for flipsnap
//!
//! This crate contains the geometry primitives and pixel units shared by
//! the gesture recogniser, the motion engine and the host adapters.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, TriangleSide};
    pub use crate::unit::Px;
}
