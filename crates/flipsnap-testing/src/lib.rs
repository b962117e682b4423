//! Testing utilities and harness for flipsnap

pub mod assertions;
pub mod document;
pub mod element;
pub mod rule;

pub use document::FakeDocument;
pub use element::{FakeElement, FakeItem};
pub use rule::CarouselTestRule;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::document::FakeDocument;
    pub use crate::element::{FakeElement, FakeItem};
    pub use crate::rule::CarouselTestRule;
}
